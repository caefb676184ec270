//! Wind vector projection and circular-angle arithmetic.
//!
//! Directions are averaged by summing unit-scaled vectors and taking the
//! angle of the sum; an arithmetic mean of angles is wrong across the
//! 0°/360° wrap (350° and 10° would average to 180°).

/// Wind vector at one grid tick, components in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindVector {
    /// North-south component: `speed * cos(direction)`.
    pub x: f64,
    /// West-east component: `speed * sin(direction)`.
    pub y: f64,
}

impl WindVector {
    pub const ZERO: WindVector = WindVector { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Project a held (speed, direction) pair onto the axes.
///
/// Speeds below `deadband` produce the zero vector: the vane reading carries
/// no usable heading at near-calm.
pub fn project(speed: f64, direction_rad: f64, deadband: f64) -> WindVector {
    if speed >= deadband {
        WindVector {
            x: speed * direction_rad.cos(),
            y: speed * direction_rad.sin(),
        }
    } else {
        WindVector::ZERO
    }
}

/// Angle of a summed vector as a direction in `[0, 360)` degrees.
pub fn vector_direction(sum_x: f64, sum_y: f64) -> f64 {
    let angle = sum_y.atan2(sum_x).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
