mod wind;

pub use wind::{WindDayConfig, generate_direction_series, generate_speed_series};
