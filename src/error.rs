use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindError {
    #[error("Insufficient data: no samples recorded for {series} sensor")]
    InsufficientData { series: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WindError>;
