use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("tree too deep to draw: height {height} exceeds limit {limit}")]
    TooDeep { height: usize, limit: usize },
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
}
