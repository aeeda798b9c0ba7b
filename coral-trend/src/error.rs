use std::fmt;

#[derive(Debug)]
pub enum CoralTrendError {
    InvalidInput(String),
    YearNotFound { year: i32, min: i32, max: i32 },
    DataError(String),
}

pub type Result<T> = std::result::Result<T, CoralTrendError>;

impl fmt::Display for CoralTrendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::YearNotFound { year, min, max } => {
                write!(f, "year {year} out of range [{min}, {max}]")
            }
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for CoralTrendError {}
