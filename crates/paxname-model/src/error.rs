use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown airline: {0}")]
    UnknownAirline(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
