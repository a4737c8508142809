//! Error types for option pricing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No solution: {0}")]
    NoSolution(String),

    #[error("Numerical error: {0}")]
    Numerical(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn no_solution(msg: impl Into<String>) -> Self {
        Self::NoSolution(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }
}
