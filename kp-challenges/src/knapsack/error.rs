use thiserror::Error;

/// Reasons an instance is rejected before any solver runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("item {index} has a negative value ({value})")]
    NegativeValue { index: usize, value: i64 },
    #[error("item {index} has a negative weight ({weight})")]
    NegativeWeight { index: usize, weight: i64 },
    #[error("capacity is negative ({0})")]
    NegativeCapacity(i64),
    #[error("{values} values were given for {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
    #[error("{what} ({value}) does not fit in 32 bits")]
    TooLarge { what: &'static str, value: i64 },
}
