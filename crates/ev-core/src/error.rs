use thiserror::Error;

pub type EvResult<T> = Result<T, EvError>;

/// Errors shared by every envelope crate.
#[derive(Error, Debug)]
pub enum EvError {
    #[error("non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("too many {what}: {count} entries cannot be addressed by id")]
    TooManyEntries { what: &'static str, count: usize },

    #[error("invariant violated: {what}")]
    Invariant { what: String },
}
