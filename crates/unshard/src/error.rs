//! error types for unshard

use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed share {index}: {reason}")]
    MalformedShare { index: String, reason: String },

    #[error("case has no keys.k and no default threshold is configured")]
    MissingThreshold,

    #[error("threshold must be positive")]
    InvalidThreshold,

    #[error("cannot decode {value:?} in base {base}")]
    Decode { value: String, base: u32 },

    #[error("not enough shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },

    #[error("denominator is zero")]
    ZeroDenominator,

    #[error("secret is not an integer: {numerator}/{denominator}")]
    NonIntegerSecret {
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("unsupported batch shape: {0}")]
    MalformedBatch(String),
}
