//! share type and base-N value decoding

use num_bigint::BigInt;

use crate::{Error, Result};

/// smallest base a share value may declare
pub const MIN_BASE: u32 = 2;

/// largest base a share value may declare (digits 0-9 then a-z)
pub const MAX_BASE: u32 = 36;

/// one decoded point on the secret polynomial
///
/// immutable once decoded; reconstruction only ever reads these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// share index, the x coordinate
    pub x: u64,
    /// decoded share value, the y coordinate
    pub y: BigInt,
}

impl Share {
    pub fn new(x: u64, y: BigInt) -> Self {
        Self { x, y }
    }

    /// decode a base-N encoded value string into a share
    pub fn decode(x: u64, value: &str, base: u32) -> Result<Self> {
        Ok(Self::new(x, decode_digits(value, base)?))
    }
}

/// decode a digit string in the declared base into an integer
///
/// accepts `0-9a-z` (case-insensitive) up to the base; anything else,
/// an empty string, or a base outside [2,36] is a decode error.
pub fn decode_digits(value: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::Decode {
            value: value.to_string(),
            base,
        });
    }
    BigInt::parse_bytes(value.as_bytes(), base).ok_or_else(|| Error::Decode {
        value: value.to_string(),
        base,
    })
}
