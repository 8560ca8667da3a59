//! # unshard
//!
//! exact-rational reconstruction of secrets split with a (k,n) shamir-style
//! threshold scheme over the ordinary integers.
//!
//! each participant holds one share: a point (x, y) on a secret polynomial
//! of degree k-1, with y distributed as a digit string in some base between
//! 2 and 36. any k shares pin the polynomial down; the secret is its value
//! at x=0, recovered by lagrange interpolation carried out entirely in
//! reduced big-integer fractions so nothing is ever rounded.
//!
//! ## share selection policy
//!
//! given more than k shares, the k with the smallest x are used, always.
//! the remaining shares are never consulted or cross-checked against the
//! interpolated polynomial, so corruption among unused shares goes
//! undetected. this mirrors the scheme this crate interoperates with.
//!
//! ## usage
//!
//! ```rust
//! use unshard::num_bigint::BigInt;
//! use unshard::{reconstruct, Share};
//!
//! // points on y = x^2 + x + 2
//! let shares = vec![
//!     Share::new(1, BigInt::from(4)),
//!     Share::new(2, BigInt::from(7)),
//!     Share::new(3, BigInt::from(12)),
//! ];
//! let secret = reconstruct(&shares, 3).unwrap();
//! assert_eq!(secret, BigInt::from(2));
//! ```
//!
//! batch documents in the json wire format are handled by [`parse_batch`]
//! and [`solve_batch`]; see the [`input`] module for the accepted shapes.

pub mod error;
pub mod fraction;
pub mod input;
pub mod reconstruct;
pub mod share;

pub use error::{Error, Result};
pub use fraction::Fraction;
pub use input::{parse_batch, solve_batch, Case};
pub use reconstruct::{reconstruct, run_batch};
pub use share::{decode_digits, Share, MAX_BASE, MIN_BASE};

// re-exported so callers can name share values without pinning their own
// bignum version
pub use num_bigint;
