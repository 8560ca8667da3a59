//! lagrange interpolation at x=0 to recover the secret
//!
//! the scheme runs over ordinary integers, not a finite field: the unique
//! degree-(k-1) polynomial through k shares is evaluated at zero with exact
//! rational arithmetic, and the result must come out integral.

use num_bigint::BigInt;

use crate::fraction::Fraction;
use crate::share::Share;
use crate::{Error, Result};

/// recover the secret from a set of decoded shares and a threshold
///
/// subset selection is a fixed policy: shares are stably sorted by ascending
/// x and the first k are used. no alternate subsets are tried and the
/// remaining n-k shares are never cross-checked against the interpolated
/// polynomial; inconsistencies among unused shares go undetected.
///
/// duplicate x values inside the chosen subset surface as
/// [`Error::ZeroDenominator`], and a sum with a non-unit denominator as
/// [`Error::NonIntegerSecret`].
pub fn reconstruct(shares: &[Share], k: usize) -> Result<BigInt> {
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }
    if shares.len() < k {
        return Err(Error::InsufficientShares {
            have: shares.len(),
            need: k,
        });
    }

    // deterministic subset: smallest k x-values, input order on ties
    let mut chosen: Vec<&Share> = shares.iter().collect();
    chosen.sort_by_key(|s| s.x);
    chosen.truncate(k);

    // L_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)
    let mut sum = Fraction::zero();
    for (i, si) in chosen.iter().enumerate() {
        let xi = BigInt::from(si.x);
        let mut basis = Fraction::one();
        for (j, sj) in chosen.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(sj.x);
            basis = basis.mul(&Fraction::new(-&xj, &xi - &xj)?);
        }
        sum = sum.add(&Fraction::from_integer(si.y.clone()).mul(&basis));
    }

    sum.into_integer()
}

/// reconstruct every case independently, preserving submission order
///
/// errors are captured per case so one failure never stops the rest of
/// the batch.
pub fn run_batch(cases: &[crate::input::Case]) -> Vec<Result<BigInt>> {
    cases
        .iter()
        .map(|case| reconstruct(&case.shares, case.k))
        .collect()
}
