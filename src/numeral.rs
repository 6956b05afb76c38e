//! Numerals: terms that denote a given natural number.
//!
//! The standard numeral of `n` is `S(S(…S(0)…))` with `n` successors. Its size, and the time to
//! build it, are both Θ(n): the numeral of any realistic Gödel number (dozens to hundreds of
//! decimal digits) cannot be materialized at all. This is a property of the construction, not
//! something this module works around. [`numeral`] builds whatever it is asked for;
//! [`numeral_bounded`] lets callers reject oversized targets before any allocation.
//!
//! [`compact_numeral`] builds a different closed term denoting the same number, of size
//! Θ(log n), using `S(S(0))` as a base and multiplication. It is not the standard numeral, but
//! any closed term denoting `n` can stand in for it in the diagonal construction.
//!
//! ```
//! use hygodel::prelude::*;
//!
//! assert_eq!(numeral(3).unwrap(), succ(succ(succ(zero()))));
//! assert!(numeral(-1).unwrap_err().is_invalid_argument());
//! ```
use log::{debug, warn};
use num_bigint::{BigInt, BigUint};

use crate::{
    encoding::integer::decimal_len,
    error::{Error, Result},
    expr::term::Term,
};

/// Default ceiling on the number of successor applications a diagonalizer will build.
///
/// Traversals over terms are recursive, so the ceiling also bounds their stack depth.
pub const DEFAULT_NUMERAL_LIMIT: u64 = 10_000;

fn nonnegative(n: BigInt) -> Result<BigUint> {
    n.to_biguint().ok_or(Error::InvalidArgument { value: n })
}

/// Build `n` successor applications over `Zero`.
fn unary(n: &BigUint) -> Term {
    let mut result = Term::Zero;
    match u64::try_from(n) {
        Ok(count) => {
            for _ in 0..count {
                result = Term::succ(result);
            }
        }
        Err(_) => {
            // Beyond u64 this never finishes in practice; kept total for the contract.
            let mut remaining = n.clone();
            while remaining.bits() > 0 {
                result = Term::succ(result);
                remaining -= 1u32;
            }
        }
    }
    debug!("Built the standard numeral of {n}");
    result
}

/// The standard numeral of `n`: `n` nested `Succ` nodes over `Zero`.
///
/// Fails with [`Error::InvalidArgument`] if `n` is negative. No size check is performed; see
/// [`numeral_bounded`].
pub fn numeral(n: impl Into<BigInt>) -> Result<Term> {
    let n = nonnegative(n.into())?;
    Ok(unary(&n))
}

/// The standard numeral of `n`, refusing targets above `limit` successor applications.
pub fn numeral_bounded(n: impl Into<BigInt>, limit: &BigUint) -> Result<Term> {
    let n = nonnegative(n.into())?;
    if &n > limit {
        warn!("Rejected numeral of {} digits (limit {limit})", decimal_len(&n));
        return Err(Error::NumeralTooLarge {
            value: n,
            limit: limit.clone(),
        });
    }
    Ok(unary(&n))
}

/// A closed term of size Θ(log n) denoting `n`.
///
/// Built from the binary digits of `n`, most significant first, by Horner's rule:
/// `0 ↦ 0`, `1 ↦ S(0)`, `2m ↦ S(S(0)) × m`, `2m + 1 ↦ S(S(S(0)) × m)`.
pub fn compact_numeral(n: &BigUint) -> Term {
    let two = Term::succ(Term::succ(Term::Zero));
    let mut result: Option<Term> = None;

    for i in (0..n.bits()).rev() {
        result = Some(match result {
            // The leading binary digit is always 1.
            None => Term::succ(Term::Zero),
            Some(m) => {
                let doubled = Term::mul(two.clone(), m);
                if n.bit(i) {
                    Term::succ(doubled)
                } else {
                    doubled
                }
            }
        });
    }

    let result = result.unwrap_or(Term::Zero);
    debug!(
        "Built a compact numeral of {} nodes for a {}-bit number",
        result.size(),
        n.bits()
    );
    result
}
