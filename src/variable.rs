//! Variables of the arithmetic language.
//!
//! Role
//! - The language has countably many variables `x, x*, x**, …`; a variable is identified by its
//!   star count alone, so it fits in a `Copy` newtype.
//! - Encoding writes a variable as the `x` symbol followed by one `*` symbol per star.
use std::str::FromStr;

use crate::error::{Error, Result};

/// A variable `x` followed by `stars` star marks.
///
/// Display
/// - `Var::new(0)` prints as `x`, `Var::new(2)` as `x**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(u32);

impl Var {
    /// The first variable, `x`.
    pub const X: Var = Var(0);

    /// Create the variable with the given star count.
    #[inline]
    pub const fn new(stars: u32) -> Self {
        Self(stars)
    }

    /// Number of `*` marks following `x`.
    #[inline]
    pub const fn stars(&self) -> u32 {
        self.0
    }

    /// The next variable in the sequence (one more star).
    #[inline]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<i64> for Var {
    type Error = Error;

    fn try_from(stars: i64) -> Result<Self> {
        u32::try_from(stars)
            .map(Var)
            .map_err(|_| Error::InvalidVariable {
                input: stars.to_string(),
            })
    }
}

impl FromStr for Var {
    type Err = Error;

    /// Parse a variable name such as `x` or `x***`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidVariable {
            input: s.to_string(),
        };

        let stars = s.strip_prefix('x').ok_or_else(invalid)?;
        if !stars.bytes().all(|b| b == b'*') {
            return Err(invalid());
        }

        u32::try_from(stars.len()).map(Var).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("x")?;
        for _ in 0..self.0 {
            f.write_str("*")?;
        }
        Ok(())
    }
}
