//! Terms and formulas of Peano arithmetic.
//!
//! Role
//! - [`term::Term`] and [`formula::Formula`] are closed sum types; every consumer in the crate
//!   matches them exhaustively, so a new constructor is a compile-time obligation everywhere.
//! - Builders in [`func`] and operator sugar (`+`, `*` on terms, `&`, `|`, `!` on formulas)
//!   let you create expressions ergonomically.
//! - [`pretty`] renders expressions for humans.
//!
//! Example
//! ```
//! use hygodel::prelude::*;
//!
//! let x = Var::X;
//! let f = forall(x, not(eq(succ(x), zero())));
//! assert!(f.is_sentence());
//! assert_eq!(f.to_string(), "∀x ¬(S(x) = 0)");
//! ```
pub mod formula;
pub mod func;
pub mod pretty;
pub mod term;
