//! Hygodel: Gödel numbering of Peano arithmetic.
//!
//! This crate represents terms and first-order formulas of Peano arithmetic as plain sum types
//! and maps them, through a fixed symbol code table, to a single arbitrary-precision integer:
//! their Gödel number. It also builds numerals and performs the diagonal construction that
//! yields a sentence asserting its own unprovability.
//!
//! Encoding shape
//!  - Every expression is written as a parenthesized pre-order sequence of symbols.
//!  - Each symbol has a positive code (see [`encoding::symbol`]); codes are written in decimal
//!    and joined with the separator digit `0`, which no code contains.
//!  - The resulting digit string, read as an integer, is the Gödel number. Distinct trees have
//!    distinct numbers.
//!
//! Numerals
//!  - The standard numeral of `n` has `n` successor nodes, so numerals of real Gödel numbers
//!    cannot be built; callers bound them explicitly (see [`numeral`]).
//!
//! Example
//! ```
//! use hygodel::prelude::*;
//!
//! let x = Var::X;
//! let f = eq(add(x, succ(zero())), add(x, succ(zero())));
//! assert_eq!(f.to_string(), "x + S(0) = x + S(0)");
//! assert_eq!(
//!     encode_to_integer(&f).to_string(),
//!     "6060803020601070704060803020601070707"
//! );
//!
//! assert_eq!(numeral(2).unwrap(), succ(succ(zero())));
//! ```

/// Diagonalization and the Gödel sentence.
pub mod diagonal;
/// Symbol code tables, tokenization and integer assembly.
pub mod encoding;
/// Crate-wide error type.
pub mod error;
/// Terms, formulas, builders and pretty-printing.
pub mod expr;
/// Standard and compact numerals.
pub mod numeral;
/// Sample axioms of Peano arithmetic.
pub mod peano;
/// Free variables and substitution.
pub mod subst;
/// Star-count variables.
pub mod variable;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - Term/formula types and free-function builders
    //! - Encoding entry points and the configurable encoder
    //! - Numerals and diagonalization
    //! - Pretty-printing via `PrettyExpr`
    pub use crate::diagonal::{
        Diagonalizer, NumeralForm, diagonalize, unprovability_predicate,
    };
    pub use crate::encoding::{
        EncodableExpr, GodelEncoder, encode_formula, encode_term, encode_to_integer,
        symbol::Symbol, table::CodeTable,
    };
    pub use crate::error::{Error, Result, UnsubstitutableReason};
    pub use crate::expr::{
        formula::Formula, func::*, pretty::PrettyExpr, term::Term,
    };
    pub use crate::numeral::{compact_numeral, numeral, numeral_bounded};
    pub use crate::subst::{bound_variables, free_variables, occurs_free, substitute};
    pub use crate::variable::Var;
}
