//! Gödel numbering: symbol sequences, code strings and exact integers.
//!
//! Role
//! - [`EncodableExpr`] writes a term or formula as an ordered sequence of [`Symbol`]s, a
//!   pre-order serialization of its syntax tree, parenthesized so that it is unambiguous.
//! - [`GodelEncoder`] maps the symbols through a [`CodeTable`], joins the decimal codes with
//!   the separator digit and reads the result as a [`BigUint`].
//!
//! Performance
//! - Symbol buffers use `smallvec` and keep up to 32 symbols inline before spilling to the heap.
//! - Encoding is linear in the number of symbols; parsing the digit string is the dominant cost.
//!
//! Example
//! ```
//! use hygodel::prelude::*;
//!
//! let f = eq(Term::Zero, Term::Zero);
//! assert_eq!(encode_formula(&f), ["6", "1", "4", "1", "7"]);
//! assert_eq!(encode_to_integer(&f).to_string(), "601040107");
//! ```
use log::{debug, trace};
use num_bigint::BigUint;
use smallvec::SmallVec;

use crate::{
    encoding::{symbol::Symbol, table::CodeTable},
    expr::{formula::Formula, term::Term},
    variable::Var,
};

pub mod integer;
pub mod symbol;
pub mod table;

/// A small, stack-allocated-first buffer of symbols.
pub type SymbolBuf = SmallVec<[Symbol; 32]>;

/// Trait for values that can append their symbol sequence to a buffer.
pub trait EncodableExpr {
    /// Append the symbols of `self` to `buf`, in order.
    fn encode_symbols_step(&self, buf: &mut SymbolBuf);

    /// Collect the symbols of `self` into a fresh buffer.
    #[inline]
    fn symbols(&self) -> SymbolBuf {
        let mut buf = SymbolBuf::new();
        self.encode_symbols_step(&mut buf);
        buf
    }
}

impl<T: EncodableExpr + ?Sized> EncodableExpr for &T {
    #[inline]
    fn encode_symbols_step(&self, buf: &mut SymbolBuf) {
        (**self).encode_symbols_step(buf)
    }
}

impl<T: EncodableExpr + ?Sized> EncodableExpr for Box<T> {
    #[inline]
    fn encode_symbols_step(&self, buf: &mut SymbolBuf) {
        (**self).encode_symbols_step(buf)
    }
}

impl EncodableExpr for Var {
    fn encode_symbols_step(&self, buf: &mut SymbolBuf) {
        buf.push(Symbol::Var);
        buf.extend(std::iter::repeat_n(Symbol::Star, self.stars() as usize));
    }
}

/// Encoder bound to one [`CodeTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GodelEncoder {
    table: CodeTable,
}

impl GodelEncoder {
    /// Encoder using the standard table.
    pub const fn standard() -> Self {
        Self {
            table: CodeTable::standard(),
        }
    }

    /// Encoder using the given (already validated) table.
    pub fn new(table: CodeTable) -> Self {
        Self { table }
    }

    /// The table this encoder numbers symbols with.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Ordered symbol codes of `e`, each rendered in decimal.
    pub fn codes<E: EncodableExpr + ?Sized>(&self, e: &E) -> Vec<String> {
        e.symbols()
            .into_iter()
            .map(|s| self.table.code(s).to_string())
            .collect()
    }

    /// The digit string of `e`: its codes joined by the separator digit.
    pub fn digits<E: EncodableExpr + ?Sized>(&self, e: &E) -> String {
        let symbols = e.symbols();
        integer::join_codes(
            symbols.iter().map(|&s| self.table.code(s)),
            self.table.separator(),
        )
    }

    /// The Gödel number of `e`.
    pub fn godel_number<E: EncodableExpr + ?Sized>(&self, e: &E) -> BigUint {
        let symbols = e.symbols();
        let digits = integer::join_codes(
            symbols.iter().map(|&s| self.table.code(s)),
            self.table.separator(),
        );
        trace!("Assembled digit string {digits}");

        // Every expression has at least one symbol and codes are positive decimals.
        let number = integer::parse_digits(&digits).expect("digit string of a nonempty encoding");
        debug!(
            "Encoded {} symbols into a Gödel number of {} digits",
            symbols.len(),
            digits.len()
        );
        number
    }
}

const STANDARD_ENCODER: GodelEncoder = GodelEncoder::standard();

/// Ordered code strings of a term under the standard table.
pub fn encode_term(t: &Term) -> Vec<String> {
    STANDARD_ENCODER.codes(t)
}

/// Ordered code strings of a formula under the standard table.
pub fn encode_formula(f: &Formula) -> Vec<String> {
    STANDARD_ENCODER.codes(f)
}

/// Gödel number of a term or formula under the standard table.
pub fn encode_to_integer<E: EncodableExpr + ?Sized>(e: &E) -> BigUint {
    STANDARD_ENCODER.godel_number(e)
}
