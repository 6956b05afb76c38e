//! Grammar symbols and their standard codes.
//!
//! Conventions:
//! - Every term and formula is written as a sequence of [`Symbol`]s (see [`crate::encoding`]).
//! - The standard numbering assigns each symbol a small positive code and joins codes with the
//!   digit `0`, so no standard code may contain a `0` digit (hence `10` is skipped).
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr};

/// A terminal symbol of the arithmetic language.
///
/// `Display` renders the glyph; `FromStr` accepts either the glyph or the ASCII alias.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum Symbol {
    #[strum(to_string = "0", serialize = "zero")]
    Zero,
    #[strum(to_string = "S", serialize = "succ")]
    Succ,
    #[strum(to_string = "+", serialize = "plus")]
    Plus,
    #[strum(to_string = "=", serialize = "eq")]
    Equal,
    #[strum(to_string = "<", serialize = "lt")]
    Less,
    #[strum(to_string = "(", serialize = "lparen")]
    LParen,
    #[strum(to_string = ")", serialize = "rparen")]
    RParen,
    /// Variable marker `x`; followed by one [`Symbol::Star`] per star.
    #[strum(to_string = "x", serialize = "var")]
    Var,
    #[strum(to_string = "*", serialize = "star")]
    Star,
    #[strum(to_string = "∀", serialize = "forall")]
    ForAll,
    #[strum(to_string = "∃", serialize = "exists")]
    Exists,
    #[strum(to_string = "∧", serialize = "and")]
    And,
    #[strum(to_string = "∨", serialize = "or")]
    Or,
    #[strum(to_string = "¬", serialize = "not")]
    Not,
    #[strum(to_string = "×", serialize = "times")]
    Times,
    /// The `Proof` predicate marker.
    #[strum(to_string = "Proof", serialize = "proof")]
    Proof,
}

/// Number of symbols in the language.
pub const NUM_SYMBOLS: usize = <Symbol as EnumCount>::COUNT;

/// Standard codes, indexed by `Symbol as usize`.
pub const STANDARD_CODES: [u32; NUM_SYMBOLS] = [
    1,  // 0
    2,  // S
    3,  // +
    4,  // =
    5,  // <
    6,  // (
    7,  // )
    8,  // x
    9,  // *
    11, // ∀
    12, // ∃
    13, // ∧
    14, // ∨
    15, // ¬
    16, // ×
    17, // Proof
];

/// Standard separator digit placed between consecutive codes.
pub const STANDARD_SEPARATOR: u8 = 0;

impl Symbol {
    /// Code of this symbol in the standard table.
    #[inline]
    pub const fn standard_code(self) -> u32 {
        STANDARD_CODES[self as usize]
    }
}
