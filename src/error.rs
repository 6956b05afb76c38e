//! Crate-wide error type.
//!
//! Every error stems from an invalid caller-supplied argument or configuration; there is no
//! transient failure mode, so nothing here is meant to be retried.
use num_bigint::{BigInt, BigUint};
use strum::{Display, EnumIs};
use thiserror::Error;

use crate::{encoding::symbol::Symbol, variable::Var};

/// Why a diagonalization (or substitution request) was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum UnsubstitutableReason {
    /// The designated variable has no free occurrence in the formula.
    #[strum(to_string = "it does not occur free in the formula")]
    NotFree,
    /// The designated variable is also bound by a quantifier somewhere in the formula.
    #[strum(to_string = "it is also bound by a quantifier of the formula")]
    BoundElsewhere,
    /// Another variable is free in the formula, so the result would not be a sentence.
    #[strum(to_string = "other variables are free in the formula")]
    OtherFreeVariables,
}

#[derive(Debug, EnumIs, Error)]
pub enum Error {
    /// A variable was requested with a negative star count or a malformed name.
    #[error(
        "Invalid variable `{input}`. Variables are written `x` followed by zero or more `*`, and their star count must be nonnegative."
    )]
    InvalidVariable { input: String },

    /// A numeral was requested for a negative integer.
    #[error("Cannot build the numeral of `{value}`: numerals only exist for nonnegative integers.")]
    InvalidArgument { value: BigInt },

    /// A numeral target exceeds the caller-supplied ceiling.
    #[error(
        "Refusing to build the numeral of `{value}`: it exceeds the configured limit of `{limit}` successor applications."
    )]
    NumeralTooLarge { value: BigUint, limit: BigUint },

    /// Diagonalization was requested on a variable that cannot be substituted.
    #[error("Cannot substitute for variable `{variable}`: {reason}.")]
    Unsubstitutable {
        variable: Var,
        reason: UnsubstitutableReason,
    },

    /// Symbol codes must be strictly positive.
    #[error("Symbol `{symbol}` is assigned code 0, but codes must be positive.")]
    NonPositiveCode { symbol: Symbol },

    /// Two symbols share the same code, which would make the numbering ambiguous.
    #[error("Symbols `{first}` and `{second}` share the code `{code}`.")]
    DuplicateCode {
        code: u32,
        first: Symbol,
        second: Symbol,
    },

    /// The decimal rendering of a code contains the separator digit.
    #[error(
        "Code `{code}` of symbol `{symbol}` contains the separator digit `{separator}`, which would make concatenation ambiguous."
    )]
    SeparatorInCode {
        symbol: Symbol,
        code: u32,
        separator: u8,
    },

    /// The separator must be a single decimal digit.
    #[error("Separator `{separator}` is not a decimal digit.")]
    InvalidSeparator { separator: u8 },

    /// A code table configuration does not assign a code to some symbol.
    #[error("No code is assigned to symbol `{symbol}`.")]
    MissingSymbol { symbol: Symbol },

    /// A code table configuration assigns a code to the same symbol more than once.
    #[error("Symbol `{symbol}` is assigned a code more than once.")]
    DuplicateSymbol { symbol: Symbol },

    /// A code table configuration names a symbol that does not exist.
    #[error("Unknown symbol `{name}` in code table.")]
    UnknownSymbol { name: String },

    /// A code table configuration could not be parsed.
    #[error("Failed to parse code table: {source}")]
    ConfigParse {
        #[from]
        source: toml::de::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
