//! Symbol code tables.
//!
//! A [`CodeTable`] maps every [`Symbol`] to a positive integer and fixes the separator digit
//! written between consecutive codes. Two invariants make the resulting numbers unambiguous:
//! - the mapping is injective;
//! - no code's decimal rendering contains the separator digit.
//!
//! The standard table is checked at compile time; any other table is checked when built.
//!
//! Tables can be read from TOML:
//! ```
//! use hygodel::encoding::table::CodeTable;
//!
//! let table = CodeTable::from_toml_str(
//!     r#"
//!     separator = 0
//!     [codes]
//!     "0" = 1
//!     S = 2
//!     "+" = 3
//!     "=" = 4
//!     "<" = 5
//!     "(" = 6
//!     ")" = 7
//!     x = 8
//!     "*" = 9
//!     forall = 11
//!     exists = 12
//!     and = 13
//!     or = 14
//!     not = 15
//!     times = 16
//!     Proof = 17
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(table, CodeTable::standard());
//! ```
use std::collections::BTreeMap;

use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::{
    encoding::symbol::{NUM_SYMBOLS, STANDARD_CODES, STANDARD_SEPARATOR, Symbol},
    error::{Error, Result},
};

/// First invariant violation found in a raw table. Indices refer to `Symbol as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    InvalidSeparator,
    NonPositive(usize),
    Duplicate(usize, usize),
    SeparatorInCode(usize),
}

const fn contains_digit(mut code: u32, digit: u8) -> bool {
    loop {
        if (code % 10) as u8 == digit {
            return true;
        }
        code /= 10;
        if code == 0 {
            return false;
        }
    }
}

const fn first_violation(codes: &[u32; NUM_SYMBOLS], separator: u8) -> Option<Violation> {
    if separator > 9 {
        return Some(Violation::InvalidSeparator);
    }

    let mut i = 0;
    while i < NUM_SYMBOLS {
        if codes[i] == 0 {
            return Some(Violation::NonPositive(i));
        }
        if contains_digit(codes[i], separator) {
            return Some(Violation::SeparatorInCode(i));
        }
        let mut j = 0;
        while j < i {
            if codes[i] == codes[j] {
                return Some(Violation::Duplicate(j, i));
            }
            j += 1;
        }
        i += 1;
    }

    None
}

const _: () = assert!(
    first_violation(&STANDARD_CODES, STANDARD_SEPARATOR).is_none(),
    "the standard code table must be injective and separator-free"
);

fn symbol_at(index: usize) -> Symbol {
    Symbol::from_repr(index as u8).expect("index below NUM_SYMBOLS")
}

/// A validated mapping from symbols to codes, plus the separator digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeTable {
    codes: [u32; NUM_SYMBOLS],
    separator: u8,
}

impl CodeTable {
    /// The standard table (`0 ↦ 1`, `S ↦ 2`, … `Proof ↦ 17`, separator `0`).
    pub const fn standard() -> Self {
        Self {
            codes: STANDARD_CODES,
            separator: STANDARD_SEPARATOR,
        }
    }

    /// Build a table from raw codes indexed by `Symbol as usize`.
    pub fn new(codes: [u32; NUM_SYMBOLS], separator: u8) -> Result<Self> {
        let table = Self { codes, separator };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from `(symbol, code)` pairs. Every symbol must appear exactly once.
    pub fn from_pairs<I>(pairs: I, separator: u8) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, u32)>,
    {
        let mut codes: [Option<u32>; NUM_SYMBOLS] = [None; NUM_SYMBOLS];
        for (symbol, code) in pairs {
            if codes[symbol as usize].replace(code).is_some() {
                return Err(Error::DuplicateSymbol { symbol });
            }
        }

        let mut raw = [0u32; NUM_SYMBOLS];
        for symbol in Symbol::iter() {
            raw[symbol as usize] = codes[symbol as usize].ok_or(Error::MissingSymbol { symbol })?;
        }

        Self::new(raw, separator)
    }

    /// Read a table from a TOML document with a `separator` digit and a `[codes]` section
    /// keyed by symbol glyph or ASCII alias.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct CodeTableFile {
            #[serde(default)]
            separator: u8,
            codes: BTreeMap<String, u32>,
        }

        let file: CodeTableFile = toml::from_str(source)?;
        let pairs = file
            .codes
            .into_iter()
            .map(|(name, code)| {
                name.parse::<Symbol>()
                    .map(|symbol| (symbol, code))
                    .map_err(|_| Error::UnknownSymbol { name })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_pairs(pairs, file.separator)
    }

    /// Check injectivity, positivity and separator safety.
    pub fn validate(&self) -> Result<()> {
        match first_violation(&self.codes, self.separator) {
            None => Ok(()),
            Some(Violation::InvalidSeparator) => Err(Error::InvalidSeparator {
                separator: self.separator,
            }),
            Some(Violation::NonPositive(i)) => Err(Error::NonPositiveCode {
                symbol: symbol_at(i),
            }),
            Some(Violation::Duplicate(i, j)) => Err(Error::DuplicateCode {
                code: self.codes[i],
                first: symbol_at(i),
                second: symbol_at(j),
            }),
            Some(Violation::SeparatorInCode(i)) => Err(Error::SeparatorInCode {
                symbol: symbol_at(i),
                code: self.codes[i],
                separator: self.separator,
            }),
        }
    }

    /// Code assigned to `symbol`.
    #[inline]
    pub fn code(&self, symbol: Symbol) -> u32 {
        self.codes[symbol as usize]
    }

    /// Separator digit (0..=9).
    #[inline]
    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Separator digit as an ASCII character.
    #[inline]
    pub fn separator_char(&self) -> char {
        (b'0' + self.separator) as char
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        Symbol::iter().map(|s| (s, self.code(s)))
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::standard()
    }
}
