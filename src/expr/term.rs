//! Arithmetic terms: `0`, variables, successor, addition and multiplication.
use std::collections::BTreeSet;

use num_bigint::BigUint;
use strum::{EnumDiscriminants, EnumIs, EnumIter};

use crate::{
    encoding::{EncodableExpr, SymbolBuf, symbol::Symbol},
    variable::Var,
};

/// A term of Peano arithmetic.
///
/// Terms are plain immutable trees: each compound node owns its children and equality is
/// structural.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(TermType), derive(Hash, EnumIter))]
pub enum Term {
    /// The constant `0`.
    Zero,
    /// A variable `x`, `x*`, `x**`, …
    Var(Var),
    /// Successor `S(t)`.
    Succ(Box<Term>),
    /// Sum `(l + r)`.
    Add(Box<Term>, Box<Term>),
    /// Product `(l × r)`.
    Mul(Box<Term>, Box<Term>),
}

impl Term {
    /// Variable term.
    #[inline]
    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    /// Successor `S(t)`.
    #[inline]
    pub fn succ(t: impl Into<Term>) -> Self {
        Term::Succ(Box::new(t.into()))
    }

    /// Sum `(l + r)`.
    #[inline]
    pub fn add(l: impl Into<Term>, r: impl Into<Term>) -> Self {
        Term::Add(Box::new(l.into()), Box::new(r.into()))
    }

    /// Product `(l × r)`.
    #[inline]
    pub fn mul(l: impl Into<Term>, r: impl Into<Term>) -> Self {
        Term::Mul(Box::new(l.into()), Box::new(r.into()))
    }

    /// Discriminant of the outer constructor.
    #[inline]
    pub fn r#type(&self) -> TermType {
        self.into()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Term::Zero | Term::Var(_) => 1,
            Term::Succ(t) => 1 + t.size(),
            Term::Add(l, r) | Term::Mul(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Collect every variable occurring in the term.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    pub(crate) fn collect_variables(&self, out: &mut BTreeSet<Var>) {
        match self {
            Term::Zero => {}
            Term::Var(v) => {
                out.insert(*v);
            }
            Term::Succ(t) => t.collect_variables(out),
            Term::Add(l, r) | Term::Mul(l, r) => {
                l.collect_variables(out);
                r.collect_variables(out);
            }
        }
    }

    /// Whether `v` occurs in the term.
    pub fn contains_var(&self, v: Var) -> bool {
        match self {
            Term::Zero => false,
            Term::Var(w) => *w == v,
            Term::Succ(t) => t.contains_var(v),
            Term::Add(l, r) | Term::Mul(l, r) => l.contains_var(v) || r.contains_var(v),
        }
    }

    /// A term is closed when no variable occurs in it.
    pub fn is_closed(&self) -> bool {
        match self {
            Term::Zero => true,
            Term::Var(_) => false,
            Term::Succ(t) => t.is_closed(),
            Term::Add(l, r) | Term::Mul(l, r) => l.is_closed() && r.is_closed(),
        }
    }

    /// Replace every occurrence of `v` with `replacement`.
    pub fn substitute(&self, v: Var, replacement: &Term) -> Term {
        match self {
            Term::Var(w) if *w == v => replacement.clone(),
            Term::Zero | Term::Var(_) => self.clone(),
            Term::Succ(t) => Term::Succ(Box::new(t.substitute(v, replacement))),
            Term::Add(l, r) => Term::Add(
                Box::new(l.substitute(v, replacement)),
                Box::new(r.substitute(v, replacement)),
            ),
            Term::Mul(l, r) => Term::Mul(
                Box::new(l.substitute(v, replacement)),
                Box::new(r.substitute(v, replacement)),
            ),
        }
    }

    /// Value of a closed term under the standard interpretation, or `None` if a variable
    /// occurs in it.
    pub fn evaluate(&self) -> Option<BigUint> {
        match self {
            Term::Zero => Some(BigUint::default()),
            Term::Var(_) => None,
            Term::Succ(t) => t.evaluate().map(|n| n + 1u32),
            Term::Add(l, r) => Some(l.evaluate()? + r.evaluate()?),
            Term::Mul(l, r) => Some(l.evaluate()? * r.evaluate()?),
        }
    }

    /// If the term is a numeral `S(…S(0)…)`, the number of successors.
    pub fn numeral_value(&self) -> Option<u64> {
        let mut count = 0u64;
        let mut current = self;
        loop {
            match current {
                Term::Zero => return Some(count),
                Term::Succ(t) => {
                    count += 1;
                    current = t.as_ref();
                }
                _ => return None,
            }
        }
    }
}

impl From<Var> for Term {
    #[inline]
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

// ========================= Operator sugar =========================
impl<R: Into<Term>> std::ops::Add<R> for Term {
    type Output = Term;

    fn add(self, rhs: R) -> Term {
        Term::add(self, rhs)
    }
}

impl<R: Into<Term>> std::ops::Mul<R> for Term {
    type Output = Term;

    fn mul(self, rhs: R) -> Term {
        Term::mul(self, rhs)
    }
}

impl<R: Into<Term>> std::ops::Add<R> for Var {
    type Output = Term;

    fn add(self, rhs: R) -> Term {
        Term::add(self, rhs)
    }
}

impl<R: Into<Term>> std::ops::Mul<R> for Var {
    type Output = Term;

    fn mul(self, rhs: R) -> Term {
        Term::mul(self, rhs)
    }
}

// ======================== Encoding ========================
impl EncodableExpr for Term {
    fn encode_symbols_step(&self, buf: &mut SymbolBuf) {
        match self {
            Term::Zero => buf.push(Symbol::Zero),
            Term::Var(v) => v.encode_symbols_step(buf),
            Term::Succ(t) => {
                buf.push(Symbol::Succ);
                buf.push(Symbol::LParen);
                t.encode_symbols_step(buf);
                buf.push(Symbol::RParen);
            }
            Term::Add(l, r) => infix(buf, l, Symbol::Plus, r),
            Term::Mul(l, r) => infix(buf, l, Symbol::Times, r),
        }
    }
}

/// `( l op r )`, shared by every binary node of terms and formulas.
pub(crate) fn infix<L: EncodableExpr + ?Sized, R: EncodableExpr + ?Sized>(
    buf: &mut SymbolBuf,
    l: &L,
    op: Symbol,
    r: &R,
) {
    buf.push(Symbol::LParen);
    l.encode_symbols_step(buf);
    buf.push(op);
    r.encode_symbols_step(buf);
    buf.push(Symbol::RParen);
}
