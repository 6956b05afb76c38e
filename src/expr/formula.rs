//! First-order formulas over arithmetic terms.
use strum::{EnumDiscriminants, EnumIs, EnumIter};

use crate::{
    encoding::{EncodableExpr, SymbolBuf, symbol::Symbol},
    expr::term::{Term, infix},
    variable::Var,
};

/// A first-order formula of Peano arithmetic, extended with the `Proof` relation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumDiscriminants)]
#[strum_discriminants(name(FormulaType), derive(Hash, EnumIter))]
pub enum Formula {
    /// `l = r`.
    Eq(Term, Term),
    /// `l < r`.
    Lt(Term, Term),
    /// `¬f`.
    Not(Box<Formula>),
    /// `l ∧ r`.
    And(Box<Formula>, Box<Formula>),
    /// `l ∨ r`.
    Or(Box<Formula>, Box<Formula>),
    /// `∀v body`.
    ForAll { variable: Var, body: Box<Formula> },
    /// `∃v body`.
    Exists { variable: Var, body: Box<Formula> },
    /// `Proof(p, f)`: `p` codes a proof of the formula coded by `f`.
    ///
    /// This is an uninterpreted atomic relation; nothing in the crate evaluates it.
    Proof { proof: Term, formula: Term },
}

impl Formula {
    /// Discriminant of the outer constructor.
    #[inline]
    pub fn r#type(&self) -> FormulaType {
        self.into()
    }

    /// Number of nodes, counting term nodes and one node per quantified variable.
    pub fn size(&self) -> usize {
        match self {
            Formula::Eq(l, r) | Formula::Lt(l, r) => 1 + l.size() + r.size(),
            Formula::Proof { proof, formula } => 1 + proof.size() + formula.size(),
            Formula::Not(f) => 1 + f.size(),
            Formula::And(l, r) | Formula::Or(l, r) => 1 + l.size() + r.size(),
            Formula::ForAll { body, .. } | Formula::Exists { body, .. } => 2 + body.size(),
        }
    }

    /// A sentence is a formula without free variables.
    pub fn is_sentence(&self) -> bool {
        crate::subst::free_variables(self).is_empty()
    }
}

// Lightweight operator sugar for logical combinations.
impl std::ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::And(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::Or(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::Not(Box::new(self))
    }
}

// ======================== Encoding ========================
impl EncodableExpr for Formula {
    fn encode_symbols_step(&self, buf: &mut SymbolBuf) {
        match self {
            Formula::Eq(l, r) => infix(buf, l, Symbol::Equal, r),
            Formula::Lt(l, r) => infix(buf, l, Symbol::Less, r),
            Formula::Not(f) => {
                buf.push(Symbol::Not);
                f.encode_symbols_step(buf);
            }
            Formula::And(l, r) => infix(buf, l, Symbol::And, r),
            Formula::Or(l, r) => infix(buf, l, Symbol::Or, r),
            Formula::ForAll { variable, body } => binder(buf, Symbol::ForAll, *variable, body),
            Formula::Exists { variable, body } => binder(buf, Symbol::Exists, *variable, body),
            Formula::Proof { proof, formula } => infix(buf, proof, Symbol::Proof, formula),
        }
    }
}

/// `Q v ( body )`.
fn binder(buf: &mut SymbolBuf, quantifier: Symbol, variable: Var, body: &Formula) {
    buf.push(quantifier);
    variable.encode_symbols_step(buf);
    buf.push(Symbol::LParen);
    body.encode_symbols_step(buf);
    buf.push(Symbol::RParen);
}
