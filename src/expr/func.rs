//! Free-function builders for terms and formulas.
//!
//! ```
//! use hygodel::prelude::*;
//!
//! let x = Var::X;
//! let y = x.next();
//! // ∀x ∀x* (x + S(x*) = S(x + x*))
//! let f = forall(x, forall(y, eq(add(x, succ(y)), succ(add(x, y)))));
//! assert_eq!(f.to_string(), "∀x ∀x* x + S(x*) = S(x + x*)");
//! ```
use crate::{
    expr::{formula::Formula, term::Term},
    variable::Var,
};

#[inline]
pub fn zero() -> Term {
    Term::Zero
}

#[inline]
pub fn var(stars: u32) -> Term {
    Term::Var(Var::new(stars))
}

#[inline]
pub fn succ(t: impl Into<Term>) -> Term {
    Term::succ(t)
}

#[inline]
pub fn add(l: impl Into<Term>, r: impl Into<Term>) -> Term {
    Term::add(l, r)
}

#[inline]
pub fn mul(l: impl Into<Term>, r: impl Into<Term>) -> Term {
    Term::mul(l, r)
}

#[inline]
pub fn eq(l: impl Into<Term>, r: impl Into<Term>) -> Formula {
    Formula::Eq(l.into(), r.into())
}

#[inline]
pub fn lt(l: impl Into<Term>, r: impl Into<Term>) -> Formula {
    Formula::Lt(l.into(), r.into())
}

#[inline]
pub fn not(f: Formula) -> Formula {
    Formula::Not(Box::new(f))
}

#[inline]
pub fn and(l: Formula, r: Formula) -> Formula {
    Formula::And(Box::new(l), Box::new(r))
}

#[inline]
pub fn or(l: Formula, r: Formula) -> Formula {
    Formula::Or(Box::new(l), Box::new(r))
}

/// Material implication, written with the primitive connectives as `¬l ∨ r`.
#[inline]
pub fn implies(l: Formula, r: Formula) -> Formula {
    or(not(l), r)
}

#[inline]
pub fn forall(variable: Var, body: Formula) -> Formula {
    Formula::ForAll {
        variable,
        body: Box::new(body),
    }
}

#[inline]
pub fn exists(variable: Var, body: Formula) -> Formula {
    Formula::Exists {
        variable,
        body: Box::new(body),
    }
}

#[inline]
pub fn proof(proof: impl Into<Term>, formula: impl Into<Term>) -> Formula {
    Formula::Proof {
        proof: proof.into(),
        formula: formula.into(),
    }
}
