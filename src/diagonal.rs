//! The diagonal construction.
//!
//! Given a formula `P` whose only free variable is `x`, diagonalization computes
//! `g = ⌜P⌝` and returns the sentence `P[x := n(g)]`, where `n(g)` is a closed term denoting
//! `g`. Instantiating `P(x) = ∀y ¬Proof(y, x)` yields the Gödel sentence, which states that the
//! formula with code `g` (its own template) has no proof.
//!
//! Preconditions
//! - `x` occurs free in `P`;
//! - `x` is not bound anywhere in `P` (no alpha-renaming is performed, collisions are refused);
//! - `x` is the only free variable, so the result is a sentence.
//!
//! The standard numeral of `g` has `g` successor nodes, which is out of reach for every real
//! formula; the default [`Diagonalizer`] therefore rejects targets above
//! [`DEFAULT_NUMERAL_LIMIT`]. Select [`NumeralForm::Compact`] to substitute a logarithmic-size
//! term denoting `g` instead.
//!
//! ```
//! use hygodel::prelude::*;
//!
//! let diagonalizer = Diagonalizer::default().with_numeral_form(NumeralForm::Compact);
//! let g = diagonalizer.godel_sentence().unwrap();
//! assert!(g.is_sentence());
//! ```
use log::debug;
use num_bigint::BigUint;

use crate::{
    encoding::{GodelEncoder, integer},
    error::{Error, Result, UnsubstitutableReason},
    expr::{
        formula::Formula,
        func::{forall, not, proof},
        term::Term,
    },
    numeral::{DEFAULT_NUMERAL_LIMIT, compact_numeral, numeral, numeral_bounded},
    subst,
    variable::Var,
};

/// Which closed term stands for the Gödel number in the diagonal sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumeralForm {
    /// The standard numeral `S(…S(0)…)`; Θ(g) nodes.
    #[default]
    Unary,
    /// The binary Horner form of [`compact_numeral`]; Θ(log g) nodes.
    Compact,
}

/// Configuration of the diagonal construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagonalizer {
    encoder: GodelEncoder,
    numeral_form: NumeralForm,
    numeral_limit: Option<BigUint>,
}

impl Default for Diagonalizer {
    fn default() -> Self {
        Self {
            encoder: GodelEncoder::standard(),
            numeral_form: NumeralForm::Unary,
            numeral_limit: Some(BigUint::from(DEFAULT_NUMERAL_LIMIT)),
        }
    }
}

impl Diagonalizer {
    /// Use `encoder` to compute the code of the template formula.
    pub fn with_encoder(mut self, encoder: GodelEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Choose the numeral representation.
    pub fn with_numeral_form(mut self, form: NumeralForm) -> Self {
        self.numeral_form = form;
        self
    }

    /// Ceiling on unary numeral targets; `None` removes it.
    pub fn with_numeral_limit(mut self, limit: Option<BigUint>) -> Self {
        self.numeral_limit = limit;
        self
    }

    pub fn encoder(&self) -> &GodelEncoder {
        &self.encoder
    }

    pub fn numeral_form(&self) -> NumeralForm {
        self.numeral_form
    }

    pub fn numeral_limit(&self) -> Option<&BigUint> {
        self.numeral_limit.as_ref()
    }

    /// The closed term this diagonalizer substitutes for `code`.
    pub fn numeral_of(&self, code: &BigUint) -> Result<Term> {
        match (self.numeral_form, &self.numeral_limit) {
            (NumeralForm::Compact, _) => Ok(compact_numeral(code)),
            (NumeralForm::Unary, Some(limit)) => numeral_bounded(code.clone(), limit),
            (NumeralForm::Unary, None) => numeral(code.clone()),
        }
    }

    /// Check the preconditions of diagonalizing `formula` at `variable`.
    pub fn check(&self, formula: &Formula, variable: Var) -> Result<()> {
        let refuse = |reason| Error::Unsubstitutable { variable, reason };

        if !subst::occurs_free(formula, variable) {
            return Err(refuse(UnsubstitutableReason::NotFree));
        }
        if subst::bound_variables(formula).contains(&variable) {
            return Err(refuse(UnsubstitutableReason::BoundElsewhere));
        }
        if subst::free_variables(formula).len() > 1 {
            return Err(refuse(UnsubstitutableReason::OtherFreeVariables));
        }
        Ok(())
    }

    /// `formula[variable := n(⌜formula⌝)]`.
    pub fn diagonalize(&self, formula: &Formula, variable: Var) -> Result<Formula> {
        self.check(formula, variable)?;

        let code = self.encoder.godel_number(formula);
        let term = self.numeral_of(&code)?;
        let sentence = subst::substitute(formula, variable, &term);
        debug!(
            "Diagonalized at {variable}: template code has {} digits, sentence has {} nodes",
            integer::decimal_len(&code),
            sentence.size()
        );
        Ok(sentence)
    }

    /// The Gödel sentence: the diagonalization of [`unprovability_predicate`] at `x`.
    pub fn godel_sentence(&self) -> Result<Formula> {
        let x = Var::X;
        self.diagonalize(&unprovability_predicate(x, x.next()), x)
    }
}

/// Diagonalize with the default configuration (standard table, bounded unary numerals).
///
/// Every formula has a code of at least nine digits, far above [`DEFAULT_NUMERAL_LIMIT`], so
/// this returns [`Error::NumeralTooLarge`] for any formula that passes [`Diagonalizer::check`].
/// Use a [`Diagonalizer`] with [`NumeralForm::Compact`] (or an explicit numeral limit) to get a
/// sentence back.
pub fn diagonalize(formula: &Formula, variable: Var) -> Result<Formula> {
    Diagonalizer::default().diagonalize(formula, variable)
}

/// `P(x) = ∀y ¬Proof(y, x)`: "the formula coded by `x` has no proof".
pub fn unprovability_predicate(x: Var, y: Var) -> Formula {
    forall(y, not(proof(y, x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_to_integer;
    use crate::expr::func::*;

    fn x() -> Var {
        Var::X
    }

    fn y() -> Var {
        Var::X.next()
    }

    #[test]
    fn unprovability_predicate_shape() {
        let p = unprovability_predicate(x(), y());
        assert_eq!(p.to_string(), "∀x* ¬Proof(x*, x)");
        assert_eq!(subst::free_variables(&p).into_iter().collect::<Vec<_>>(), [x()]);
    }

    #[test]
    fn compact_diagonalization_closes_the_formula() {
        let p = unprovability_predicate(x(), y());
        let d = Diagonalizer::default().with_numeral_form(NumeralForm::Compact);
        let g = d.diagonalize(&p, x()).unwrap();

        assert!(!subst::occurs_free(&g, x()));
        assert!(g.is_sentence());
        assert_ne!(encode_to_integer(&g), encode_to_integer(&p));

        // The substituted term denotes the code of the template.
        match &g {
            Formula::ForAll { body, .. } => match body.as_ref() {
                Formula::Not(inner) => match inner.as_ref() {
                    Formula::Proof { formula, .. } => {
                        assert_eq!(formula.evaluate(), Some(encode_to_integer(&p)))
                    }
                    other => panic!("unexpected {other:?}"),
                },
                other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unary_diagonalization_respects_the_limit() {
        let p = unprovability_predicate(x(), y());
        let err = diagonalize(&p, x()).unwrap_err();
        assert!(err.is_numeral_too_large());

        let err = Diagonalizer::default()
            .with_numeral_limit(Some(BigUint::from(3u32)))
            .godel_sentence()
            .unwrap_err();
        match err {
            Error::NumeralTooLarge { value, limit } => {
                assert_eq!(value, encode_to_integer(&unprovability_predicate(x(), y())));
                assert_eq!(limit, BigUint::from(3u32));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn default_free_function_always_hits_the_limit() {
        // ( x = 0 ) is among the smallest templates.
        let p = eq(x(), zero());
        match diagonalize(&p, x()) {
            Err(Error::NumeralTooLarge { value, .. }) => {
                assert_eq!(value, BigUint::from(608040107u32))
            }
            other => panic!("unexpected result {other:?}"),
        }
        let d = Diagonalizer::default().with_numeral_form(NumeralForm::Compact);
        assert!(d.diagonalize(&p, x()).unwrap().is_sentence());
    }

    #[test]
    fn variable_must_occur_free() {
        let p = forall(y(), not(proof(y(), zero())));
        let err = diagonalize(&p, x()).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsubstitutable {
                reason: UnsubstitutableReason::NotFree,
                ..
            }
        ));

        // Bound occurrences only do not count as free.
        let q = forall(x(), eq(x(), x()));
        let err = diagonalize(&q, x()).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsubstitutable {
                reason: UnsubstitutableReason::NotFree,
                ..
            }
        ));
    }

    #[test]
    fn colliding_binders_are_refused() {
        // x = 0 ∧ ∀x (x < S(x))
        let p = and(eq(x(), zero()), forall(x(), lt(x(), succ(x()))));
        let err = diagonalize(&p, x()).unwrap_err();
        match err {
            Error::Unsubstitutable { variable, reason } => {
                assert_eq!(variable, x());
                assert_eq!(reason, UnsubstitutableReason::BoundElsewhere);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn other_free_variables_are_refused() {
        let p = lt(x(), y());
        let err = diagonalize(&p, x()).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsubstitutable {
                reason: UnsubstitutableReason::OtherFreeVariables,
                ..
            }
        ));
    }

    #[test]
    fn numeral_of_follows_form_and_limit() {
        let four = BigUint::from(4u32);
        let unlimited = Diagonalizer::default().with_numeral_limit(None);
        assert_eq!(unlimited.numeral_limit(), None);
        assert_eq!(unlimited.numeral_of(&four).unwrap().numeral_value(), Some(4));

        let tight = Diagonalizer::default().with_numeral_limit(Some(BigUint::from(3u32)));
        assert!(tight.numeral_of(&four).unwrap_err().is_numeral_too_large());

        let compact = tight.with_numeral_form(NumeralForm::Compact);
        assert_eq!(compact.numeral_form(), NumeralForm::Compact);
        assert_eq!(compact.numeral_of(&four).unwrap().evaluate(), Some(four));
    }

    #[test]
    fn configured_table_changes_the_substituted_code() {
        let codes = [21, 22, 23, 24, 25, 26, 27, 28, 29, 31, 32, 33, 34, 35, 36, 37];
        let table = crate::encoding::table::CodeTable::new(codes, 0).unwrap();
        let encoder = GodelEncoder::new(table);
        let p = unprovability_predicate(x(), y());

        let d = Diagonalizer::default()
            .with_encoder(encoder.clone())
            .with_numeral_form(NumeralForm::Compact);
        let g = d.diagonalize(&p, x()).unwrap();
        let expected = subst::substitute(&p, x(), &compact_numeral(&encoder.godel_number(&p)));
        assert_eq!(g, expected);
        let standard = Diagonalizer::default()
            .with_numeral_form(NumeralForm::Compact)
            .diagonalize(&p, x())
            .unwrap();
        assert_ne!(g, standard);
    }
}
