//! A few axioms of Peano arithmetic, as ready-made formulas.
//!
//! The list is illustrative rather than complete: the multiplication axioms and the induction
//! scheme are not included.
use crate::{
    expr::{formula::Formula, func::*},
    variable::Var,
};

const X: Var = Var::X;
const Y: Var = Var::new(1);

/// `∀x ¬(S(x) = 0)`: zero is not a successor.
pub fn successor_not_zero() -> Formula {
    forall(X, not(eq(succ(X), zero())))
}

/// `∀x ∀y (¬(S(x) = S(y)) ∨ x = y)`: the successor function is injective.
pub fn successor_injective() -> Formula {
    forall(X, forall(Y, implies(eq(succ(X), succ(Y)), eq(X, Y))))
}

/// `∀x (x + 0 = x)`.
pub fn add_zero() -> Formula {
    forall(X, eq(add(X, zero()), X))
}

/// `∀x ∀y (x + S(y) = S(x + y))`.
pub fn add_successor() -> Formula {
    forall(X, forall(Y, eq(add(X, succ(Y)), succ(add(X, Y)))))
}

/// All axioms of this module, in order.
pub fn axioms() -> Vec<Formula> {
    vec![
        successor_not_zero(),
        successor_injective(),
        add_zero(),
        add_successor(),
    ]
}
