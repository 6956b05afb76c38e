//! Free variables and substitution of terms for variables.
//!
//! Substitution replaces free occurrences only: a quantifier binding the variable shadows it in
//! its body. No alpha-renaming is performed, so substituting a term that mentions a variable
//! bound at the substitution site would capture it; callers that need the result to be
//! capture-free substitute closed terms (as diagonalization does) or check
//! [`bound_variables`] first.
use std::collections::BTreeSet;

use crate::{
    expr::{formula::Formula, term::Term},
    variable::Var,
};

/// Variables with at least one free occurrence in `f`.
pub fn free_variables(f: &Formula) -> BTreeSet<Var> {
    let mut out = BTreeSet::new();
    collect_free(f, &mut Vec::new(), &mut out);
    out
}

fn collect_free_in_terms(terms: [&Term; 2], bound: &[Var], out: &mut BTreeSet<Var>) {
    let mut vars = BTreeSet::new();
    for t in terms {
        t.collect_variables(&mut vars);
    }
    out.extend(vars.into_iter().filter(|v| !bound.contains(v)));
}

fn collect_free(f: &Formula, bound: &mut Vec<Var>, out: &mut BTreeSet<Var>) {
    match f {
        Formula::Eq(l, r) | Formula::Lt(l, r) => collect_free_in_terms([l, r], bound, out),
        Formula::Proof { proof, formula } => collect_free_in_terms([proof, formula], bound, out),
        Formula::Not(inner) => collect_free(inner, bound, out),
        Formula::And(l, r) | Formula::Or(l, r) => {
            collect_free(l, bound, out);
            collect_free(r, bound, out);
        }
        Formula::ForAll { variable, body } | Formula::Exists { variable, body } => {
            bound.push(*variable);
            collect_free(body, bound, out);
            bound.pop();
        }
    }
}

/// Variables bound by some quantifier of `f`.
pub fn bound_variables(f: &Formula) -> BTreeSet<Var> {
    let mut out = BTreeSet::new();
    collect_bound(f, &mut out);
    out
}

fn collect_bound(f: &Formula, out: &mut BTreeSet<Var>) {
    match f {
        Formula::Eq(..) | Formula::Lt(..) | Formula::Proof { .. } => {}
        Formula::Not(inner) => collect_bound(inner, out),
        Formula::And(l, r) | Formula::Or(l, r) => {
            collect_bound(l, out);
            collect_bound(r, out);
        }
        Formula::ForAll { variable, body } | Formula::Exists { variable, body } => {
            out.insert(*variable);
            collect_bound(body, out);
        }
    }
}

/// Whether `v` has a free occurrence in `f`.
pub fn occurs_free(f: &Formula, v: Var) -> bool {
    match f {
        Formula::Eq(l, r) | Formula::Lt(l, r) => l.contains_var(v) || r.contains_var(v),
        Formula::Proof { proof, formula } => proof.contains_var(v) || formula.contains_var(v),
        Formula::Not(inner) => occurs_free(inner, v),
        Formula::And(l, r) | Formula::Or(l, r) => occurs_free(l, v) || occurs_free(r, v),
        Formula::ForAll { variable, body } | Formula::Exists { variable, body } => {
            *variable != v && occurs_free(body, v)
        }
    }
}

/// `f[v := replacement]`: replace every free occurrence of `v` in `f`.
pub fn substitute(f: &Formula, v: Var, replacement: &Term) -> Formula {
    match f {
        Formula::Eq(l, r) => Formula::Eq(l.substitute(v, replacement), r.substitute(v, replacement)),
        Formula::Lt(l, r) => Formula::Lt(l.substitute(v, replacement), r.substitute(v, replacement)),
        Formula::Proof { proof, formula } => Formula::Proof {
            proof: proof.substitute(v, replacement),
            formula: formula.substitute(v, replacement),
        },
        Formula::Not(inner) => Formula::Not(Box::new(substitute(inner, v, replacement))),
        Formula::And(l, r) => Formula::And(
            Box::new(substitute(l, v, replacement)),
            Box::new(substitute(r, v, replacement)),
        ),
        Formula::Or(l, r) => Formula::Or(
            Box::new(substitute(l, v, replacement)),
            Box::new(substitute(r, v, replacement)),
        ),
        Formula::ForAll { variable, .. } | Formula::Exists { variable, .. } if *variable == v => {
            f.clone()
        }
        Formula::ForAll { variable, body } => Formula::ForAll {
            variable: *variable,
            body: Box::new(substitute(body, v, replacement)),
        },
        Formula::Exists { variable, body } => Formula::Exists {
            variable: *variable,
            body: Box::new(substitute(body, v, replacement)),
        },
    }
}
