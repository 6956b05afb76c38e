use hygodel::peano;
use hygodel::prelude::*;

#[test]
fn pretty_printer_respects_precedence() {
    let x = Var::X;
    assert_eq!(add(x, mul(x, zero())).pretty_string(), "x + x × 0");
    assert_eq!(mul(add(x, zero()), x).pretty_string(), "(x + 0) × x");
    assert_eq!(
        or(and(eq(x, x), lt(x, x)), eq(x, x)).pretty_string(),
        "(x = x ∧ x < x) ∨ x = x"
    );
    assert_eq!(not(lt(x, zero())).pretty_string(), "¬(x < 0)");
}

#[test]
fn narrow_widths_break_lines() {
    let f = peano::add_successor();
    let wide = f.pretty_string_with_width(200);
    let narrow = f.pretty_string_with_width(10);
    assert!(!wide.contains('\n'));
    assert!(narrow.contains('\n'));
    assert_eq!(
        narrow.split_whitespace().collect::<String>(),
        wide.split_whitespace().collect::<String>()
    );
}

#[test]
fn peano_axioms_are_closed_and_distinct() {
    let axioms = peano::axioms();
    assert_eq!(axioms.len(), 4);
    let mut codes: Vec<_> = axioms.iter().map(encode_to_integer).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), axioms.len());
    assert!(axioms.iter().all(Formula::is_sentence));
}

#[test]
fn variables_parse_and_print() {
    let v: Var = "x**".parse().unwrap();
    assert_eq!(v, Var::new(2));
    assert_eq!(v.to_string(), "x**");
    assert!("y".parse::<Var>().unwrap_err().is_invalid_variable());
    assert!(Var::try_from(-1i64).unwrap_err().is_invalid_variable());
}
