use std::collections::HashMap;

use hygodel::encoding::integer::split_codes;
use hygodel::prelude::*;
use num_bigint::BigUint;

fn x() -> Var {
    Var::X
}

fn y() -> Var {
    Var::X.next()
}

/// A hand-picked set of structurally close expressions.
fn curated() -> Vec<Formula> {
    vec![
        eq(zero(), zero()),
        eq(zero(), succ(zero())),
        eq(succ(zero()), zero()),
        lt(zero(), zero()),
        eq(x(), zero()),
        eq(y(), zero()),
        eq(var(2), zero()),
        eq(add(x(), zero()), zero()),
        eq(mul(x(), zero()), zero()),
        eq(add(add(x(), x()), x()), zero()),
        eq(add(x(), add(x(), x())), zero()),
        not(eq(zero(), zero())),
        not(not(eq(zero(), zero()))),
        and(eq(zero(), zero()), lt(zero(), zero())),
        or(eq(zero(), zero()), lt(zero(), zero())),
        and(lt(zero(), zero()), eq(zero(), zero())),
        forall(x(), eq(x(), x())),
        exists(x(), eq(x(), x())),
        forall(y(), eq(x(), x())),
        forall(x(), forall(y(), eq(x(), y()))),
        forall(y(), forall(x(), eq(x(), y()))),
        proof(zero(), zero()),
        proof(x(), y()),
        proof(y(), x()),
        unprovability_predicate(x(), y()),
    ]
}

#[test]
fn equality_of_zeros_has_the_documented_code() {
    let f = eq(Term::Zero, Term::Zero);
    assert_eq!(encode_formula(&f), ["6", "1", "4", "1", "7"]);
    assert_eq!(encode_to_integer(&f), BigUint::from(601040107u64));
}

#[test]
fn variables_encode_with_stars() {
    assert_eq!(encode_term(&var(0)), ["8"]);
    assert_eq!(encode_term(&var(3)), ["8", "9", "9", "9"]);
    assert_eq!(
        encode_formula(&forall(x(), eq(x(), x()))),
        ["11", "8", "6", "6", "8", "4", "8", "7", "7"]
    );
}

#[test]
fn encoding_is_deterministic() {
    for f in curated() {
        let a = encode_to_integer(&f);
        let b = encode_to_integer(&f.clone());
        assert_eq!(a, b);
        assert_eq!(encode_formula(&f), encode_formula(&f));
    }
}

#[test]
fn curated_expressions_have_distinct_codes() {
    let mut seen: HashMap<BigUint, Formula> = HashMap::new();
    for f in curated() {
        let code = encode_to_integer(&f);
        if let Some(previous) = seen.insert(code.clone(), f.clone()) {
            panic!("{previous} and {f} share the code {code}");
        }
    }
}

#[test]
fn terms_and_formulas_are_numbered_by_the_same_table() {
    let t = add(x(), succ(zero()));
    let f = eq(t.clone(), zero());
    let t_digits = GodelEncoder::standard().digits(&t);
    let f_digits = GodelEncoder::standard().digits(&f);
    // ( t = 0 )
    assert_eq!(f_digits, format!("60{t_digits}040107"));
}

#[test]
fn codes_never_contain_the_separator() {
    let table = CodeTable::standard();
    let sep = table.separator_char();
    for (symbol, code) in table.iter() {
        assert!(code > 0, "{symbol} has a zero code");
        assert!(
            !code.to_string().contains(sep),
            "code {code} of {symbol} contains the separator"
        );
    }
}

#[test]
fn digit_strings_split_back_into_codes() {
    let encoder = GodelEncoder::standard();
    for f in curated() {
        let digits = encoder.digits(&f);
        let codes: Vec<u32> = encode_formula(&f)
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(split_codes(&digits, 0), Some(codes));
        assert_eq!(encode_to_integer(&f).to_string(), digits);
    }
}

#[test]
fn numerals_encode_as_nested_successors() {
    // S ( S ( S ( 0 ) ) )
    assert_eq!(
        encode_term(&numeral(3).unwrap()),
        ["2", "6", "2", "6", "2", "6", "1", "7", "7", "7"]
    );

    let table = CodeTable::standard();
    let s = table.code(Symbol::Succ).to_string();
    let l = table.code(Symbol::LParen).to_string();
    let r = table.code(Symbol::RParen).to_string();
    let z = table.code(Symbol::Zero).to_string();
    for n in [0usize, 1, 5, 12] {
        let mut expected = Vec::new();
        for _ in 0..n {
            expected.push(s.clone());
            expected.push(l.clone());
        }
        expected.push(z.clone());
        expected.extend(std::iter::repeat_n(r.clone(), n));
        assert_eq!(encode_term(&numeral(n as u64).unwrap()), expected, "n = {n}");
    }
}

#[test]
fn alternative_table_from_toml() {
    let source = r#"
separator = 9

[codes]
zero = 1
succ = 2
plus = 3
eq = 4
lt = 5
lparen = 6
rparen = 7
var = 8
star = 10
forall = 11
exists = 12
and = 13
or = 14
not = 15
times = 16
proof = 17
"#;
    let table = CodeTable::from_toml_str(source).unwrap();
    let encoder = GodelEncoder::new(table);
    let f = eq(Term::Zero, Term::Zero);
    assert_eq!(encoder.digits(&f), "691949197");
    assert_eq!(encoder.digits(&var(1)), "8910");
    assert_ne!(encoder.godel_number(&f), encode_to_integer(&f));
}

#[test]
fn invalid_tables_are_rejected() {
    let mut codes = hygodel::encoding::symbol::STANDARD_CODES;
    codes[Symbol::Star as usize] = codes[Symbol::Var as usize];
    assert!(CodeTable::new(codes, 0).unwrap_err().is_duplicate_code());

    let mut codes = hygodel::encoding::symbol::STANDARD_CODES;
    codes[Symbol::Proof as usize] = 10;
    assert!(CodeTable::new(codes, 0).unwrap_err().is_separator_in_code());

    assert!(
        CodeTable::from_toml_str("[codes]\nzero = 1\n")
            .unwrap_err()
            .is_missing_symbol()
    );
}
