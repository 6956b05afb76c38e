use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hygodel::{peano, prelude::*};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn build_complex_formula() -> Formula {
    // Nest random connectives and quantifiers. Use randomness seeded for determinism.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);

    fn next_term(budget: usize, rng: &mut impl Rng) -> Term {
        if budget == 0 || rng.random_bool(0.3) {
            return match rng.random_range(0..=1) {
                0 => zero(),
                1 => var(rng.random_range(0..4)),
                _ => unreachable!(),
            };
        }

        match rng.random_range(0..=2) {
            0 => succ(next_term(budget - 1, rng)),
            1 => add(next_term(budget - 1, rng), next_term(budget - 1, rng)),
            2 => mul(next_term(budget - 1, rng), next_term(budget - 1, rng)),
            _ => unreachable!(),
        }
    }

    fn next_formula(budget: usize, rng: &mut impl Rng) -> Formula {
        if budget == 0 || rng.random_bool(0.2) {
            return match rng.random_range(0..=2) {
                0 => eq(next_term(4, rng), next_term(4, rng)),
                1 => lt(next_term(4, rng), next_term(4, rng)),
                2 => proof(next_term(4, rng), next_term(4, rng)),
                _ => unreachable!(),
            };
        }

        match rng.random_range(0..=4) {
            0 => not(next_formula(budget - 1, rng)),
            1 => and(next_formula(budget - 1, rng), next_formula(budget - 1, rng)),
            2 => or(next_formula(budget - 1, rng), next_formula(budget - 1, rng)),
            3 => forall(Var::new(rng.random_range(0..4)), next_formula(budget - 1, rng)),
            4 => exists(Var::new(rng.random_range(0..4)), next_formula(budget - 1, rng)),
            _ => unreachable!(),
        }
    }

    next_formula(8, &mut rng)
}

fn bench_encode(c: &mut Criterion) {
    let simple = peano::successor_not_zero();
    let complex = build_complex_formula();

    c.bench_function("encode_codes_simple", |b| {
        b.iter(|| black_box(encode_formula(&simple)))
    });

    c.bench_function("encode_integer_simple", |b| {
        b.iter(|| black_box(encode_to_integer(&simple)))
    });

    c.bench_function("encode_integer_complex", |b| {
        b.iter(|| black_box(encode_to_integer(&complex)))
    });
}

fn bench_numerals(c: &mut Criterion) {
    let code = encode_to_integer(&peano::add_successor());

    c.bench_function("numeral_unary_1000", |b| {
        b.iter(|| black_box(numeral(1000).ok()))
    });

    c.bench_function("numeral_compact_axiom_code", |b| {
        b.iter(|| black_box(compact_numeral(&code)))
    });

    let limit = BigUint::from(1000u32);
    c.bench_function("numeral_bounded_reject", |b| {
        b.iter(|| black_box(numeral_bounded(code.clone(), &limit).is_err()))
    });
}

fn bench_diagonalize(c: &mut Criterion) {
    let d = Diagonalizer::default().with_numeral_form(NumeralForm::Compact);

    c.bench_function("godel_sentence_compact", |b| {
        b.iter(|| black_box(d.godel_sentence().ok()))
    });

    let complex = build_complex_formula();
    c.bench_function("pretty_string_complex", |b| {
        b.iter(|| black_box(complex.pretty_string()))
    });
}

criterion_group!(benches, bench_encode, bench_numerals, bench_diagonalize);
criterion_main!(benches);
