use std::io::Write;

use clap::Parser;
use hygodel::{peano, prelude::*};
use num_bigint::BigUint;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Number a few Peano axioms and build the Gödel sentence
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML code table to use instead of the standard one
    #[arg(short, long)]
    pub table: Option<String>,

    /// Substitute the standard unary numeral (usually refused as too large)
    #[arg(short, long, default_value_t = false)]
    pub unary: bool,

    /// Largest unary numeral to build
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Rendering width
    #[arg(short, long, default_value_t = 80)]
    pub width: usize,
}

fn main() {
    let args = Args::parse();

    let table = match args.table {
        Some(path) => {
            let source = std::fs::read_to_string(path).expect("Failed to read table file");
            CodeTable::from_toml_str(&source).unwrap_or_else(|e| {
                eprintln!("Invalid code table: {e}");
                std::process::exit(1);
            })
        }
        None => CodeTable::standard(),
    };
    let encoder = GodelEncoder::new(table);

    let mut title_color = ColorSpec::new();
    title_color.set_fg(Some(termcolor::Color::Green));
    title_color.set_intense(true);

    let mut error_color = ColorSpec::new();
    error_color.set_fg(Some(termcolor::Color::Red));
    error_color.set_intense(true);

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stdout = stdout.lock();

    stdout.set_color(&title_color).unwrap();
    writeln!(stdout, "Axioms:").unwrap();
    stdout.reset().unwrap();
    for axiom in peano::axioms() {
        axiom.pretty_render_to(args.width, &mut stdout).unwrap();
        writeln!(stdout).unwrap();
        writeln!(stdout, "  ⌜·⌝ = {}", encoder.godel_number(&axiom)).unwrap();
    }

    let form = if args.unary {
        NumeralForm::Unary
    } else {
        NumeralForm::Compact
    };
    let mut diagonalizer = Diagonalizer::default()
        .with_encoder(encoder)
        .with_numeral_form(form);
    if let Some(limit) = args.limit {
        diagonalizer = diagonalizer.with_numeral_limit(Some(BigUint::from(limit)));
    }

    let template = unprovability_predicate(Var::X, Var::X.next());
    stdout.set_color(&title_color).unwrap();
    writeln!(stdout, "Template:").unwrap();
    stdout.reset().unwrap();
    template.pretty_render_to(args.width, &mut stdout).unwrap();
    writeln!(stdout).unwrap();
    writeln!(
        stdout,
        "  ⌜·⌝ = {}",
        diagonalizer.encoder().godel_number(&template)
    )
    .unwrap();

    match diagonalizer.godel_sentence() {
        Ok(sentence) => {
            stdout.set_color(&title_color).unwrap();
            writeln!(stdout, "Gödel sentence ({} nodes):", sentence.size()).unwrap();
            stdout.reset().unwrap();
            sentence.pretty_render_to(args.width, &mut stdout).unwrap();
            writeln!(stdout).unwrap();
        }
        Err(e) => {
            stdout.set_color(&error_color).unwrap();
            writeln!(stdout, "Diagonalization failed: {e}").unwrap();
            stdout.reset().unwrap();
        }
    }
    stdout.flush().unwrap();
}
