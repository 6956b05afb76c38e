//! RcDoc-based pretty-printer with termcolor annotations for terms and formulas.
//!
//! Role
//! - Convert a [`Term`] or [`Formula`] into an annotated document suitable for width-aware
//!   rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! The rendering is for humans only: it drops the redundant parentheses of the symbol
//! encoding and is not meant to be parsed back.
//!
//! Performance
//! - Building the doc is O(n) in expression size; rendering respects line widths with
//!   linear-time layout in the size of the resulting document.

use crate::expr::formula::{Formula, FormulaType};
use crate::expr::term::{Term, TermType};
use crate::variable::Var;
use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // commas
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,  // ∀, ∃, Proof
    Operator, // +, ×, =, <, ∧, ∨, ¬
    Ident,    // variables
    Constant, // 0 and S
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                // Rotate through a palette for nested parentheses.
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Constant => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

fn styled(style: Style, s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(style)
}

fn punct(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Punct, s)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

#[inline]
fn parens(inner: RcDoc<'static, Style>, depth: u8) -> RcDoc<'static, Style> {
    lparen(depth).append(inner).append(rparen(depth)).group()
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Keyword, s)
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Operator, s)
}

fn ident(v: Var) -> RcDoc<'static, Style> {
    RcDoc::as_string(v).annotate(Style::Ident)
}

// ========================= Terms =========================

fn term_precedence(t: TermType) -> u8 {
    match t {
        TermType::Add => 1,
        TermType::Mul => 2,
        TermType::Zero | TermType::Var | TermType::Succ => 255,
    }
}

/// Binary term operators associate to the left; a right operand of equal precedence keeps
/// its parentheses.
#[inline]
fn term_requires_parens(current: TermType, parent: TermType, right_operand: bool) -> bool {
    let current_prec = term_precedence(current);
    let parent_prec = term_precedence(parent);
    parent_prec > current_prec || (right_operand && parent_prec == current_prec)
}

fn term_operand(t: &Term, parent: TermType, right_operand: bool, depth: u8) -> RcDoc<'static, Style> {
    if term_requires_parens(t.r#type(), parent, right_operand) {
        parens(term_doc(t, depth.wrapping_add(1)), depth)
    } else {
        term_doc(t, depth)
    }
}

fn term_binary(
    l: &Term,
    symbol: &'static str,
    r: &Term,
    parent: TermType,
    depth: u8,
) -> RcDoc<'static, Style> {
    term_operand(l, parent, false, depth)
        .append(RcDoc::space())
        .append(op(symbol))
        .append(RcDoc::space())
        .append(term_operand(r, parent, true, depth))
        .group()
}

/// Depth-aware term document; parentheses are colored by nesting level.
fn term_doc(t: &Term, depth: u8) -> RcDoc<'static, Style> {
    match t {
        Term::Zero => styled(Style::Constant, "0"),
        Term::Var(v) => ident(*v),
        Term::Succ(inner) => styled(Style::Constant, "S")
            .append(lparen(depth))
            .append(term_doc(inner, depth.wrapping_add(1)))
            .append(rparen(depth))
            .group(),
        Term::Add(l, r) => term_binary(l, "+", r, TermType::Add, depth),
        Term::Mul(l, r) => term_binary(l, "×", r, TermType::Mul, depth),
    }
}

// ========================= Formulas =========================

/// Connectives associate to the left, like binary term operators.
#[inline]
fn formula_requires_parens(current: FormulaType, parent: FormulaType, right_operand: bool) -> bool {
    use FormulaType::*;

    match parent {
        // Negation binds tighter than everything but itself and the `Proof` predicate.
        Not => !matches!(current, Not | Proof),
        And | Or => {
            matches!(current, And | Or | ForAll | Exists) && (current != parent || right_operand)
        }
        Eq | Lt | ForAll | Exists | Proof => false,
    }
}

fn formula_operand(
    f: &Formula,
    parent: FormulaType,
    right_operand: bool,
    depth: u8,
) -> RcDoc<'static, Style> {
    if formula_requires_parens(f.r#type(), parent, right_operand) {
        parens(formula_doc(f, depth.wrapping_add(1)), depth)
    } else {
        formula_doc(f, depth)
    }
}

fn formula_connective(
    l: &Formula,
    symbol: &'static str,
    r: &Formula,
    parent: FormulaType,
    depth: u8,
) -> RcDoc<'static, Style> {
    formula_operand(l, parent, false, depth)
        .append(RcDoc::line())
        .append(op(symbol))
        .append(RcDoc::space())
        .append(formula_operand(r, parent, true, depth))
        .group()
}

fn atom(l: &Term, symbol: &'static str, r: &Term, depth: u8) -> RcDoc<'static, Style> {
    term_doc(l, depth)
        .append(RcDoc::space())
        .append(op(symbol))
        .append(RcDoc::space())
        .append(term_doc(r, depth))
        .group()
}

fn quantifier(
    keyword: &'static str,
    variable: Var,
    body: &Formula,
    parent: FormulaType,
    depth: u8,
) -> RcDoc<'static, Style> {
    kw(keyword)
        .append(ident(variable))
        .append(
            RcDoc::line()
                .append(formula_operand(body, parent, false, depth))
                .nest(2),
        )
        .group()
}

/// Depth-aware formula document; parentheses are colored by nesting level.
fn formula_doc(f: &Formula, depth: u8) -> RcDoc<'static, Style> {
    match f {
        Formula::Eq(l, r) => atom(l, "=", r, depth),
        Formula::Lt(l, r) => atom(l, "<", r, depth),
        Formula::Not(inner) => op("¬")
            .append(formula_operand(inner, FormulaType::Not, false, depth))
            .group(),
        Formula::And(l, r) => formula_connective(l, "∧", r, FormulaType::And, depth),
        Formula::Or(l, r) => formula_connective(l, "∨", r, FormulaType::Or, depth),
        Formula::ForAll { variable, body } => {
            quantifier("∀", *variable, body, FormulaType::ForAll, depth)
        }
        Formula::Exists { variable, body } => {
            quantifier("∃", *variable, body, FormulaType::Exists, depth)
        }
        Formula::Proof { proof, formula } => kw("Proof")
            .append(lparen(depth))
            .append(term_doc(proof, depth.wrapping_add(1)))
            .append(punct(","))
            .append(RcDoc::space())
            .append(term_doc(formula, depth.wrapping_add(1)))
            .append(rparen(depth))
            .group(),
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Pretty-printing conveniences for terms and formulas.
pub trait PrettyExpr {
    /// Build an RcDoc representation with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    /// Print to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        render_to(&self.pretty_doc(), terminal_width(), &mut stdout)
    }

    /// Format into a plain string (no colors) at the given width.
    fn pretty_string_with_width(&self, width: usize) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc().render_fmt(width, &mut buf);
        buf
    }

    /// Format into a plain string (no colors) at width 80.
    fn pretty_string(&self) -> String {
        self.pretty_string_with_width(80)
    }
}

macro_rules! impl_pretty_for_type {
    ($t:ty, $doc:ident) => {
        impl PrettyExpr for $t {
            #[inline]
            fn pretty_doc(&self) -> RcDoc<'static, Style> {
                $doc(self, 0)
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut w = FmtWrite::new(f);
                self.pretty_doc().render_raw(80, &mut w)
            }
        }
    };
}

impl_pretty_for_type!(Term, term_doc);
impl_pretty_for_type!(Formula, formula_doc);
