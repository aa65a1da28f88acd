//! Line classification.
//!
//! A line is tried against each rule in [`RULES`] in order; the first rule
//! that accepts it decides the category. Lines no rule accepts are text.

use serde::{Deserialize, Serialize};

/// The three output categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::String];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Integer => "integers.txt",
            Self::Float => "floats.txt",
            Self::String => "strings.txt",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Integer => 0,
            Self::Float => 1,
            Self::String => 2,
        }
    }
}

/// A classified line together with its parsed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    Integer(i64),
    Float(f64),
    String(&'a str),
}

impl Classified<'_> {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::String(_) => Category::String,
        }
    }
}

/// A single classification rule. Returns `None` when the line is not its kind.
pub type Rule = for<'a> fn(&'a str) -> Option<Classified<'a>>;

/// Numeric rules in precedence order.
pub const RULES: [Rule; 2] = [parse_integer, parse_float];

/// Base-10 `i64`. Accepts an optional sign, no whitespace.
pub fn parse_integer(line: &str) -> Option<Classified<'_>> {
    line.parse::<i64>().ok().map(Classified::Integer)
}

/// Decimal or scientific literal. Words `f64::from_str` also accepts
/// (`inf`, `NaN`, `infinity`) are not numeric literals and are rejected.
pub fn parse_float(line: &str) -> Option<Classified<'_>> {
    let literal = line
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !literal {
        return None;
    }
    line.parse::<f64>().ok().map(Classified::Float)
}

/// Classify a line. Total: every line gets exactly one category.
#[must_use]
pub fn classify(line: &str) -> Classified<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(Classified::String(line))
}
