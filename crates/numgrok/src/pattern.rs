//! Semantic patterns: the named recognizers callers branch on.
//!
//! Every matcher consumes the longest prefix of the input its pattern allows
//! and rewinds completely when nothing matches. Alternations (`Comparable`,
//! `Number`, the Infinity half of `NonZero`) run each alternative from the
//! same offset and keep the longest, so no alternative can pre-empt a longer
//! one.

use core::fmt;

use crate::{atoms, scanner::Scanner, spelling};

/// A named numeric kind.
///
/// Kinds are independent classifications, not a partition: `"4"` is at once
/// [`Integer`](Pattern::Integer), [`Even`](Pattern::Even),
/// [`Positive`](Pattern::Positive) and more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// `0b1010`: binary integer literal.
    Binary,
    /// `0755`: octal integer literal.
    Octal,
    /// `0x2a`: hexadecimal integer literal.
    Hex,
    /// `-12.5`: optional sign, digits, optional fraction; no exponent.
    Decimal,
    /// `-12`: optional sign and digits.
    Integer,
    /// `1.5e-3`: a decimal with optional exponent. Never Infinity or NaN.
    Numeric,
    /// `-inf`, `Infinity`, and with extended spellings `1.#INF`.
    Infinity,
    /// `nan`, `qnan`, `nans`, and with extended spellings `nan(123)`,
    /// `1.#IND`.
    NaN,
    /// Any spelling of zero: `0`, `-0.0`, `.0`, `0e10`.
    Zero,
    /// Infinity, or a number with at least one nonzero digit.
    NonZero,
    /// A [`NonZero`](Pattern::NonZero) without a `-` sign.
    Positive,
    /// A [`NonZero`](Pattern::NonZero) with a `-` sign.
    Negative,
    /// An integer whose last digit is even.
    Even,
    /// An integer whose last digit is odd.
    Odd,
    /// Infinity, Integer or Numeric: anything ordered relative to zero.
    Comparable,
    /// Infinity, Integer, NaN or Numeric.
    Number,
}

impl Pattern {
    /// Every pattern, in declaration order.
    pub const ALL: [Pattern; 16] = [
        Pattern::Binary,
        Pattern::Octal,
        Pattern::Hex,
        Pattern::Decimal,
        Pattern::Integer,
        Pattern::Numeric,
        Pattern::Infinity,
        Pattern::NaN,
        Pattern::Zero,
        Pattern::NonZero,
        Pattern::Positive,
        Pattern::Negative,
        Pattern::Even,
        Pattern::Odd,
        Pattern::Comparable,
        Pattern::Number,
    ];

    /// Lowercase name of the pattern.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Binary => "binary",
            Pattern::Octal => "octal",
            Pattern::Hex => "hex",
            Pattern::Decimal => "decimal",
            Pattern::Integer => "integer",
            Pattern::Numeric => "numeric",
            Pattern::Infinity => "infinity",
            Pattern::NaN => "nan",
            Pattern::Zero => "zero",
            Pattern::NonZero => "nonzero",
            Pattern::Positive => "positive",
            Pattern::Negative => "negative",
            Pattern::Even => "even",
            Pattern::Odd => "odd",
            Pattern::Comparable => "comparable",
            Pattern::Number => "number",
        }
    }

    pub(crate) fn matcher(self) -> Matcher {
        match self {
            Pattern::Binary => |s, _| atoms::binary_body(s),
            Pattern::Octal => |s, _| atoms::octal_body(s),
            Pattern::Hex => |s, _| atoms::hex_body(s),
            Pattern::Decimal => |s, _| atoms::decimal_body(s).is_some(),
            Pattern::Integer => integer,
            Pattern::Numeric => numeric,
            Pattern::Infinity => infinity,
            Pattern::NaN => nan,
            Pattern::Zero => zero,
            Pattern::NonZero => nonzero,
            Pattern::Positive => positive,
            Pattern::Negative => negative,
            Pattern::Even => |s, _| parity(s, 0),
            Pattern::Odd => |s, _| parity(s, 1),
            Pattern::Comparable => {
                |s, ext| longest(s, ext, &[infinity as Matcher, integer, numeric])
            }
            Pattern::Number => {
                |s, ext| longest(s, ext, &[infinity as Matcher, integer, nan, numeric])
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pattern matcher: consumes its match and returns `true`, or consumes
/// nothing and returns `false`. The flag enables extended spellings.
pub(crate) type Matcher = fn(&mut Scanner<'_>, bool) -> bool;

/// Runs every alternative from the current offset and keeps the longest match.
fn longest(s: &mut Scanner<'_>, extended: bool, alternatives: &[Matcher]) -> bool {
    let start = s.pos();
    let mut best = None;
    for alternative in alternatives {
        s.rewind(start);
        if alternative(s, extended) {
            best = best.max(Some(s.pos()));
        }
    }
    s.rewind(best.unwrap_or(start));
    best.is_some()
}

/// Adapts a sub-grammar returning `Option` into matcher shape.
fn accept<'src, T>(
    s: &mut Scanner<'src>,
    f: impl FnOnce(&mut Scanner<'src>) -> Option<T>,
) -> bool {
    s.attempt(f).is_some()
}

fn integer(s: &mut Scanner<'_>, _: bool) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        atoms::digits(s).then_some(())
    })
}

fn numeric(s: &mut Scanner<'_>, _: bool) -> bool {
    accept(s, |s| {
        atoms::decimal_body(s)?;
        atoms::exponent(s);
        Some(())
    })
}

fn infinity(s: &mut Scanner<'_>, extended: bool) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        spelling::infinity_body(s, extended)
    })
}

fn nan(s: &mut Scanner<'_>, extended: bool) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        spelling::nan_body(s, extended)
    })
}

/// `[+-]?(0+(\.0*)?|\.0+)` + optional exponent
fn zero(s: &mut Scanner<'_>, _: bool) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        if s.eat_while(|b| b == b'0') > 0 {
            s.eat(b'.');
            s.eat_while(|b| b == b'0');
        } else if !(s.eat(b'.') && s.eat_while(|b| b == b'0') > 0) {
            return None;
        }
        atoms::exponent(s);
        Some(())
    })
}

/// Infinity, or a decimal with a nonzero digit and optional exponent; no sign.
fn unsigned_nonzero(s: &mut Scanner<'_>, extended: bool) -> bool {
    let finite: Matcher = |s, _| {
        accept(s, |s| {
            let span = atoms::unsigned_decimal(s)?;
            if !span.has_nonzero_digit() {
                return None;
            }
            atoms::exponent(s);
            Some(())
        })
    };
    let infinite: Matcher = |s, ext| spelling::infinity_body(s, ext).is_some();
    longest(s, extended, &[infinite, finite])
}

fn nonzero(s: &mut Scanner<'_>, extended: bool) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        unsigned_nonzero(s, extended).then_some(())
    })
}

fn positive(s: &mut Scanner<'_>, extended: bool) -> bool {
    accept(s, |s| {
        s.eat(b'+');
        unsigned_nonzero(s, extended).then_some(())
    })
}

fn negative(s: &mut Scanner<'_>, extended: bool) -> bool {
    accept(s, |s| {
        if !s.eat(b'-') {
            return None;
        }
        unsigned_nonzero(s, extended).then_some(())
    })
}

/// `[+-]?[0-9]*` followed by a digit whose parity is `rem`.
///
/// The digit run is consumed greedily, then cut back to its last digit of the
/// right parity, which is the longest match the pattern admits.
fn parity(s: &mut Scanner<'_>, rem: u8) -> bool {
    accept(s, |s| {
        atoms::sign(s);
        let start = s.pos();
        s.eat_while(|b| b.is_ascii_digit());
        let run = s.since(start);
        let keep = run.bytes().rposition(|b| (b - b'0') % 2 == rem)?;
        s.rewind(start + keep + 1);
        Some(())
    })
}
