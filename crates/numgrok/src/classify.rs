//! Classification façade: tri-state predicates over a [`Subject`].
//!
//! Text is matched against the pattern of the same name. Values that are
//! already machine numbers are answered arithmetically where the answer is
//! known to equal what the grammar says about the value's `Display` text;
//! otherwise they are formatted and matched like text.

use alloc::string::{String, ToString};

use crate::{Grammar, ParsedNumber, Pattern};

/// A value to classify.
///
/// Conversions exist from strings, every primitive integer and float type,
/// and `Option` of any of those (`None` becomes [`Subject::Absent`]).
///
/// ```rust
/// use numgrok::{Grammar, Subject};
///
/// let g = Grammar::DEFAULT;
/// assert_eq!(g.is_even("10"), Some(true));
/// assert_eq!(g.is_even(10_u8), Some(true));
/// assert_eq!(g.is_even(Subject::Absent), None);
/// assert_eq!(g.is_even(None::<&str>), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Subject<'a> {
    /// No value at all. Every predicate answers `None`.
    #[default]
    Absent,
    /// Text to match against the grammar.
    Text(&'a str),
    /// A signed machine integer.
    Int(i64),
    /// An unsigned machine integer.
    UInt(u64),
    /// A machine float.
    Float(f64),
    /// A non-scalar value (a list, a map, a reference...). Every predicate
    /// answers `None`.
    Structured,
}

impl<'a> From<&'a str> for Subject<'a> {
    fn from(text: &'a str) -> Self {
        Subject::Text(text)
    }
}

impl<'a> From<&'a String> for Subject<'a> {
    fn from(text: &'a String) -> Self {
        Subject::Text(text)
    }
}

macro_rules! subject_from {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Subject<'_> {
                fn from(value: $source) -> Self {
                    Subject::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

subject_from!(Int(i64): i8, i16, i32, i64);
subject_from!(UInt(u64): u8, u16, u32, u64);
subject_from!(Float(f64): f32, f64);

impl<'a, T: Into<Subject<'a>>> From<Option<T>> for Subject<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Subject::Absent, Into::into)
    }
}

/// Machine integers widened to one type for the arithmetic checks.
fn integer_check(pattern: Pattern, v: i128) -> Option<bool> {
    Some(match pattern {
        Pattern::Decimal
        | Pattern::Integer
        | Pattern::Numeric
        | Pattern::Comparable
        | Pattern::Number => true,
        Pattern::Infinity | Pattern::NaN => false,
        Pattern::Zero => v == 0,
        Pattern::NonZero => v != 0,
        Pattern::Positive => v > 0,
        Pattern::Negative => v < 0,
        Pattern::Even => v % 2 == 0,
        Pattern::Odd => v % 2 != 0,
        Pattern::Binary | Pattern::Octal | Pattern::Hex => return None,
    })
}

/// Every `f64` with magnitude of at least 2^52 is integral.
const INTEGRAL_FLOOR: f64 = 4_503_599_627_370_496.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn is_integral(v: f64) -> bool {
    v.is_finite() && (v >= INTEGRAL_FLOOR || v <= -INTEGRAL_FLOOR || v == (v as i64) as f64)
}

#[allow(clippy::float_cmp)]
fn float_check(pattern: Pattern, v: f64) -> Option<bool> {
    Some(match pattern {
        Pattern::Number => true,
        Pattern::Integer => is_integral(v),
        Pattern::Numeric => v.is_finite(),
        Pattern::Comparable => !v.is_nan(),
        Pattern::Infinity => v.is_infinite(),
        Pattern::NaN => v.is_nan(),
        Pattern::Zero => v == 0.0,
        Pattern::NonZero => !v.is_nan() && v != 0.0,
        Pattern::Positive => v > 0.0,
        Pattern::Negative => v < 0.0,
        // Parity is only established by the text; the literal patterns have
        // no arithmetic form.
        Pattern::Binary | Pattern::Octal | Pattern::Hex | Pattern::Decimal => return None,
        Pattern::Even | Pattern::Odd => {
            log::trace!("{pattern} of float {v} falls back to its text");
            return None;
        }
    })
}

impl Grammar {
    /// Classifies `subject` by `pattern`.
    ///
    /// Returns `None` for [`Subject::Absent`] and [`Subject::Structured`],
    /// otherwise whether the value belongs to the pattern.
    pub fn check<'a>(&self, pattern: Pattern, subject: impl Into<Subject<'a>>) -> Option<bool> {
        match subject.into() {
            Subject::Absent | Subject::Structured => None,
            Subject::Text(text) => Some(self.matches(pattern, text)),
            Subject::Int(v) => {
                integer_check(pattern, i128::from(v)).or_else(|| self.check_text(pattern, v))
            }
            Subject::UInt(v) => {
                integer_check(pattern, i128::from(v)).or_else(|| self.check_text(pattern, v))
            }
            Subject::Float(v) => float_check(pattern, v).or_else(|| self.check_text(pattern, v)),
        }
    }

    fn check_text(&self, pattern: Pattern, value: impl ToString) -> Option<bool> {
        Some(self.matches(pattern, &value.to_string()))
    }
}

macro_rules! predicates {
    ($($(#[$doc:meta])* $name:ident => $pattern:ident;)*) => {
        impl Grammar {
            $(
                $(#[$doc])*
                pub fn $name<'a>(&self, subject: impl Into<Subject<'a>>) -> Option<bool> {
                    self.check(Pattern::$pattern, subject)
                }
            )*
        }

        $(
            $(#[$doc])*
            ///
            /// Uses [`Grammar::DEFAULT`].
            pub fn $name<'a>(subject: impl Into<Subject<'a>>) -> Option<bool> {
                Grammar::DEFAULT.$name(subject)
            }
        )*
    };
}

predicates! {
    /// Whether the value is a binary integer literal such as `0b101`.
    is_binary => Binary;
    /// Whether the value is an octal integer literal such as `0755`.
    is_octal => Octal;
    /// Whether the value is a hexadecimal integer literal such as `0x2a`.
    is_hex => Hex;
    /// Whether the value is a decimal without exponent, such as `-1.5`.
    is_decimal => Decimal;
    /// Whether the value looks like any number, NaN and Infinity included.
    looks_like_number => Number;
    /// Whether the value looks like an integer.
    looks_like_integer => Integer;
    /// Whether the value looks like a finite number, with optional exponent.
    looks_like_numeric => Numeric;
    /// Whether the value is ordered relative to zero: any number but NaN.
    looks_like_comparable => Comparable;
    /// Whether the value looks like positive or negative infinity.
    looks_like_infinity => Infinity;
    /// Whether the value looks like NaN.
    looks_like_nan => NaN;
    /// Whether the value is zero, of either sign.
    is_zero => Zero;
    /// Whether the value is a number other than zero and NaN.
    is_nonzero => NonZero;
    /// Whether the value is greater than zero.
    is_positive => Positive;
    /// Whether the value is less than zero.
    is_negative => Negative;
    /// Whether the value is an even integer.
    is_even => Even;
    /// Whether the value is an odd integer.
    is_odd => Odd;
}

/// Decomposes `text` with [`Grammar::DEFAULT`]; see
/// [`Grammar::grok_number`].
#[must_use]
pub fn grok_number(text: &str) -> ParsedNumber<'_> {
    Grammar::DEFAULT.grok_number(text)
}
