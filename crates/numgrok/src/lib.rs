//! Classify text by the lexical grammar of numeric literals.
//!
//! A plain "is this a number" check is too coarse for callers that need to
//! branch on *which kind* of number a value is. `numgrok` answers that with a
//! set of independent [`Pattern`]s (integer, numeric, infinity, NaN, zero,
//! sign, parity, binary/octal/hex literals...), a structural decomposer
//! ([`grok_number`]) that splits a number into its textual parts, and
//! tri-state predicates that accept either text or an already-parsed machine
//! number.
//!
//! ```rust
//! use numgrok::{Grammar, GrammarOptions, grok_number, is_even, looks_like_nan};
//!
//! assert_eq!(is_even("-14"), Some(true));
//! assert_eq!(is_even("4.5"), Some(false));
//! assert_eq!(is_even(None::<&str>), None);
//! assert_eq!(looks_like_nan(f64::NAN), Some(true));
//!
//! let windows = Grammar::new(GrammarOptions::EXTENDED);
//! assert_eq!(windows.looks_like_infinity("1.#INF00"), Some(true));
//!
//! let n = grok_number("+7.25e3 kg");
//! assert_eq!(n.integer_part(), Some("7"));
//! assert_eq!(n.excess(), "kg");
//! ```
//!
//! The grammar is hand-written recursive descent over bytes; matching never
//! allocates, and every alternation tries its alternatives longest-first.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod atoms;
mod scanner;
mod spelling;

mod classify;
mod error;
mod grammar;
mod grok;
mod options;
mod pattern;

#[cfg(test)]
mod tests;

pub use classify::{
    Subject, grok_number, is_binary, is_decimal, is_even, is_hex, is_negative, is_nonzero,
    is_octal, is_odd, is_positive, is_zero, looks_like_comparable, looks_like_infinity,
    looks_like_integer, looks_like_nan, looks_like_number, looks_like_numeric,
};
pub use error::GrokError;
pub use grammar::Grammar;
pub use grok::ParsedNumber;
pub use options::GrammarOptions;
pub use pattern::Pattern;
