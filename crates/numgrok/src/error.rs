use core::num::ParseFloatError;

use thiserror::Error;

/// Failure of a strict numeric parse.
///
/// The predicates and [`Grammar::grok_number`](crate::Grammar::grok_number)
/// never fail; only the strict entry points
/// ([`Grammar::parse_number`](crate::Grammar::parse_number),
/// [`ParsedNumber::to_f64`](crate::ParsedNumber::to_f64)) report errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrokError {
    /// The input does not start with a number.
    #[error("input does not start with a number")]
    NotANumber,
    /// A number was recognized but input remains after it.
    #[error("unexpected input after number at byte {offset}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        offset: usize,
    },
    /// The decomposed parts could not be converted to a float.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),
}
