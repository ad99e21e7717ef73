//! Structural decomposition of a number into its parts.
//!
//! The scan is left to right without backtracking:
//!
//! ```text
//!   ws*  sign?  ( special | digits? ( "." digits? )? ( [eE] sign? digits )? )  ws*  excess
//! ```
//!
//! `special` (an Infinity or NaN spelling) competes with the digit run and
//! the longer of the two wins, so `1.#INF` is an Infinity in extended mode
//! rather than the integer `1` followed by garbage. A special spelling takes
//! no fraction or exponent; a NaN payload is reported in the fraction slot.

use alloc::string::String;

use crate::{
    Grammar, GrokError, atoms,
    scanner::Scanner,
    spelling::{self, SpecialKind},
};

/// A number split into its textual parts.
///
/// Every part borrows from the decomposed input, except the words of
/// Infinity and NaN spellings, which are reported in lowercase without any
/// extended prefix or padding (`"1.#INF00"` has integer part `"inf"`).
///
/// A failed decomposition has every part unset and the whole input as
/// [`excess`](ParsedNumber::excess).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedNumber<'src> {
    sign: Option<&'src str>,
    integer_part: Option<&'src str>,
    fraction: Option<&'src str>,
    exponent_sign: Option<&'src str>,
    exponent_digits: Option<&'src str>,
    excess: &'src str,
    #[cfg_attr(feature = "serde", serde(skip))]
    special: Option<SpecialKind>,
}

impl<'src> ParsedNumber<'src> {
    fn unparsed(input: &'src str) -> Self {
        Self {
            sign: None,
            integer_part: None,
            fraction: None,
            exponent_sign: None,
            exponent_digits: None,
            excess: input,
            special: None,
        }
    }

    /// `""`, `"+"` or `"-"`; unset on failure.
    #[must_use]
    pub fn sign(&self) -> Option<&'src str> {
        self.sign
    }

    /// The digits before the point, or an Infinity/NaN word. May be `""` when
    /// the number starts with a point.
    #[must_use]
    pub fn integer_part(&self) -> Option<&'src str> {
        self.integer_part
    }

    /// Digits after the point (possibly `""`), or a NaN payload. Unset when
    /// there was no point.
    #[must_use]
    pub fn fraction(&self) -> Option<&'src str> {
        self.fraction
    }

    /// `""`, `"+"` or `"-"` when an exponent is present.
    #[must_use]
    pub fn exponent_sign(&self) -> Option<&'src str> {
        self.exponent_sign
    }

    /// Exponent digits when an exponent is present.
    #[must_use]
    pub fn exponent_digits(&self) -> Option<&'src str> {
        self.exponent_digits
    }

    /// Input left after the number and any trailing whitespace.
    #[must_use]
    pub fn excess(&self) -> &'src str {
        self.excess
    }

    /// Whether a number was recognized at the start of the input.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.integer_part.is_some()
    }

    /// Whether a number was recognized and nothing follows it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_parsed() && self.excess.is_empty()
    }

    /// Whether the integer part is an Infinity or NaN word.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// Converts the recognized parts to the nearest `f64`, ignoring
    /// [`excess`](ParsedNumber::excess).
    ///
    /// # Errors
    ///
    /// [`GrokError::NotANumber`] when the decomposition failed.
    pub fn to_f64(&self) -> Result<f64, GrokError> {
        let integer = self.integer_part.ok_or(GrokError::NotANumber)?;
        let negative = self.sign == Some("-");
        match self.special {
            Some(SpecialKind::Infinity) if negative => return Ok(f64::NEG_INFINITY),
            Some(SpecialKind::Infinity) => return Ok(f64::INFINITY),
            Some(SpecialKind::NaN) => return Ok(f64::NAN),
            None => {}
        }

        let mut text = String::with_capacity(32);
        text.push_str(self.sign.unwrap_or_default());
        text.push_str(if integer.is_empty() { "0" } else { integer });
        if let Some(fraction) = self.fraction.filter(|f| !f.is_empty()) {
            text.push('.');
            text.push_str(fraction);
        }
        if let Some(digits) = self.exponent_digits {
            text.push('e');
            text.push_str(self.exponent_sign.unwrap_or_default());
            text.push_str(digits);
        }
        Ok(text.parse()?)
    }
}

pub(crate) fn grok<'src>(grammar: &Grammar, input: &'src str) -> ParsedNumber<'src> {
    let extended = grammar.options().extended_spellings;
    let mut s = Scanner::new(input);
    s.skip_whitespace();
    let sign = atoms::sign(&mut s);

    let start = s.pos();
    let special = spelling::special_body(&mut s, extended).map(|sp| (sp, s.pos()));
    s.rewind(start);
    atoms::digits(&mut s);
    let digits_end = s.pos();

    let mut parsed = ParsedNumber {
        sign: Some(sign),
        ..ParsedNumber::unparsed("")
    };
    match special {
        Some((special, end)) if end > digits_end => {
            s.rewind(end);
            parsed.integer_part = Some(special.word);
            parsed.fraction = special.payload;
            parsed.special = Some(special.kind);
        }
        _ => {
            parsed.integer_part = Some(s.since(start));
            if s.eat(b'.') {
                let frac_start = s.pos();
                s.eat_while(|b| b.is_ascii_digit());
                parsed.fraction = Some(s.since(frac_start));
            }
            let marker = s.pos();
            if let Some(exponent) = atoms::exponent(&mut s) {
                parsed.exponent_sign = Some(exponent.sign);
                parsed.exponent_digits = Some(exponent.digits);
            } else if matches!(s.peek(), Some(b'e' | b'E')) {
                log::trace!(
                    "grok_number: exponent marker without digits at byte {marker} of {input:?}"
                );
            }
            if parsed.integer_part == Some("") && parsed.fraction.is_none_or(str::is_empty) {
                log::trace!("grok_number: no digits in {input:?}");
                return ParsedNumber::unparsed(input);
            }
        }
    }

    s.skip_whitespace();
    parsed.excess = s.rest();
    parsed
}
