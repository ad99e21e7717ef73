//! Lexical atoms: the primitive character-class sub-grammars every pattern is
//! composed from.
//!
//! Each atom either consumes its whole production and reports success, or
//! leaves the scanner exactly where it found it.

use crate::scanner::Scanner;

/// The digits of a decimal body, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalSpan<'src> {
    pub integer: &'src str,
    /// `None` when no `.` was present.
    pub fraction: Option<&'src str>,
}

impl DecimalSpan<'_> {
    /// Whether any digit of the integer or fractional part is `1`-`9`.
    pub fn has_nonzero_digit(&self) -> bool {
        self.integer
            .bytes()
            .chain(self.fraction.unwrap_or_default().bytes())
            .any(|b| matches!(b, b'1'..=b'9'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExponentSpan<'src> {
    pub sign: &'src str,
    pub digits: &'src str,
}

fn is_sign(b: u8) -> bool {
    matches!(b, b'+' | b'-')
}

/// Optional `+`/`-`; returns the (possibly empty) sign text.
pub(crate) fn sign<'src>(s: &mut Scanner<'src>) -> &'src str {
    let start = s.pos();
    s.eat_if(is_sign);
    s.since(start)
}

/// `[0-9]+`
pub(crate) fn digits(s: &mut Scanner<'_>) -> bool {
    s.eat_while(|b| b.is_ascii_digit()) > 0
}

/// `0[bB][01]+`
pub(crate) fn binary_body(s: &mut Scanner<'_>) -> bool {
    s.attempt(|s| {
        let ok = s.eat(b'0')
            && s.eat_if(|b| matches!(b, b'b' | b'B')).is_some()
            && s.eat_while(|b| matches!(b, b'0' | b'1')) > 0;
        ok.then_some(())
    })
    .is_some()
}

/// `0[0-7]+`
pub(crate) fn octal_body(s: &mut Scanner<'_>) -> bool {
    s.attempt(|s| (s.eat(b'0') && s.eat_while(|b| matches!(b, b'0'..=b'7')) > 0).then_some(()))
        .is_some()
}

/// `0[xX][0-9a-fA-F]+`
pub(crate) fn hex_body(s: &mut Scanner<'_>) -> bool {
    s.attempt(|s| {
        let ok = s.eat(b'0')
            && s.eat_if(|b| matches!(b, b'x' | b'X')).is_some()
            && s.eat_while(|b| b.is_ascii_hexdigit()) > 0;
        ok.then_some(())
    })
    .is_some()
}

/// `[0-9]+(\.[0-9]*)?|\.[0-9]+`, without a sign.
pub(crate) fn unsigned_decimal<'src>(s: &mut Scanner<'src>) -> Option<DecimalSpan<'src>> {
    s.attempt(|s| {
        let start = s.pos();
        s.eat_while(|b| b.is_ascii_digit());
        let integer = s.since(start);
        let fraction = if s.eat(b'.') {
            let frac_start = s.pos();
            s.eat_while(|b| b.is_ascii_digit());
            Some(s.since(frac_start))
        } else {
            None
        };
        if integer.is_empty() && fraction.is_none_or(str::is_empty) {
            return None;
        }
        Some(DecimalSpan { integer, fraction })
    })
}

/// `[+-]?` followed by [`unsigned_decimal`].
pub(crate) fn decimal_body<'src>(s: &mut Scanner<'src>) -> Option<DecimalSpan<'src>> {
    s.attempt(|s| {
        sign(s);
        unsigned_decimal(s)
    })
}

/// `[eE][+-]?[0-9]+`
pub(crate) fn exponent<'src>(s: &mut Scanner<'src>) -> Option<ExponentSpan<'src>> {
    s.attempt(|s| {
        s.eat_if(|b| matches!(b, b'e' | b'E'))?;
        let sign = sign(s);
        let start = s.pos();
        digits(s).then(|| ExponentSpan {
            sign,
            digits: s.since(start),
        })
    })
}
