//! Infinity and NaN spellings.
//!
//! Both are matched against fixed literal tables. Tables are ordered longest
//! first so that a word sharing a prefix with a shorter one (`infinity` /
//! `inf`, `nanq` / `nan`) is always tried before the shorter candidate.
//!
//! Extended spellings are the ones some C runtimes print for special values:
//! an `1.#` prefix (`1.#INF`, `1.#IND`, `1.#QNAN`) optionally padded with
//! zeros, and a parenthesized NaN payload (`nan(0x2a)`).

use crate::{atoms, scanner::Scanner};

const INFINITY_WORDS: &[&str] = &["infinity", "inf"];
const NAN_WORDS: &[&str] = &["nanq", "nans", "qnan", "snan", "nan"];

/// Prefix of the extended spellings.
const EXTENDED_PREFIX: &[u8] = b"1.#";
/// "Indeterminate", the extended spelling of the default quiet NaN.
const INDETERMINATE: &str = "ind";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SpecialKind {
    Infinity,
    NaN,
}

/// A matched Infinity or NaN spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Special<'src> {
    pub kind: SpecialKind,
    /// The spelling's word in lowercase, without extended prefix, payload or
    /// padding.
    pub word: &'static str,
    /// Payload of `nan(...)`, without parentheses or quotes.
    pub payload: Option<&'src str>,
}

/// Consumes the first word of `table` that matches, ignoring case.
fn word(s: &mut Scanner<'_>, table: &'static [&'static str]) -> Option<&'static str> {
    table
        .iter()
        .copied()
        .find(|w| s.eat_ignore_case(w.as_bytes()))
}

/// `1.#` + `body` + `0*`
fn extended<'src>(
    s: &mut Scanner<'src>,
    body: impl FnOnce(&mut Scanner<'src>) -> Option<Special<'src>>,
) -> Option<Special<'src>> {
    s.attempt(|s| {
        if !s.eat_ignore_case(EXTENDED_PREFIX) {
            return None;
        }
        let special = body(s)?;
        s.eat_while(|b| b == b'0');
        Some(special)
    })
}

/// An Infinity spelling, without sign.
pub(crate) fn infinity_body<'src>(
    s: &mut Scanner<'src>,
    extended_mode: bool,
) -> Option<Special<'src>> {
    let plain = |s: &mut Scanner<'src>| {
        word(s, INFINITY_WORDS).map(|word| Special {
            kind: SpecialKind::Infinity,
            word,
            payload: None,
        })
    };
    if extended_mode {
        if let Some(special) = extended(s, plain) {
            return Some(special);
        }
    }
    plain(s)
}

/// A NaN spelling, without sign.
pub(crate) fn nan_body<'src>(
    s: &mut Scanner<'src>,
    extended_mode: bool,
) -> Option<Special<'src>> {
    if extended_mode {
        let prefixed = extended(s, |s| {
            if s.eat_ignore_case(INDETERMINATE.as_bytes()) {
                Some(Special {
                    kind: SpecialKind::NaN,
                    word: INDETERMINATE,
                    payload: None,
                })
            } else {
                nan_word(s, true)
            }
        });
        if prefixed.is_some() {
            return prefixed;
        }
    }
    nan_word(s, extended_mode)
}

/// Whichever of [`infinity_body`] and [`nan_body`] matches. The two never
/// match at the same offset.
pub(crate) fn special_body<'src>(
    s: &mut Scanner<'src>,
    extended_mode: bool,
) -> Option<Special<'src>> {
    infinity_body(s, extended_mode).or_else(|| nan_body(s, extended_mode))
}

fn nan_word<'src>(s: &mut Scanner<'src>, with_payload: bool) -> Option<Special<'src>> {
    let word = word(s, NAN_WORDS)?;
    let payload = if with_payload { payload(s) } else { None };
    Some(Special {
        kind: SpecialKind::NaN,
        word,
        payload,
    })
}

/// `(` hex | binary | `"`octal`"` | digits `)`
fn payload<'src>(s: &mut Scanner<'src>) -> Option<&'src str> {
    s.attempt(|s| {
        if !s.eat(b'(') {
            return None;
        }
        s.attempt(|s| closed(s, atoms::hex_body))
            .or_else(|| s.attempt(|s| closed(s, atoms::binary_body)))
            .or_else(|| s.attempt(quoted_octal))
            .or_else(|| s.attempt(|s| closed(s, atoms::digits)))
    })
}

/// `body` followed by the closing parenthesis.
fn closed<'src>(s: &mut Scanner<'src>, body: fn(&mut Scanner<'_>) -> bool) -> Option<&'src str> {
    let start = s.pos();
    if !body(s) {
        return None;
    }
    let text = s.since(start);
    s.eat(b')').then_some(text)
}

fn quoted_octal<'src>(s: &mut Scanner<'src>) -> Option<&'src str> {
    if !s.eat(b'"') {
        return None;
    }
    let start = s.pos();
    if !atoms::octal_body(s) {
        return None;
    }
    let text = s.since(start);
    (s.eat(b'"') && s.eat(b')')).then_some(text)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn special(text: &str, extended_mode: bool) -> Option<(Special<'_>, &str)> {
        let mut s = Scanner::new(text);
        special_body(&mut s, extended_mode).map(|sp| (sp, s.rest()))
    }

    #[rstest]
    #[case("inf", "inf")]
    #[case("INF", "inf")]
    #[case("Infinity", "infinity")]
    #[case("iNfInItY", "infinity")]
    fn infinity_words(#[case] text: &str, #[case] word: &str) {
        let (sp, rest) = special(text, false).expect("infinity");
        assert_eq!(sp.kind, SpecialKind::Infinity);
        assert_eq!(sp.word, word);
        assert_eq!(rest, "");
    }

    #[test]
    fn shorter_word_is_only_a_fallback() {
        let (sp, rest) = special("infinit", false).unwrap();
        assert_eq!(sp.word, "inf");
        assert_eq!(rest, "init");

        let (sp, rest) = special("NaNq", false).unwrap();
        assert_eq!(sp.word, "nanq");
        assert_eq!(rest, "");

        let (sp, rest) = special("qnanq", false).unwrap();
        assert_eq!(sp.word, "qnan");
        assert_eq!(rest, "q");
    }

    #[rstest]
    #[case("1.#INF", SpecialKind::Infinity, "inf", None)]
    #[case("1.#INF00", SpecialKind::Infinity, "inf", None)]
    #[case("1.#Infinity0", SpecialKind::Infinity, "infinity", None)]
    #[case("1.#IND", SpecialKind::NaN, "ind", None)]
    #[case("1.#IND000", SpecialKind::NaN, "ind", None)]
    #[case("1.#QNAN", SpecialKind::NaN, "qnan", None)]
    #[case("1.#SNAN0", SpecialKind::NaN, "snan", None)]
    #[case("nan(123)", SpecialKind::NaN, "nan", Some("123"))]
    #[case("NaN(0x2A)", SpecialKind::NaN, "nan", Some("0x2A"))]
    #[case("nan(0b101)", SpecialKind::NaN, "nan", Some("0b101"))]
    #[case("nan(\"017\")", SpecialKind::NaN, "nan", Some("017"))]
    #[case("1.#nan(7)", SpecialKind::NaN, "nan", Some("7"))]
    fn extended_spellings(
        #[case] text: &str,
        #[case] kind: SpecialKind,
        #[case] word: &str,
        #[case] payload: Option<&str>,
    ) {
        let (sp, rest) = special(text, true).expect("extended spelling");
        assert_eq!(sp.kind, kind);
        assert_eq!(sp.word, word);
        assert_eq!(sp.payload, payload);
        assert_eq!(rest, "");
    }

    #[rstest]
    #[case("1.#INF")]
    #[case("1.#IND")]
    fn extended_prefix_needs_extended_mode(#[case] text: &str) {
        assert_eq!(special(text, false), None);
    }

    #[test]
    fn payload_is_plain_text_without_extended_mode() {
        let (sp, rest) = special("nan(123)", false).unwrap();
        assert_eq!(sp.payload, None);
        assert_eq!(rest, "(123)");
    }

    #[rstest]
    #[case("nan(abc)", "(abc)")]
    #[case("nan(12", "(12")]
    #[case("nan(\"019\")", "(\"019\")")]
    #[case("nan()", "()")]
    fn malformed_payload_is_left_unconsumed(#[case] text: &str, #[case] rest: &str) {
        let (sp, left) = special(text, true).unwrap();
        assert_eq!(sp.word, "nan");
        assert_eq!(sp.payload, None);
        assert_eq!(left, rest);
    }

    #[test]
    fn extended_prefix_without_word_rewinds() {
        let mut s = Scanner::new("1.#XYZ");
        assert_eq!(special_body(&mut s, true), None);
        assert_eq!(s.pos(), 0);
    }
}
