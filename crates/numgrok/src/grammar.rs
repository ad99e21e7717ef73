use crate::{
    GrokError, GrammarOptions, ParsedNumber, Pattern,
    grok::grok,
    scanner::Scanner,
};

/// The pattern registry: every recognizer, configured once.
///
/// A `Grammar` is a small immutable value. It is `Copy`, `Send` and `Sync`,
/// can be built in `const` context, and is shared freely between threads.
/// [`Grammar::DEFAULT`] uses the platform's [`GrammarOptions::DEFAULT`], and
/// the free functions of this crate delegate to it.
///
/// # Examples
///
/// ```rust
/// use numgrok::{Grammar, GrammarOptions, Pattern};
///
/// const GRAMMAR: Grammar = Grammar::new(GrammarOptions::PORTABLE);
///
/// assert!(GRAMMAR.matches(Pattern::Numeric, " -1.5e3 "));
/// assert!(!GRAMMAR.matches(Pattern::Numeric, "inf"));
/// assert_eq!(GRAMMAR.match_prefix(Pattern::Integer, "42abc"), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grammar {
    options: GrammarOptions,
}

impl Grammar {
    /// The grammar for the target platform.
    pub const DEFAULT: Grammar = Grammar::new(GrammarOptions::DEFAULT);

    /// Builds a grammar with the given options.
    #[must_use]
    pub const fn new(options: GrammarOptions) -> Self {
        Self { options }
    }

    /// The options this grammar was built with.
    #[must_use]
    pub const fn options(&self) -> GrammarOptions {
        self.options
    }

    /// Length in bytes of the longest match of `pattern` at the very start of
    /// `text`, with no whitespace skipped. `None` when nothing matches.
    #[must_use]
    pub fn match_prefix(&self, pattern: Pattern, text: &str) -> Option<usize> {
        let mut s = Scanner::new(text);
        (pattern.matcher())(&mut s, self.options.extended_spellings).then(|| s.pos())
    }

    /// Whether `text`, stripped of leading and trailing whitespace, matches
    /// `pattern` in its entirety.
    #[must_use]
    pub fn matches(&self, pattern: Pattern, text: &str) -> bool {
        let text = text.trim();
        self.match_prefix(pattern, text) == Some(text.len())
    }

    /// Every pattern `text` matches, in [`Pattern::ALL`] order.
    ///
    /// ```rust
    /// use numgrok::{Grammar, Pattern};
    ///
    /// let kinds: Vec<_> = Grammar::DEFAULT.classify("-3").collect();
    /// assert_eq!(
    ///     kinds,
    ///     [
    ///         Pattern::Decimal,
    ///         Pattern::Integer,
    ///         Pattern::Numeric,
    ///         Pattern::NonZero,
    ///         Pattern::Negative,
    ///         Pattern::Odd,
    ///         Pattern::Comparable,
    ///         Pattern::Number,
    ///     ]
    /// );
    /// ```
    pub fn classify<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Pattern> + 'a {
        Pattern::ALL
            .into_iter()
            .filter(move |&pattern| self.matches(pattern, text))
    }

    /// Splits `text` into sign, integer part, fraction, exponent sign,
    /// exponent digits and unconsumed excess.
    ///
    /// Never fails: when no number starts the input, every part is unset and
    /// the whole input is returned as excess.
    ///
    /// ```rust
    /// use numgrok::Grammar;
    ///
    /// let n = Grammar::DEFAULT.grok_number("  123.45e-6  ");
    /// assert_eq!(n.sign(), Some(""));
    /// assert_eq!(n.integer_part(), Some("123"));
    /// assert_eq!(n.fraction(), Some("45"));
    /// assert_eq!(n.exponent_sign(), Some("-"));
    /// assert_eq!(n.exponent_digits(), Some("6"));
    /// assert_eq!(n.excess(), "");
    /// ```
    #[must_use]
    pub fn grok_number<'src>(&self, text: &'src str) -> ParsedNumber<'src> {
        grok(self, text)
    }

    /// Like [`Grammar::grok_number`], but requires the whole input to be one
    /// number.
    ///
    /// # Errors
    ///
    /// [`GrokError::NotANumber`] when no number starts the input,
    /// [`GrokError::TrailingInput`] when input remains after it.
    pub fn parse_number<'src>(&self, text: &'src str) -> Result<ParsedNumber<'src>, GrokError> {
        let parsed = self.grok_number(text);
        if !parsed.is_parsed() {
            return Err(GrokError::NotANumber);
        }
        if !parsed.excess().is_empty() {
            return Err(GrokError::TrailingInput {
                offset: text.len() - parsed.excess().len(),
            });
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTABLE: Grammar = Grammar::new(GrammarOptions::PORTABLE);

    #[test]
    fn default_grammar_follows_platform() {
        assert_eq!(
            Grammar::DEFAULT.options().extended_spellings,
            cfg!(windows)
        );
        assert_eq!(Grammar::default(), Grammar::DEFAULT);
    }

    #[test]
    fn anchoring_strips_whitespace_only() {
        assert!(PORTABLE.matches(Pattern::Integer, "\t 42 \n"));
        assert!(!PORTABLE.matches(Pattern::Integer, "4 2"));
        assert!(!PORTABLE.matches(Pattern::Integer, ""));
        assert_eq!(PORTABLE.match_prefix(Pattern::Integer, " 42"), None);
    }

    #[test]
    fn strict_parse_reports_offsets() {
        assert_eq!(
            PORTABLE.parse_number(" 12 apples"),
            Err(GrokError::TrailingInput { offset: 4 })
        );
        assert_eq!(PORTABLE.parse_number("apples"), Err(GrokError::NotANumber));
        assert_eq!(
            PORTABLE.parse_number("-0.5").map(|n| n.fraction()),
            Ok(Some("5"))
        );
    }

    #[test]
    fn grammar_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Grammar>();
    }
}
