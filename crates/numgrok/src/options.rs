/// Configuration options for a [`Grammar`](crate::Grammar).
///
/// # Examples
///
/// ```rust
/// use numgrok::{Grammar, GrammarOptions, Pattern};
///
/// let grammar = Grammar::new(GrammarOptions {
///     extended_spellings: true,
/// });
/// assert!(grammar.matches(Pattern::Infinity, "-1.#INF00"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrammarOptions {
    /// Whether to recognize the extended Infinity and NaN spellings.
    ///
    /// These are the forms some C runtimes print for special values:
    ///
    /// ```text
    /// 1.#INF   1.#Infinity00   1.#IND   1.#QNAN0
    /// nan(123)   nan(0x2a)   nan("017")   nan(0b101)
    /// ```
    ///
    /// When `false`, only `inf`, `infinity`, `nan` and its `q`/`s` variants
    /// are recognized.
    ///
    /// # Default
    ///
    /// `true` on Windows targets, whose C runtime prints `1.#INF`, `false`
    /// elsewhere.
    pub extended_spellings: bool,
}

impl GrammarOptions {
    /// The options matching the target platform's float formatting.
    pub const DEFAULT: Self = Self {
        extended_spellings: cfg!(windows),
    };

    /// Only the spellings every platform shares.
    pub const PORTABLE: Self = Self {
        extended_spellings: false,
    };

    /// Every spelling, regardless of platform.
    pub const EXTENDED: Self = Self {
        extended_spellings: true,
    };
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
