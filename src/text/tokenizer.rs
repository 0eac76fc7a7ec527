//! Article tokenizer.
//!
//! Turns raw Markdown-flavoured article text into a [`TokenBatch`]. The
//! cleaning is a fixed, ordered list of regex deletions; the order is part
//! of the contract because previously stored counts were produced by it.

use crate::core::TokenBatch;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Separator used to split normalized text into words.
pub const WORD_SEPARATOR: char = ' ';

/// One step of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanStep {
    /// Carriage returns and line feeds become a space.
    LineBreaks,
    /// Fenced code blocks, `**` emphasis and ASCII digits are deleted.
    MarkupAndDigits,
    /// Punctuation is deleted.
    Punctuation,
    /// Operator characters are deleted.
    Operators,
    /// Zero-width characters are deleted.
    ZeroWidth,
}

impl CleanStep {
    /// All steps in the order they are applied.
    pub const PIPELINE: [Self; 5] = [
        Self::LineBreaks,
        Self::MarkupAndDigits,
        Self::Punctuation,
        Self::Operators,
        Self::ZeroWidth,
    ];

    /// Returns the compiled regex for this step.
    #[allow(clippy::expect_used)]
    fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::LineBreaks => static_regex!(LINE_BREAKS, r"[\r\n]"),
            // Greedy: one fence pair spans to the last closing marker.
            Self::MarkupAndDigits => static_regex!(MARKUP_AND_DIGITS, r"```.*```|\*\*|[0-9]"),
            Self::Punctuation => static_regex!(PUNCTUATION, r#"[.();#"'\[\]`:,!?]"#),
            Self::Operators => static_regex!(OPERATORS, r"[<>*+=\-]"),
            Self::ZeroWidth => static_regex!(ZERO_WIDTH, r"[\x{200B}-\x{200D}\x{FEFF}]"),
        }
    }

    /// Returns what matches of this step are replaced with.
    const fn replacement(self) -> &'static str {
        match self {
            Self::LineBreaks => " ",
            _ => "",
        }
    }

    /// Applies this step to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        self.regex().replace_all(text, self.replacement())
    }
}

/// Cleans and lower-cases article text without splitting it.
///
/// # Examples
///
/// ```
/// use vocab_rs::text::normalize;
///
/// assert_eq!(normalize("Hello, **World** 42!"), "hello world ");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut clean = text.to_string();
    for step in CleanStep::PIPELINE {
        if let Cow::Owned(next) = step.apply(&clean) {
            clean = next;
        }
    }
    clean.to_lowercase()
}

/// Splits normalized text into word segments, dropping empty ones.
pub fn segments(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(WORD_SEPARATOR)
        .filter(|segment| !segment.is_empty())
}

/// Tokenizes raw article text into unique words with occurrence counts.
///
/// Never fails; empty or non-linguistic input yields an empty batch.
///
/// # Examples
///
/// ```
/// use vocab_rs::text::tokenize;
///
/// let batch = tokenize("The cat saw the other cat.");
/// assert_eq!(batch.words(), ["the", "cat", "saw", "other"]);
/// assert_eq!(batch.counts(), [2, 2, 1, 1]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> TokenBatch {
    let normalized = normalize(text);
    TokenBatch::from_segments(segments(&normalized))
}
