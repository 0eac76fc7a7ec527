//! Stopword classification.
//!
//! A closed, statically defined table of function words that are never
//! worth learning on their own. The table is grouped by word class for
//! readability only; classification is plain set membership.
//!
//! The built-in table can be overridden at startup from a plain text file
//! (see [`StopwordSet::load_overrides`]) and is then passed explicitly to
//! whatever needs it. There is no process-wide instance.

use crate::error::{Error, IoError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::path::Path;

/// Word classes of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// Forms of "to be".
    BeVerb,
    /// Modal and auxiliary verbs.
    Auxiliary,
    /// Personal, possessive, relative and indefinite pronouns.
    Pronoun,
    /// High-frequency adverbs.
    Adverb,
    /// The definite article.
    Article,
    /// Prepositions.
    Preposition,
    /// Conjunctions.
    Conjunction,
    /// Single letters a-z.
    Letter,
    /// Number words.
    Number,
    /// Named exceptions.
    Named,
    /// Abbreviations and apostrophe remnants.
    Noise,
}

impl WordClass {
    /// All classes in display order.
    pub const ALL: [Self; 11] = [
        Self::BeVerb,
        Self::Auxiliary,
        Self::Pronoun,
        Self::Adverb,
        Self::Article,
        Self::Preposition,
        Self::Conjunction,
        Self::Letter,
        Self::Number,
        Self::Named,
        Self::Noise,
    ];

    /// Returns the built-in words of this class.
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::BeVerb => BE_VERBS,
            Self::Auxiliary => AUXILIARIES,
            Self::Pronoun => PRONOUNS,
            Self::Adverb => ADVERBS,
            Self::Article => ARTICLES,
            Self::Preposition => PREPOSITIONS,
            Self::Conjunction => CONJUNCTIONS,
            Self::Letter => LETTERS,
            Self::Number => NUMBERS,
            Self::Named => NAMED,
            Self::Noise => NOISE,
        }
    }

    /// Returns a short lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BeVerb => "be",
            Self::Auxiliary => "auxiliary",
            Self::Pronoun => "pronoun",
            Self::Adverb => "adverb",
            Self::Article => "article",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Letter => "letter",
            Self::Number => "number",
            Self::Named => "named",
            Self::Noise => "noise",
        }
    }

    /// Returns the built-in class of `word`, if any.
    #[must_use]
    pub fn of(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.words().iter().any(|w| *w == word))
    }
}

const BE_VERBS: &[&str] = &["am", "is", "are", "was", "were", "been", "be", "being"];

const AUXILIARIES: &[&str] = &[
    "do", "does", "did", "done", "doing", "have", "has", "had", "having", "can", "could", "may",
    "might", "must", "shall", "should", "will", "would",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "us", "we", "you", "he", "him", "she", "her", "it", "they", "them", "my", "your",
    "his", "its", "our", "yours", "their", "theirs", "ours", "mine", "myself", "yourself",
    "itself", "themselves", "what", "who", "whose", "whom", "which", "whatever", "whichever",
    "whoever", "whomever", "that", "this", "these", "those", "there", "somebody", "anybody",
    "everybody", "nobody", "someone", "anyone", "everyone", "something", "anything",
    "everything", "nothing", "all", "an", "other", "another", "any", "both", "each", "either",
    "few", "little", "many", "much", "neither", "none", "some", "such",
];

const ADVERBS: &[&str] = &[
    "not", "no", "so", "too", "very", "also", "just", "only", "then", "than", "here", "now",
    "how", "when", "where", "why", "more", "most", "again", "still",
];

const ARTICLES: &[&str] = &["the"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "to", "from", "into", "onto", "about", "above",
    "below", "over", "under", "after", "before", "between", "through", "during", "without",
    "within", "against", "among", "up", "down", "off", "out", "as", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "if", "because", "while", "although", "though", "unless",
    "whether", "until",
];

const LETTERS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

const NUMBERS: &[&str] = &["one", "two"];

const NAMED: &[&str] = &["github", "markdown"];

// Apostrophes are stripped before classification, so contractions arrive
// glued together ("don't" -> "dont").
const NOISE: &[&str] = &[
    "eg", "ie", "etc", "vs", "ll", "ve", "re", "dont", "doesnt", "didnt", "isnt", "arent",
    "wasnt", "cant", "wont", "im", "ive", "youre", "thats", "lets",
];

/// An immutable stopword table.
///
/// # Examples
///
/// ```
/// use vocab_rs::text::StopwordSet;
///
/// let stopwords = StopwordSet::builtin();
/// assert!(stopwords.is_stopword("the"));
/// assert!(!stopwords.is_stopword("lexicon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StopwordSet {
    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let words = WordClass::ALL
            .into_iter()
            .flat_map(WordClass::words)
            .map(|w| (*w).to_string())
            .collect();
        Self { words }
    }

    /// Creates an empty table (nothing is a stopword).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Creates a table from a custom list.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy with the given words added.
    #[must_use]
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Returns a copy with the given words removed.
    #[must_use]
    pub fn remove<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(word.as_ref());
        }
        self
    }

    /// Applies overrides in the text format read by [`Self::load_overrides`].
    ///
    /// One word per line. Blank lines and text after `#` are ignored. A
    /// leading `!` removes the word instead of adding it. Words are
    /// lower-cased to match tokenizer output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an entry that can never match a token:
    /// a bare `!` or a word containing a space.
    pub fn apply_overrides(self, source: &str) -> Result<Self> {
        let (add, drop) = parse_overrides(source).map_err(|message| Error::Config { message })?;
        Ok(self.extend(add).remove(drop))
    }

    /// Loads the built-in table and applies an overrides file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| IoError::ReadFailed {
            path: path.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
        let (add, drop) = parse_overrides(&source).map_err(|message| Error::Config {
            message: format!("{}: {message}", path.display()),
        })?;
        let set = Self::builtin().extend(add).remove(drop);
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopword overrides");
        Ok(set)
    }

    /// Returns true if `word` is in the table.
    ///
    /// Matching is exact; callers pass tokenizer output, which is already
    /// lower case.
    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Groups the table by word class, in class order.
    ///
    /// Words that are not part of the built-in table are reported under
    /// `None`.
    #[must_use]
    pub fn by_class(&self) -> Vec<(Option<WordClass>, Vec<&str>)> {
        let mut groups: Vec<(Option<WordClass>, BTreeSet<&str>)> = WordClass::ALL
            .into_iter()
            .map(|class| (Some(class), BTreeSet::new()))
            .collect();
        let mut custom = BTreeSet::new();

        for word in &self.words {
            match WordClass::of(word).and_then(|c| WordClass::ALL.iter().position(|&x| x == c)) {
                Some(idx) => {
                    groups[idx].1.insert(word.as_str());
                }
                None => {
                    custom.insert(word.as_str());
                }
            }
        }
        groups.push((None, custom));

        groups
            .into_iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(class, words)| (class, words.into_iter().collect()))
            .collect()
    }
}

/// Splits an overrides file into words to add and words to remove.
fn parse_overrides(source: &str) -> std::result::Result<(Vec<String>, Vec<String>), String> {
    let mut add = Vec::new();
    let mut drop = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }
        let (word, target) = match entry.strip_prefix('!') {
            Some(word) => (word.trim(), &mut drop),
            None => (entry, &mut add),
        };
        if word.is_empty() || word.contains(' ') {
            return Err(format!(
                "line {}: {entry:?} is not a single word",
                idx + 1
            ));
        }
        target.push(word.to_lowercase());
    }

    Ok((add, drop))
}
