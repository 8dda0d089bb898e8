use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Display form of the empty set / empty language
pub const EMPTY_SET: &str = "∅";

/// Display form of the empty word
pub const EPSILON: &str = "ε";

/// A finite set of string tokens
///
/// Tokens are kept in a `BTreeSet`, so iteration and display follow the
/// lexicographic order of the tokens regardless of insertion order. The empty
/// word is a valid token and sorts first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set(BTreeSet<String>);

/// A language is a set of words
pub type Language = Set;

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// The language `{ε}`: the identity for language concatenation
    pub fn epsilon() -> Self {
        Self::singleton("")
    }

    pub fn singleton(token: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(token);
        set
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Returns true iff the token was not present yet
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.0.insert(token.into())
    }

    /// Iterates the tokens in sorted order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_subset(&self, other: &Set) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn as_btree_set(&self) -> &BTreeSet<String> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeSet<String> {
        self.0
    }
}

impl From<BTreeSet<String>> for Set {
    fn from(tokens: BTreeSet<String>) -> Self {
        Self(tokens)
    }
}

impl<const N: usize> From<[&str; N]> for Set {
    fn from(tokens: [&str; N]) -> Self {
        tokens.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Set {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Set {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Set {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders the set in canonical roster notation, see [`format_set`]
impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_SET);
        }

        write!(f, "{{")?;
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", format_word(token))?;
        }
        write!(f, "}}")
    }
}

impl FromStr for Set {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_set(s))
    }
}

/// Parse a comma separated token list into a set
///
/// The text is trimmed and one enclosing `{`/`}` pair is removed if present.
/// Pieces are trimmed and empty pieces are dropped, so any text is accepted.
///
/// This goes beyond plain token semantics in two places: a bare `ε` token is
/// read as the empty word (not the one-symbol word `ε`), and the text `∅` on
/// its own is the empty set. Both make rendered sets parse back to the same
/// value; a literal `ε` or `∅` symbol cannot be entered as a word.
pub fn parse_set(text: &str) -> Set {
    let trimmed = text.trim();
    if trimmed == EMPTY_SET {
        return Set::new();
    }
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(parse_word)
        .collect()
}

/// Render a set: `∅` when empty, otherwise `{a, b, …}` in sorted order
pub fn format_set(set: &Set) -> String {
    set.to_string()
}

/// Read a word from raw text. Only the literal `ε` is special: it is the empty
/// word, so `word_length(&parse_word("ε"))` is 0.
pub fn parse_word(text: &str) -> String {
    if text == EPSILON {
        String::new()
    } else {
        text.to_string()
    }
}

/// Render a word, showing the empty word as `ε`
pub fn format_word(word: &str) -> String {
    if word.is_empty() {
        EPSILON.to_string()
    } else {
        word.to_string()
    }
}
