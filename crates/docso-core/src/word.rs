// Typed word tokens produced by number spellers.
//
// A speller emits a sequence of words tagged with their role in the number
// instead of a flat string. Post-processing passes (filler insertion,
// linking words) inspect roles, never rendered text.

use std::fmt;

// ---------------------------------------------------------------------------
// WordRole
// ---------------------------------------------------------------------------

/// Role of a single word inside a spelled number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRole {
    /// Plain digit word ("hai", "chín").
    Digit,
    /// Phonetically reduced digit used only in trailing position ("lăm", "mốt").
    ReducedDigit,
    /// Irregular word for a tens place of one ("mười").
    Ten,
    /// Marker following a tens digit of two or more ("mươi").
    TensMarker,
    /// Hundred unit name ("trăm").
    Hundred,
    /// Name of a power-of-one-thousand tier.
    /// `power` is the exponent of 1000 (1 = thousand, 2 = million, ...).
    Tier { power: u8 },
    /// Linking word placed before a lone unit digit ("linh").
    Filler,
    /// One of the two words spelling an empty hundreds place ("không trăm").
    EmptyHundreds,
}

impl WordRole {
    /// Whether this role names a tier (thousand, million, ...).
    pub fn is_tier(self) -> bool {
        matches!(self, WordRole::Tier { .. })
    }
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// A single word of a spelled number.
///
/// Word texts always come from static lexicon tables, so a `Word` is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    /// The rendered text of this word.
    pub text: &'static str,

    /// What this word stands for in the number.
    pub role: WordRole,
}

impl Word {
    /// Create a new word.
    pub const fn new(text: &'static str, role: WordRole) -> Self {
        Self { text, role }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

// ---------------------------------------------------------------------------
// WordSequence
// ---------------------------------------------------------------------------

/// Ordered sequence of words making up one spelled number.
///
/// Rendering joins word texts with single spaces, so the output never has
/// leading, trailing or doubled whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<Word>,
}

impl WordSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Append a word.
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Append all words of another sequence.
    pub fn append(&mut self, mut other: WordSequence) {
        self.words.append(&mut other.words);
    }

    /// Insert `words` so that the first of them lands at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn splice_at(&mut self, index: usize, words: &[Word]) {
        self.words.splice(index..index, words.iter().copied());
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sequence holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The last word, if any.
    pub fn last(&self) -> Option<&Word> {
        self.words.last()
    }

    /// The words as a slice.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Iterate over the words.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Index of the last tier-name word, if the sequence contains one.
    pub fn last_tier_position(&self) -> Option<usize> {
        self.words.iter().rposition(|w| w.role.is_tier())
    }

    /// Consume the sequence, returning the underlying words.
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Render the sequence as space-separated text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * 6);
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word.text);
        }
        out
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Vec<Word>> for WordSequence {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Word> for WordSequence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for WordSequence {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
