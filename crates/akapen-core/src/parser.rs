//! Line-oriented parsing of dictionary resources.
//!
//! A [`LineParser`] pairs a constructor for an empty dictionary with a fold
//! that adds one line to it. [`load`] drives any parser over a reader, so
//! every dictionary format shares the same I/O path.

use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read};

use crate::error::LoadError;

/// Word list dictionary
pub type WordList = HashSet<String>;

/// Key-value dictionary
pub type KeyValueMap = HashMap<String, String>;

/// How one line of a resource is folded into a dictionary of type `E`
pub struct LineParser<E> {
    init: fn() -> E,
    fold: fn(&mut E, &str),
}

impl<E> Clone for LineParser<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for LineParser<E> {}

impl<E> LineParser<E> {
    pub const fn new(init: fn() -> E, fold: fn(&mut E, &str)) -> Self {
        Self { init, fold }
    }

    /// Fresh, empty dictionary
    pub fn empty(&self) -> E {
        (self.init)()
    }

    /// Fold a single line into `dictionary`
    pub fn apply(&self, dictionary: &mut E, line: &str) {
        (self.fold)(dictionary, line)
    }
}

impl LineParser<KeyValueMap> {
    /// `key\tvalue` per line, later keys overwrite earlier ones
    pub const fn key_value() -> Self {
        Self::new(KeyValueMap::new, fold_key_value)
    }
}

impl LineParser<WordList> {
    /// One word per line, kept verbatim
    pub const fn word() -> Self {
        Self::new(WordList::new, fold_word)
    }

    /// One word per line, lowercased
    pub const fn word_lowercase() -> Self {
        Self::new(WordList::new, fold_word_lowercase)
    }
}

fn fold_key_value(map: &mut KeyValueMap, line: &str) {
    let fields: Vec<&str> = line.split('\t').collect();
    if let [key, value] = fields[..] {
        map.insert(key.to_string(), value.to_string());
    } else {
        tracing::error!(line, fields = fields.len(), "Skipping malformed key-value line");
    }
}

fn fold_word(set: &mut WordList, line: &str) {
    set.insert(line.to_string());
}

fn fold_word_lowercase(set: &mut WordList, line: &str) {
    // Unicode default casing, no locale-specific rules
    set.insert(line.to_lowercase());
}

/// Read `reader` as UTF-8 lines and fold each one, in order, with `parser`.
///
/// The reader is consumed and dropped before this returns, whether the
/// load succeeds or fails.
pub fn load<E, R: Read>(reader: R, parser: &LineParser<E>) -> Result<E, LoadError> {
    let mut dictionary = parser.empty();
    let mut count = 0usize;

    for line in BufReader::new(reader).lines() {
        let line = line?;
        parser.apply(&mut dictionary, &line);
        count += 1;
    }

    tracing::debug!(lines = count, "Read dictionary resource");
    Ok(dictionary)
}
