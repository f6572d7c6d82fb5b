use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 639-1 code ("ja", "en", ...)
pub type LanguageCode = String;

/// Where a logical resource path is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSource {
    /// Data files compiled into the binary
    #[default]
    Bundled,
    /// Plain path on the local filesystem
    #[serde(alias = "file")]
    FileSystem,
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::Bundled => write!(f, "bundled"),
            ResourceSource::FileSystem => write!(f, "file"),
        }
    }
}

/// A token as produced by an external tokenizer/tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub surface: String,
    /// Part-of-speech tags, most general first
    pub tags: Vec<String>,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            surface: surface.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// First tag, the grammatical class of the token
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Raw sentence text
    pub content: String,
    /// 1-based line in the source document
    pub line_number: usize,
    pub tokens: Vec<TaggedToken>,
}

impl Sentence {
    pub fn new(content: impl Into<String>, line_number: usize, tokens: Vec<TaggedToken>) -> Self {
        Self {
            content: content.into(),
            line_number,
            tokens,
        }
    }

    /// Build a sentence whose text is the concatenation of its token surfaces
    pub fn from_tokens(line_number: usize, tokens: Vec<TaggedToken>) -> Self {
        let content = tokens.iter().map(|t| t.surface.as_str()).collect();
        Self {
            content,
            line_number,
            tokens,
        }
    }
}
