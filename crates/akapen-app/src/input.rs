//! Reader for pre-tagged documents.
//!
//! One token per line as `surface<TAB>tag1,tag2,...`; a blank line closes
//! the current sentence. Tokenization itself happens upstream.

use std::path::Path;

use akapen_types::{Sentence, TaggedToken};
use anyhow::{Context, bail};

/// Split tagged text into sentences
pub fn parse_tagged(text: &str) -> anyhow::Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut tokens = Vec::new();
    let mut first_line = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;

        if line.trim().is_empty() {
            if !tokens.is_empty() {
                sentences.push(Sentence::from_tokens(first_line, std::mem::take(&mut tokens)));
            }
            continue;
        }

        let Some((surface, tags)) = line.split_once('\t') else {
            bail!("line {line_number}: expected surface<TAB>tags, got {line:?}");
        };
        let tags: Vec<String> = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            bail!("line {line_number}: token {surface:?} has no tags");
        }

        if tokens.is_empty() {
            first_line = line_number;
        }
        tokens.push(TaggedToken {
            surface: surface.to_string(),
            tags,
        });
    }

    if !tokens.is_empty() {
        sentences.push(Sentence::from_tokens(first_line, tokens));
    }

    Ok(sentences)
}

/// Read and parse one document
pub async fn read_document(path: &Path) -> anyhow::Result<Vec<Sentence>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_tagged(&text).with_context(|| format!("invalid tagged input in {}", path.display()))
}
