//! Detects the same particle (助詞) used twice or more in one sentence.
//!
//! Repeated case particles usually mean a clause was rewritten halfway,
//! e.g. 「会議で私は東京で発表した」. Particles listed in the `list`
//! attribute (and any skip-list dictionaries merged into it) are ignored.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use akapen_core::{Finding, KeyValueMap, Validator, ValidatorAttributes};
use akapen_types::{LanguageCode, Sentence};

use crate::LANGUAGE_CODE;

/// Tag class counted by the validator
pub const MARKER_TAG: &str = "助詞";

/// Set-valued attribute holding particles never reported
pub const SKIP_LIST_ATTRIBUTE: &str = "list";

pub const NAME: &str = "DoubledJoshi";

#[derive(Debug, Clone, Default)]
pub struct DoubledJoshiValidator {
    /// Optional surface -> particle kind map used in messages
    particle_kinds: Option<Arc<KeyValueMap>>,
}

impl DoubledJoshiValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_particle_kinds(particle_kinds: Arc<KeyValueMap>) -> Self {
        Self {
            particle_kinds: Some(particle_kinds),
        }
    }

    /// Particles occurring at least twice in `sentence`, in order of first
    /// occurrence, minus `exclusions`
    pub fn find_doubled<'s>(
        &self,
        sentence: &'s Sentence,
        exclusions: &HashSet<String>,
    ) -> Vec<Finding<'s>> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for token in &sentence.tokens {
            if token.primary_tag() != Some(MARKER_TAG) {
                continue;
            }
            match positions.entry(token.surface.as_str()) {
                Entry::Occupied(e) => counts[*e.get()].1 += 1,
                Entry::Vacant(e) => {
                    e.insert(counts.len());
                    counts.push((token.surface.as_str(), 1));
                }
            }
        }

        counts
            .into_iter()
            .filter(|(surface, count)| *count >= 2 && !exclusions.contains(*surface))
            .map(|(surface, count)| Finding {
                validator: NAME.to_string(),
                subject: surface.to_string(),
                message: self.message(surface, count),
                sentence,
            })
            .collect()
    }

    fn message(&self, surface: &str, count: usize) -> String {
        match self.particle_kinds.as_ref().and_then(|kinds| kinds.get(surface)) {
            Some(kind) => format!("Particle \"{surface}\" ({kind}) is used {count} times in one sentence"),
            None => format!("Particle \"{surface}\" is used {count} times in one sentence"),
        }
    }
}

impl Validator for DoubledJoshiValidator {
    fn name(&self) -> &str {
        NAME
    }

    fn supported_languages(&self) -> HashSet<LanguageCode> {
        HashSet::from([LANGUAGE_CODE.to_string()])
    }

    fn validate<'s>(
        &self,
        sentence: &'s Sentence,
        attributes: &ValidatorAttributes,
    ) -> Vec<Finding<'s>> {
        match attributes.get_set(SKIP_LIST_ATTRIBUTE) {
            Some(skip) => self.find_doubled(sentence, skip),
            None => self.find_doubled(sentence, &HashSet::new()),
        }
    }
}
