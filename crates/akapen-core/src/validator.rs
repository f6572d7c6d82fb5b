use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use akapen_config::validator::ValidatorConfig;
use akapen_types::{LanguageCode, Sentence};

/// Sentence-level rule run by the host for each sentence of a document
pub trait Validator: Send + Sync {
    /// Name used in config and in findings
    fn name(&self) -> &str;

    /// Languages this rule applies to, empty means every language
    fn supported_languages(&self) -> HashSet<LanguageCode>;

    /// Check one sentence
    fn validate<'s>(&self, sentence: &'s Sentence, attributes: &ValidatorAttributes)
    -> Vec<Finding<'s>>;

    fn supports(&self, language: &str) -> bool {
        let languages = self.supported_languages();
        languages.is_empty() || languages.contains(language)
    }
}

/// A problem found in a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding<'s> {
    pub validator: String,
    /// Offending text, e.g. the repeated token surface
    pub subject: String,
    pub message: String,
    pub sentence: &'s Sentence,
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}] {}",
            self.sentence.line_number, self.validator, self.message
        )
    }
}

/// Typed view over a validator's configured attributes
#[derive(Debug, Clone, Default)]
pub struct ValidatorAttributes {
    values: BTreeMap<String, String>,
    sets: HashMap<String, HashSet<String>>,
}

impl ValidatorAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        config
            .attributes
            .iter()
            .fold(Self::new(), |attrs, (k, v)| attrs.with(k.clone(), v.clone()))
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        self.sets.insert(key.clone(), parse_set(&value));
        self.values.insert(key, value);
        self
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_str(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_str(key).and_then(|v| v.trim().parse().ok())
    }

    /// Set-valued attribute, written as a comma-separated list
    pub fn get_set(&self, key: &str) -> Option<&HashSet<String>> {
        self.sets.get(key)
    }

    /// Add members to a set-valued attribute, creating it if absent
    pub fn extend_set<I, S>(&mut self, key: &str, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets
            .entry(key.to_string())
            .or_default()
            .extend(members.into_iter().map(Into::into));
    }
}

fn parse_set(value: &str) -> HashSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use akapen_types::TaggedToken;

    use super::*;

    struct AnyLanguage;

    impl Validator for AnyLanguage {
        fn name(&self) -> &str {
            "AnyLanguage"
        }

        fn supported_languages(&self) -> HashSet<LanguageCode> {
            HashSet::new()
        }

        fn validate<'s>(
            &self,
            sentence: &'s Sentence,
            _attributes: &ValidatorAttributes,
        ) -> Vec<Finding<'s>> {
            vec![Finding {
                validator: self.name().to_string(),
                subject: sentence.content.clone(),
                message: "always".to_string(),
                sentence,
            }]
        }
    }

    #[test]
    fn test_empty_language_set_supports_all() {
        assert!(AnyLanguage.supports("ja"));
        assert!(AnyLanguage.supports("en"));
    }

    #[test]
    fn test_finding_display() {
        let sentence = Sentence::from_tokens(3, vec![TaggedToken::new("猫", &["名詞"])]);
        let findings = AnyLanguage.validate(&sentence, &ValidatorAttributes::new());
        assert_eq!(findings[0].to_string(), "3: [AnyLanguage] always");
    }

    #[test]
    fn test_typed_accessors() {
        let attrs = ValidatorAttributes::new()
            .with("max", " 5 ")
            .with("strict", "true")
            .with("list", "と, や,,か ");

        assert_eq!(attrs.get_int("max"), Some(5));
        assert_eq!(attrs.get_bool("strict"), Some(true));
        assert_eq!(attrs.get_bool("max"), None);
        assert_eq!(attrs.get_str("missing"), None);

        let list = attrs.get_set("list").unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("や"));
        assert!(list.contains("か"));
    }

    #[test]
    fn test_from_config_and_extend() {
        let config = ValidatorConfig::doubled_joshi().with_attribute("list", "と");
        let mut attrs = ValidatorAttributes::from_config(&config);
        attrs.extend_set("list", ["や"]);
        attrs.extend_set("other", vec![String::from("x")]);

        let list = attrs.get_set("list").unwrap();
        assert!(list.contains("と"));
        assert!(list.contains("や"));
        assert!(attrs.get_set("other").unwrap().contains("x"));
    }
}
