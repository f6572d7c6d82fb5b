use std::collections::BTreeMap;

use akapen_types::ResourceSource;
use serde::{Deserialize, Serialize};

/// A dictionary resource referenced from config
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub path: String,
    #[serde(default)]
    pub source: ResourceSource,
}

impl ResourceRef {
    pub fn bundled(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: ResourceSource::Bundled,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: ResourceSource::FileSystem,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ValidatorConfig {
    pub name: String,
    /// Raw attribute values; set-valued attributes are comma separated
    pub attributes: BTreeMap<String, String>,
    /// Word lists merged into the validator's "list" attribute
    pub skip_lists: Vec<ResourceRef>,
}

impl ValidatorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn doubled_joshi() -> Self {
        Self::new("DoubledJoshi")
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_skip_list(mut self, resource: ResourceRef) -> Self {
        self.skip_lists.push(resource);
        self
    }
}
