use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use akapen_types::ResourceSource;

use crate::error::LoadError;

/// Readable handle to a resource, closed on drop
pub type ResourceStream = Box<dyn Read + Send>;

/// Locate and open resources by logical path
pub trait ResourceResolver: Send + Sync {
    /// Open `path` in the given namespace
    fn open(&self, path: &str, source: ResourceSource) -> Result<ResourceStream, LoadError>;
}

/// Data files compiled into the binary, addressed by logical path
#[derive(Debug, Clone, Default)]
pub struct BundledResources {
    entries: HashMap<String, &'static [u8]>,
}

impl BundledResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource
    pub fn register(&mut self, path: impl Into<String>, data: &'static [u8]) {
        self.entries.insert(path.into(), data);
    }

    pub fn with(mut self, path: impl Into<String>, data: &'static [u8]) -> Self {
        self.register(path, data);
        self
    }

    /// Take every resource from `other`, overriding same paths
    pub fn merge(mut self, other: BundledResources) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Registered paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

/// Resolves bundled paths against a [`BundledResources`] set and
/// filesystem paths with a plain `File::open`
#[derive(Debug, Clone, Default)]
pub struct DefaultResolver {
    bundled: BundledResources,
}

impl DefaultResolver {
    pub fn new(bundled: BundledResources) -> Self {
        Self { bundled }
    }

    pub fn bundled(&self) -> &BundledResources {
        &self.bundled
    }
}

impl ResourceResolver for DefaultResolver {
    fn open(&self, path: &str, source: ResourceSource) -> Result<ResourceStream, LoadError> {
        match source {
            ResourceSource::Bundled => self
                .bundled
                .get(path)
                .map(|data| Box::new(data) as ResourceStream)
                .ok_or_else(|| LoadError::ResourceNotFound(path.to_string())),
            ResourceSource::FileSystem => Ok(Box::new(File::open(path)?)),
        }
    }
}
