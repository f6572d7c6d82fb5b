//! Memoized dictionary loading.
//!
//! A [`DictionaryLoader`] owns one [`LineParser`] and a cache of everything
//! it has parsed. Each resource location is parsed at most once; callers
//! racing on the same location wait for the first load instead of starting
//! their own, while loads of other locations proceed in parallel.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use akapen_types::ResourceSource;
use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::error::{DictionaryError, LoadError};
use crate::parser::{self, KeyValueMap, LineParser, WordList};
use crate::resolver::{BundledResources, DefaultResolver, ResourceResolver};

type CacheKey = (ResourceSource, String);

/// Loads dictionaries of type `E` and caches them by resource location
pub struct DictionaryLoader<E> {
    parser: LineParser<E>,
    resolver: Arc<dyn ResourceResolver>,
    cache: DashMap<CacheKey, Arc<OnceCell<Arc<E>>>>,
}

impl<E> DictionaryLoader<E>
where
    E: Send + Sync,
{
    pub fn new(parser: LineParser<E>, resolver: Arc<dyn ResourceResolver>) -> Self {
        Self {
            parser,
            resolver,
            cache: DashMap::new(),
        }
    }

    /// Parse an arbitrary reader, bypassing the cache
    pub fn load<R: Read>(&self, reader: R) -> Result<E, LoadError> {
        parser::load(reader, &self.parser)
    }

    /// Parse a file on disk, bypassing the cache
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<E, LoadError> {
        let path = path.as_ref();
        tracing::debug!("Loading dictionary from file: {}", path.display());
        let file = std::fs::File::open(path)?;
        self.load(file)
    }

    fn load_from_resource(&self, path: &str, source: ResourceSource) -> Result<E, LoadError> {
        let stream = self.resolver.open(path, source)?;
        parser::load(stream, &self.parser)
    }

    /// Cached dictionary for a bundled resource, loading it on first use
    pub fn get_or_load(&self, path: &str, name: &str) -> Result<Arc<E>, DictionaryError> {
        self.get_or_load_from(path, ResourceSource::Bundled, name)
    }

    /// Cached dictionary for `path` in `source`, loading it on first use.
    ///
    /// Failures are not cached: the next call for the same path tries again.
    pub fn get_or_load_from(
        &self,
        path: &str,
        source: ResourceSource,
        name: &str,
    ) -> Result<Arc<E>, DictionaryError> {
        let cell = Arc::clone(&*self.cache.entry((source, path.to_string())).or_default());

        let dictionary = cell
            .get_or_try_init(|| -> Result<Arc<E>, LoadError> {
                let dictionary = self.load_from_resource(path, source).map_err(|e| {
                    tracing::error!(path, %source, "Failed to read {name}: {e}");
                    e
                })?;
                tracing::info!(path, %source, "Succeeded to load {name}");
                Ok(Arc::new(dictionary))
            })
            .map_err(|source| DictionaryError::LoadFailure {
                name: name.to_string(),
                path: path.to_string(),
                source,
            })?;

        Ok(Arc::clone(dictionary))
    }

    /// Whether `path` has been loaded successfully
    pub fn is_cached(&self, path: &str, source: ResourceSource) -> bool {
        self.cache
            .get(&(source, path.to_string()))
            .is_some_and(|cell| cell.value().get().is_some())
    }

    /// Number of successfully loaded dictionaries
    pub fn cached_count(&self) -> usize {
        self.cache
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }
}

/// The standard dictionary loaders sharing one resolver
pub struct Dictionaries {
    pub key_value: DictionaryLoader<KeyValueMap>,
    pub word: DictionaryLoader<WordList>,
    pub word_lowercase: DictionaryLoader<WordList>,
}

impl Dictionaries {
    pub fn new(resolver: Arc<dyn ResourceResolver>) -> Self {
        Self {
            key_value: DictionaryLoader::new(LineParser::key_value(), Arc::clone(&resolver)),
            word: DictionaryLoader::new(LineParser::word(), Arc::clone(&resolver)),
            word_lowercase: DictionaryLoader::new(LineParser::word_lowercase(), resolver),
        }
    }

    /// Loaders backed by a [`DefaultResolver`] over `bundled`
    pub fn with_bundled(bundled: BundledResources) -> Self {
        Self::new(Arc::new(DefaultResolver::new(bundled)))
    }
}
