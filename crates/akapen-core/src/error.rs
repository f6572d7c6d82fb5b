use std::io;

/// Failure to open or read a single resource
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failure surfaced by the dictionary cache
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to load {name}: {path}")]
    LoadFailure {
        name: String,
        path: String,
        #[source]
        source: LoadError,
    },
}

impl DictionaryError {
    pub fn path(&self) -> &str {
        match self {
            DictionaryError::LoadFailure { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DictionaryError::LoadFailure {
                source: LoadError::ResourceNotFound(_),
                ..
            }
        )
    }
}
