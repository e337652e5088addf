//! Configuration for the file cache.

use std::path::PathBuf;

/// Wrap-time configuration for a [`FileCache`](crate::FileCache).
///
/// Immutable once the cache is constructed.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Base directory for cache entries.
    ///
    /// When `None`, the platform cache directory is used
    /// (e.g. `~/.cache/anycache` on Linux).
    pub cache_dir: Option<PathBuf>,

    /// Optional dotted namespace (e.g. `"project.module"`), mapped to nested
    /// subdirectories under the base directory. Missing segments are created.
    pub namespace: Option<String>,

    /// Whether the wrapped callable is a bound method, in which case the
    /// first positional argument (the receiver) is excluded from key
    /// derivation.
    pub is_method: bool,
}

impl CacheConfig {
    /// Creates a configuration rooted at `dir`.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Sets the dotted namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Marks the wrapped callable as a bound method.
    #[must_use]
    pub fn method(mut self) -> Self {
        self.is_method = true;
        self
    }
}
