//! Core traits for testability and abstraction.

use crate::config::FallbackConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Trait for probing the executable search path.
///
/// This trait abstracts `PATH` lookup so the resolver can be tested without
/// touching the real environment.
pub trait ExecutableSearch {
    /// Find a program by bare name on the search path.
    ///
    /// Returns the path of the first matching executable, or `None`.
    fn find(&self, program: &str) -> Option<PathBuf>;
}

/// Trait for loading the optional fallback configuration.
///
/// This is the single "parse optional config" capability. The production
/// implementation reads YAML; tests substitute mocks, including one that
/// behaves as if no parser were available.
pub trait ConfigSource {
    /// Load the fallback configuration relative to `base_dir`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no configuration file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self, base_dir: &Path) -> Result<Option<FallbackConfig>>;
}
