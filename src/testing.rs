//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit tests.

#![allow(dead_code)]

use crate::config::FallbackConfig;
use crate::error::{Error, Result};
use crate::traits::{ConfigSource, ExecutableSearch};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A mock search-path lookup for testing.
///
/// Programs are unavailable unless registered with [`Self::set_found`].
#[derive(Debug, Default)]
pub struct MockExecutableSearch {
    programs: HashMap<String, PathBuf>,
}

impl MockExecutableSearch {
    /// Create a new mock with no programs available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a program resolve to the given path.
    pub fn set_found(&mut self, program: &str, path: impl Into<PathBuf>) {
        self.programs.insert(program.to_string(), path.into());
    }
}

impl ExecutableSearch for MockExecutableSearch {
    fn find(&self, program: &str) -> Option<PathBuf> {
        self.programs.get(program).cloned()
    }
}

/// A mock config source that returns a fixed config.
///
/// Records how many times it was asked to load.
#[derive(Debug, Default)]
pub struct MockConfigSource {
    config: Option<FallbackConfig>,
    loads: Cell<usize>,
}

impl MockConfigSource {
    /// Create a mock returning `config` (`None` means "no file").
    #[must_use]
    pub fn new(config: Option<FallbackConfig>) -> Self {
        Self { config, loads: Cell::new(0) }
    }

    /// Number of times [`ConfigSource::load`] was called.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl ConfigSource for MockConfigSource {
    fn load(&self, _base_dir: &Path) -> Result<Option<FallbackConfig>> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.config.clone())
    }
}

/// A config source that always fails, simulating an unavailable parser.
#[derive(Debug, Default)]
pub struct FailingConfigSource {
    error_message: String,
}

impl FailingConfigSource {
    /// Create a new failing config source with the specified error message.
    #[must_use]
    pub fn new(error_message: impl Into<String>) -> Self {
        Self { error_message: error_message.into() }
    }
}

impl ConfigSource for FailingConfigSource {
    fn load(&self, _base_dir: &Path) -> Result<Option<FallbackConfig>> {
        Err(Error::ParserUnavailable(self.error_message.clone()))
    }
}
