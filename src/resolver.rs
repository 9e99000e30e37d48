//! Layered resolution of the claude-history CLI.
//!
//! Resolution order, first success wins:
//!
//! 1. The executable search path. A package-manager install is
//!    authoritative, so this beats any configuration file.
//! 2. The `cli.path` field of `.sc/history/config.yml`, accepted only if the
//!    referenced path exists on disk.
//!
//! Every failure inside the fallback step (missing file, parse error,
//! missing field, stale path) collapses to [`Resolution::NotFound`]. The
//! detailed [`ResolutionReport`] keeps the sub-cause for the debug log only.

use crate::config::FallbackConfig;
use crate::error::Result;
use crate::paths;
use crate::traits::{ConfigSource, ExecutableSearch};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the executable the gate looks for.
pub const TOOL_NAME: &str = "claude-history";

/// Outcome of resolving the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The CLI was found at this path.
    Found(PathBuf),
    /// The CLI is not available.
    NotFound,
}

impl Resolution {
    /// Check if the CLI was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The resolved path, if found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Which resolution layer produced the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Found on the executable search path.
    SearchPath,
    /// Found via `cli.path` in the fallback configuration.
    FallbackConfig,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchPath => write!(f, "search-path"),
            Self::FallbackConfig => write!(f, "fallback-config"),
        }
    }
}

/// Why the fallback configuration did not yield a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackMiss {
    /// No configuration file exists.
    NoConfigFile,
    /// The file exists but could not be read or parsed.
    Unparseable(String),
    /// The file parsed but has no `cli.path`.
    NoCliPath,
    /// `cli.path` names a path that does not exist.
    MissingTarget(PathBuf),
}

impl fmt::Display for FallbackMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigFile => write!(f, "no fallback config file"),
            Self::Unparseable(reason) => write!(f, "fallback config unparseable: {reason}"),
            Self::NoCliPath => write!(f, "fallback config has no cli.path"),
            Self::MissingTarget(path) => {
                write!(f, "configured cli.path does not exist: {}", path.display())
            }
        }
    }
}

/// Detailed outcome of a resolution, including sub-causes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionReport {
    /// The CLI was found.
    Found {
        /// Resolved path.
        path: PathBuf,
        /// Layer that produced it.
        source: ResolutionSource,
    },
    /// The CLI was not found on the search path nor via the fallback.
    NotFound(FallbackMiss),
}

impl ResolutionReport {
    /// Collapse to the caller-facing [`Resolution`].
    #[must_use]
    pub fn into_resolution(self) -> Resolution {
        match self {
            Self::Found { path, .. } => Resolution::Found(path),
            Self::NotFound(_) => Resolution::NotFound,
        }
    }
}

/// Resolves the CLI from injected search and config capabilities.
pub struct Resolver<'a> {
    search: &'a dyn ExecutableSearch,
    config: &'a dyn ConfigSource,
    base_dir: PathBuf,
}

impl<'a> Resolver<'a> {
    /// Create a resolver that reads the fallback config relative to `base_dir`.
    pub fn new(
        search: &'a dyn ExecutableSearch,
        config: &'a dyn ConfigSource,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { search, config, base_dir: base_dir.into() }
    }

    /// Resolve the CLI.
    pub fn resolve(&self) -> Resolution {
        self.resolve_detailed().into_resolution()
    }

    /// Resolve the CLI, keeping the layer or miss reason.
    ///
    /// The fallback config is only loaded when the search path misses.
    pub fn resolve_detailed(&self) -> ResolutionReport {
        if let Some(path) = self.search.find(TOOL_NAME) {
            return ResolutionReport::Found { path, source: ResolutionSource::SearchPath };
        }

        self.report_from_config(&self.config.load(&self.base_dir))
    }

    /// Resolve the CLI and keep the loaded fallback config alongside.
    ///
    /// The config is loaded exactly once, even on a search-path hit, so
    /// callers can read its other settings without parsing the file again.
    pub fn evaluate(&self) -> Evaluation {
        let search_hit = self.search.find(TOOL_NAME);
        let loaded = self.config.load(&self.base_dir);

        let report = match search_hit {
            Some(path) => ResolutionReport::Found { path, source: ResolutionSource::SearchPath },
            None => self.report_from_config(&loaded),
        };

        Evaluation { report, config: loaded.ok().flatten() }
    }

    fn report_from_config(&self, loaded: &Result<Option<FallbackConfig>>) -> ResolutionReport {
        match self.resolve_from_config(loaded) {
            Ok(path) => ResolutionReport::Found { path, source: ResolutionSource::FallbackConfig },
            Err(miss) => ResolutionReport::NotFound(miss),
        }
    }

    fn resolve_from_config(
        &self,
        loaded: &Result<Option<FallbackConfig>>,
    ) -> std::result::Result<PathBuf, FallbackMiss> {
        let config = match loaded {
            Ok(Some(config)) => config,
            Ok(None) => return Err(FallbackMiss::NoConfigFile),
            Err(e) => return Err(FallbackMiss::Unparseable(e.to_string())),
        };

        let raw = config.cli_path().ok_or(FallbackMiss::NoCliPath)?;
        let path = paths::resolve_configured_path(&self.base_dir, raw);

        // Unlike the search path, a configured path is not trusted blindly.
        if path.exists() {
            Ok(path)
        } else {
            Err(FallbackMiss::MissingTarget(path))
        }
    }
}

/// A resolution together with the fallback config it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Detailed resolution outcome.
    pub report: ResolutionReport,
    /// The fallback config, when present and parseable.
    pub config: Option<FallbackConfig>,
}

impl Evaluation {
    /// Whether the fallback config turns on the event log.
    pub fn debug_logging(&self) -> bool {
        self.config.as_ref().is_some_and(|config| config.debug_logging)
    }
}
