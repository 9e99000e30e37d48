//! # `claude_history_gate`
//!
//! A pre-tool-use hook that checks the claude-history CLI is installed,
//! either on the search path or via `.sc/history/config.yml`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod hook_logging;
pub mod hooks;
pub mod paths;
pub mod resolver;
pub mod search_path;
pub mod templates;
pub mod testing;
pub mod traits;

pub use config::{FallbackConfig, YamlConfigSource};
pub use resolver::{Resolution, Resolver, TOOL_NAME};
pub use search_path::RealExecutableSearch;
pub use traits::{ConfigSource, ExecutableSearch};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
