//! Executable lookup on the process search path.
//!
//! Delegates to `which`, which walks `PATH` in order (honouring `PATHEXT` on
//! Windows) and only accepts files the current user can execute. No
//! subprocess is spawned.

use crate::traits::ExecutableSearch;
use std::ffi::OsString;
use std::path::PathBuf;

/// Real search-path lookup.
///
/// Reads `PATH` from the environment at lookup time unless constructed with
/// an explicit value.
#[derive(Debug, Default, Clone)]
pub struct RealExecutableSearch {
    path_var: Option<OsString>,
}

impl RealExecutableSearch {
    /// Create a lookup over the process's `PATH`.
    #[must_use]
    pub const fn new() -> Self {
        Self { path_var: None }
    }

    /// Create a lookup over an explicit `PATH`-style value.
    #[must_use]
    pub fn with_path_var(path_var: impl Into<OsString>) -> Self {
        Self { path_var: Some(path_var.into()) }
    }
}

impl ExecutableSearch for RealExecutableSearch {
    fn find(&self, program: &str) -> Option<PathBuf> {
        match &self.path_var {
            Some(path_var) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(program, Some(path_var), cwd).ok()
            }
            None => which::which(program).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn search_over(dirs: &[&Path]) -> RealExecutableSearch {
        RealExecutableSearch::with_path_var(std::env::join_paths(dirs).unwrap())
    }

    #[cfg(unix)]
    #[test]
    fn test_find_single_dir() {
        let dir = TempDir::new().unwrap();
        let exe = make_file(dir.path(), "claude-history", 0o755);

        assert_eq!(search_over(&[dir.path()]).find("claude-history"), Some(exe));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_first_dir_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let exe_first = make_file(first.path(), "claude-history", 0o755);
        make_file(second.path(), "claude-history", 0o755);

        let search = search_over(&[first.path(), second.path()]);
        assert_eq!(search.find("claude-history"), Some(exe_first));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_skips_non_executable() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_file(first.path(), "claude-history", 0o644);
        let exe = make_file(second.path(), "claude-history", 0o700);

        let search = search_over(&[first.path(), second.path()]);
        assert_eq!(search.find("claude-history"), Some(exe));
    }

    #[test]
    fn test_find_skips_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("claude-history")).unwrap();

        assert_eq!(search_over(&[dir.path()]).find("claude-history"), None);
    }

    #[test]
    fn test_find_missing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(search_over(&[dir.path()]).find("claude-history"), None);
    }

    #[test]
    fn test_find_empty_path_var() {
        let search = RealExecutableSearch::with_path_var("");
        assert_eq!(search.find("claude-history"), None);
    }

    #[test]
    fn test_find_nonexistent_dirs() {
        let search = search_over(&[Path::new("/definitely/not/a/real/dir")]);
        assert_eq!(search.find("claude-history"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_search_from_process_env() {
        let search = RealExecutableSearch::new();
        assert!(search.find("sh").is_some());
        assert_eq!(search.find("definitely_not_a_real_command_12345"), None);
    }
}
