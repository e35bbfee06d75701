//! Test utilities for madlib
//!
//! This crate provides shared testing utilities used across the madlib workspace.

pub mod env;
pub mod fixtures;

pub use env::{ENV_LOCK, with_isolated_madlib_env};
pub use fixtures::{write_answers, write_fixture};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the crate root
///
/// All test temporary files end up in a single gitignored location that is
/// easy to clean up by hand.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use madlib_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("story.toml");
/// std::fs::write(&file_path, "").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_creates_in_tmp() {
        let temp = temp_dir_in_workspace();
        let path = temp.path();

        assert!(path.exists());
        assert!(
            path.to_string_lossy().contains(".tmp"),
            "Path should contain .tmp: {}",
            path.display()
        );
    }

    #[test]
    fn test_temp_dir_cleanup_on_drop() {
        let path = {
            let temp = temp_dir_in_workspace();
            let path = temp.path().to_path_buf();
            std::fs::write(path.join("story.toml"), "").unwrap();
            path
        };

        assert!(!path.exists(), "Temp directory should be removed on drop");
    }
}
