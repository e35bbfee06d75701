//! Environment isolation utilities for testing
//!
//! Tests that read or write `MADLIB_*` variables must not run concurrently,
//! so they serialise on [`ENV_LOCK`].

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables that change how madlib picks its template
const MADLIB_VARS: [&str; 2] = ["MADLIB_VARIANT", "MADLIB_FILE"];

/// Run a test with an isolated HOME and no `MADLIB_*` variables set
///
/// The closure receives the fake HOME directory. The previous environment is
/// restored afterwards.
///
/// # Examples
///
/// ```no_run
/// use madlib_testkit::with_isolated_madlib_env;
///
/// with_isolated_madlib_env(|home| {
///     assert!(std::env::var("MADLIB_VARIANT").is_err());
///     assert!(home.exists());
/// });
/// ```
pub fn with_isolated_madlib_env<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original_home = std::env::var("HOME").ok();
    let originals: Vec<(&str, Option<String>)> = MADLIB_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let fake_home = TempDir::new().expect("Failed to create fake HOME");

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        std::env::set_var("HOME", fake_home.path());
        for name in MADLIB_VARS {
            std::env::remove_var(name);
        }
    }

    let result = f(fake_home.path());

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
        for (name, value) in originals {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_env_clears_madlib_vars() {
        with_isolated_madlib_env(|home| {
            assert!(home.exists());
            for name in MADLIB_VARS {
                assert!(std::env::var(name).is_err(), "{name} should be unset");
            }
            assert_eq!(std::env::var("HOME").unwrap(), home.to_string_lossy());
        });
    }
}
