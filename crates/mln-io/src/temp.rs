//! Temp-file provisioning with best-effort removal at process exit.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use mln_core::{Error, Result};
use tempfile::Builder;

/// Minimum accepted length of a temp-file name prefix.
const MIN_PREFIX_LEN: usize = 3;

/// Suffix used when the caller passes `None`.
const DEFAULT_SUFFIX: &str = ".tmp";

/// Paths scheduled for removal when the process exits.
static EXIT_PATHS: OnceLock<Mutex<Vec<PathBuf>>> = OnceLock::new();

extern "C" fn remove_registered_paths() {
    if let Some(lock) = EXIT_PATHS.get() {
        if let Ok(paths) = lock.lock() {
            for path in paths.iter() {
                // Best effort: the file may already be gone.
                let _ = fs::remove_file(path);
            }
        }
    }
}

fn register_for_removal(path: &Path) {
    let lock = EXIT_PATHS.get_or_init(|| {
        // Install the exit hook exactly once per process.
        unsafe {
            libc::atexit(remove_registered_paths);
        }
        Mutex::new(Vec::new())
    });
    if let Ok(mut paths) = lock.lock() {
        paths.push(path.to_path_buf());
    }
}

/// Create an empty, uniquely named file in the OS temp directory.
///
/// The file name is `<prefix><random><suffix>`; `suffix` defaults to `.tmp`.
/// The created file is registered for best-effort removal when the process
/// terminates.
///
/// # Errors
///
/// [`Error::Validation`] if `prefix` has fewer than three characters,
/// [`Error::Io`] if the file cannot be created.
pub fn create_temp_file(prefix: &str, suffix: Option<&str>) -> Result<PathBuf> {
    if prefix.chars().count() < MIN_PREFIX_LEN {
        return Err(Error::Validation(format!(
            "temp-file prefix must be at least {} characters, got {:?}",
            MIN_PREFIX_LEN, prefix
        )));
    }
    let file = Builder::new()
        .prefix(prefix)
        .suffix(suffix.unwrap_or(DEFAULT_SUFFIX))
        .tempfile()?;
    let (_, path) = file.keep().map_err(|e| Error::Io(e.error))?;
    register_for_removal(&path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_empty_file() {
        let path = create_temp_file("mlnkit-test", None).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_name_uses_prefix_and_default_suffix() {
        let path = create_temp_file("mlnkit-test", None).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("mlnkit-test"), "name={}", name);
        assert!(name.ends_with(".tmp"), "name={}", name);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_custom_suffix() {
        let path = create_temp_file("mlnkit-test", Some(".mln")).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with(".mln"), "name={}", name);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unique_names() {
        let a = create_temp_file("mlnkit-test", None).unwrap();
        let b = create_temp_file("mlnkit-test", None).unwrap();
        assert_ne!(a, b);
        let _ = fs::remove_file(&a);
        let _ = fs::remove_file(&b);
    }

    #[test]
    fn test_short_prefix_is_rejected() {
        assert!(matches!(
            create_temp_file("ab", None),
            Err(Error::Validation(_))
        ));
        // No filesystem work happens for a rejected prefix.
        assert!(matches!(create_temp_file("", None), Err(Error::Validation(_))));
    }
}
