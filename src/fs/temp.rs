//! Kept temporary files.
//!
//! # Implementation Strategy
//!
//! 1. Create a uniquely named file in the target directory with
//!    `tempfile::Builder` (exclusive create, random name)
//! 2. Write the content and sync it to disk
//! 3. Keep the file so it is not deleted when the handle drops
//!
//! If writing fails before step 3 the `NamedTempFile` is dropped and
//! removes itself, so a failed run never leaves a partial file behind.

use crate::error::{RenderError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Naming of a kept temporary file: `{prefix}{random}{suffix}`.
#[derive(Debug, Clone, Copy)]
pub struct TempFileSpec<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Write `content` to a new uniquely named file in `dir` and keep it.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(RenderError::Io)` - Creating, writing, syncing, or keeping failed
pub fn write_kept_temp_file(dir: &Path, spec: TempFileSpec<'_>, content: &[u8]) -> Result<PathBuf> {
    let mut file = Builder::new()
        .prefix(spec.prefix)
        .suffix(spec.suffix)
        .tempfile_in(dir)
        .map_err(|e| {
            RenderError::Io(format!(
                "failed to create temporary file in '{}': {}",
                dir.display(),
                e
            ))
        })?;

    write_and_sync(&mut file, content)?;

    let (_, path) = file.keep().map_err(|e| {
        RenderError::Io(format!(
            "failed to keep temporary file '{}': {}",
            e.file.path().display(),
            e.error
        ))
    })?;

    Ok(path)
}

fn write_and_sync(file: &mut NamedTempFile, content: &[u8]) -> Result<()> {
    file.write_all(content).map_err(|e| {
        RenderError::Io(format!(
            "failed to write to temporary file '{}': {}",
            file.path().display(),
            e
        ))
    })?;

    file.as_file().sync_all().map_err(|e| {
        RenderError::Io(format!(
            "failed to sync temporary file '{}' to disk: {}",
            file.path().display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SPEC: TempFileSpec<'static> = TempFileSpec {
        prefix: "task-definition-",
        suffix: ".json",
    };

    #[test]
    fn test_write_creates_named_file_in_dir() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_kept_temp_file(temp_dir.path(), SPEC, b"{}").unwrap();

        assert_eq!(path.parent().unwrap(), temp_dir.path());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("task-definition-"));
        assert!(name.ends_with(".json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_file_is_kept_after_return() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_kept_temp_file(temp_dir.path(), SPEC, b"kept").unwrap();

        // NamedTempFile would have deleted the file on drop if it was not kept
        assert!(path.exists());
    }

    #[test]
    fn test_each_call_gets_a_unique_path() {
        let temp_dir = TempDir::new().unwrap();

        let first = write_kept_temp_file(temp_dir.path(), SPEC, b"1").unwrap();
        let second = write_kept_temp_file(temp_dir.path(), SPEC, b"2").unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap(), "1");
        assert_eq!(fs::read_to_string(&second).unwrap(), "2");
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = write_kept_temp_file(&missing, SPEC, b"{}").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_large_content() {
        let temp_dir = TempDir::new().unwrap();
        let content: Vec<u8> = (0..1024 * 1024).map(|i| (i % 256) as u8).collect();

        let path = write_kept_temp_file(temp_dir.path(), SPEC, &content).unwrap();

        assert_eq!(fs::read(&path).unwrap(), content);
    }
}
