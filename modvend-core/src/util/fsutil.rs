use crate::error::{DirRole, Result, VendError};
use std::fs;
use std::path::Path;

/// Precondition check: `path` exists and is a directory.
///
/// Evaluated before any stream is opened.
pub fn expect_dir(path: &Path, role: DirRole) -> Result<()> {
    let meta = fs::metadata(path).map_err(|e| VendError::InvalidDir {
        role,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !meta.is_dir() {
        return Err(VendError::InvalidDir {
            role,
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(expect_dir(dir.path(), DirRole::Input).is_ok());
    }

    #[test]
    fn rejects_missing_path_with_role() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = expect_dir(&missing, DirRole::Output).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("output directory"), "got: {msg}");
        assert!(msg.contains("nope"), "got: {msg}");
    }

    #[test]
    fn rejects_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        let err = expect_dir(&file, DirRole::Input).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("input directory"), "got: {msg}");
        assert!(msg.contains("not a directory"), "got: {msg}");
    }
}
