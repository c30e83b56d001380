use std::path::Path;

use crate::error::{Error, Result};

/// Ensures the destination directory is empty before the run touches anything.
///
/// A directory that does not exist yet counts as empty.
pub fn ensure_empty_dir<P: AsRef<Path>>(dest: P) -> Result<()> {
    let dest = dest.as_ref();
    if dest.exists() && std::fs::read_dir(dest)?.next().is_some() {
        return Err(Error::DestinationNotEmptyError {
            destination: dest.display().to_string(),
        });
    }
    Ok(())
}

/// Removes a file, treating absence as success.
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    match std::fs::remove_file(path.as_ref()) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_passes_precondition() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_empty_dir(dir.path()).is_ok());
    }

    #[test]
    fn missing_directory_passes_precondition() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_empty_dir(dir.path().join("not-there")).is_ok());
    }

    #[test]
    fn non_empty_directory_fails_precondition() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("leftover"), "x").unwrap();
        let err = ensure_empty_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DestinationNotEmptyError { .. }));
    }

    #[test]
    fn removing_a_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_file_if_exists(dir.path().join("absent")).is_ok());
    }

    #[test]
    fn removes_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stale.xml");
        std::fs::write(&file, "x").unwrap();
        remove_file_if_exists(&file).unwrap();
        assert!(!file.exists());
    }
}
