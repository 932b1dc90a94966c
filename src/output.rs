//! Atomic replacement of the generated file.

use crate::core::error::{GenError, GenResult};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Write `text` to `destination`, replacing any existing file.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over the destination, so a failed run never leaves a truncated
/// artifact behind. An existing destination keeps its permissions; a new
/// one gets the usual `0o666` minus umask instead of the owner-only mode of
/// a temporary file.
pub fn write_atomic(destination: &Path, text: &str) -> GenResult<()> {
    let io_err = |source: std::io::Error| GenError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(io_err)?;
    if let Ok(existing) = fs::metadata(destination) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(destination).map_err(|e| io_err(e.error))?;

    log::debug!("Wrote {} bytes to {}", text.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.S");

        write_atomic(&path, "first\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        write_atomic(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.S");

        match write_atomic(&path, "x") {
            Err(GenError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_permissions_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.S");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_uses_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        // A plain create gets 0o666 minus the process umask.
        let reference = dir.path().join("reference");
        fs::File::create(&reference).unwrap();
        let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

        let path = dir.path().join("fresh.S");
        write_atomic(&path, "x\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }
}
