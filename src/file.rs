//! Filesystem collaborators: default path resolution and blocking file I/O.
//!
//! All reads and writes are synchronous with no retry; failures map into
//! [`ConfrcError::Io`] carrying the offending path so the caller of `parse`
//! sees exactly what could not be touched.

use std::path::{Path, PathBuf};

use crate::error::ConfrcError;

/// The conventional config file location for `program`: `~/.{program}rc`
/// when a home directory resolves, else `./.{program}rc`.
pub fn default_config_path(program: &str) -> PathBuf {
    let file_name = format!(".{program}rc");
    match directories::UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Base name of the invoking executable, for registry naming and the default
/// config path.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "app".to_string())
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn read_to_string(path: &Path) -> Result<String, ConfrcError> {
    std::fs::read_to_string(path).map_err(|source| ConfrcError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write(path: &Path, content: &str) -> Result<(), ConfrcError> {
    std::fs::write(path, content).map_err(|source| ConfrcError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_uses_rc_convention() {
        let path = default_config_path("myapp");
        assert!(path.to_string_lossy().ends_with(".myapprc"));
    }

    #[test]
    fn program_name_is_nonempty() {
        assert!(!program_name().is_empty());
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".apprc");
        assert!(!exists(&path));

        write(&path, "species=gopher\n").unwrap();
        assert!(exists(&path));
        assert_eq!(read_to_string(&path).unwrap(), "species=gopher\n");
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope");
        let err = read_to_string(&path).unwrap_err();
        assert!(matches!(err, ConfrcError::Io { path: p, .. } if p == path));
    }
}
