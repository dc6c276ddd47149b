//! Durable copy of the bearer token.
//!
//! The token is the only client-side persisted state; it lives in a single
//! file under `~/.dusksky/` unless a test or caller picks another path.

use std::io;
use std::path::PathBuf;

/// File-backed token storage.
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Storage at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default storage location: `~/.dusksky/token`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".dusksky").join("token"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Persist the token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Read the stored token, if any.
    pub fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim().to_string();
                Ok(if token.is_empty() { None } else { Some(token) })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Remove the stored token. Removing an absent token is not an error.
    pub fn remove(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("token"));
        storage.save("a.b.c").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("token"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("nested").join("token"));
        storage.save("tok").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("tok"));
    }

    #[test]
    fn remove_clears_token() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("token"));
        storage.save("tok").unwrap();
        storage.remove().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn remove_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("token"));
        storage.remove().unwrap();
    }

    #[test]
    fn whitespace_only_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path().join("token"));
        std::fs::write(storage.path(), "\n").unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
