//! Durable persistence
//!
//! Loads and saves the backing file holding the serialized credential store,
//! one `username,password` record per line.

use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::records::Store;

/// Field delimiter separating username from password on each line
///
/// Usernames must never contain this character; passwords may, since loading
/// splits on the first occurrence only.
pub const DELIMITER: char = ',';

/// Owns the backing file location and all load/save logic
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing file into a store
    ///
    /// A missing file is the expected state on first run and yields an empty
    /// store. Blank lines are skipped, as are lines without a delimiter; the
    /// lossy skip is deliberate and must not become a parse error. When the
    /// same username appears on several lines the last occurrence wins.
    pub fn load(&self) -> Result<Store, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "Backing file {} not found, starting with an empty store",
                    self.path.display()
                );
                return Ok(Store::new());
            }
            Err(e) => return Err(StoreError::from(e)),
        };

        let mut store = Store::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(DELIMITER) {
                Some((username, password)) => {
                    store.insert(username.to_string(), password.to_string());
                }
                None => {
                    warn!("Skipping malformed line in {}", self.path.display());
                }
            }
        }

        info!(
            "Loaded {} account(s) from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }

    /// Writes the full store to the backing file, replacing prior contents
    ///
    /// The serialized buffer is written in one call, so a successful return
    /// means the file holds exactly the given store with no stale records.
    /// On failure the in-memory store must be treated as uncommitted.
    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        let mut contents = String::new();
        for record in store.iter() {
            contents.push_str(&record.username);
            contents.push(DELIMITER);
            contents.push_str(&record.password);
            contents.push('\n');
        }

        fs::write(&self.path, contents)?;

        info!(
            "Saved {} account(s) to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("accounts.txt"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let credentials = store_in(&dir);
        let store = credentials.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let credentials = store_in(&dir);

        let mut store = Store::new();
        store.insert("alice".to_string(), "pw1234567890".to_string());
        store.insert("bob".to_string(), " spaced,pass ".to_string());
        credentials.save(&store).unwrap();

        let loaded = credentials.load().unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_blank_and_malformed_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.txt");
        fs::write(&path, "alice,pw1234567890\n\nnodelimiter\n   \nbob,password1234\n").unwrap();

        let store = CredentialStore::new(path).load().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("alice"), Some("pw1234567890"));
        assert_eq!(store.get("bob"), Some("password1234"));
    }

    #[test]
    fn test_duplicate_username_last_occurrence_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.txt");
        fs::write(&path, "bob,firstpass123\nbob,secondpass123\n").unwrap();

        let store = CredentialStore::new(path).load().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("bob"), Some("secondpass123"));
    }

    #[test]
    fn test_save_to_unwritable_target_fails_and_preserves_durable_state() {
        let dir = TempDir::new().unwrap();
        let credentials = store_in(&dir);

        let mut store = Store::new();
        store.insert("alice".to_string(), "pw1234567890".to_string());
        credentials.save(&store).unwrap();

        // A directory as the backing path cannot be written to
        let broken = CredentialStore::new(dir.path());
        store.insert("bob".to_string(), "password1234".to_string());
        let StoreError::IoError(_) = broken.save(&store).unwrap_err();

        // The failed save committed nothing; reloading the real file drops
        // the uncommitted record
        let reloaded = credentials.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains("alice"));
        assert!(!reloaded.contains("bob"));
    }

    #[test]
    fn test_save_overwrites_stale_records() {
        let dir = TempDir::new().unwrap();
        let credentials = store_in(&dir);

        let mut store = Store::new();
        store.insert("alice".to_string(), "pw1234567890".to_string());
        store.insert("bob".to_string(), "password1234".to_string());
        credentials.save(&store).unwrap();

        store.remove("alice");
        credentials.save(&store).unwrap();

        let loaded = credentials.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded.contains("alice"));
    }
}
