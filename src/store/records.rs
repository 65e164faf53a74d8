//! Record and store types
//!
//! In-memory representation of the credential directory.

/// A single credential record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub username: String,
    pub password: String,
}

/// The full in-memory set of records for one session
///
/// Behaves like a map keyed by username but keeps insertion order, so every
/// save writes records in a stable order. Lookups scan linearly; the store is
/// small enough that this never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored password for `username` if present
    pub fn get(&self, username: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.username == username)
            .map(|r| r.password.as_str())
    }

    /// Returns whether a record exists for `username`
    pub fn contains(&self, username: &str) -> bool {
        self.records.iter().any(|r| r.username == username)
    }

    /// Inserts or overwrites the record for `username`
    ///
    /// Overwriting keeps the record's original position.
    pub fn insert(&mut self, username: String, password: String) {
        match self.records.iter_mut().find(|r| r.username == username) {
            Some(record) => record.password = password,
            None => self.records.push(Record { username, password }),
        }
    }

    /// Removes and returns the record for `username` if present
    pub fn remove(&mut self, username: &str) -> Option<Record> {
        let index = self.records.iter().position(|r| r.username == username)?;
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = Store::new();
        store.insert("alice".to_string(), "secret".to_string());
        assert_eq!(store.get("alice"), Some("secret"));
        assert_eq!(store.get("bob"), None);
        assert!(store.contains("alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut store = Store::new();
        store.insert("alice".to_string(), "first".to_string());
        store.insert("bob".to_string(), "second".to_string());
        store.insert("alice".to_string(), "third".to_string());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("alice"), Some("third"));

        let order: Vec<&str> = store.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(order, vec!["alice", "bob"]);
    }

    #[test]
    fn test_remove() {
        let mut store = Store::new();
        store.insert("alice".to_string(), "secret".to_string());
        let removed = store.remove("alice").unwrap();
        assert_eq!(removed.password, "secret");
        assert!(store.is_empty());
        assert!(store.remove("alice").is_none());
    }
}
