//! The fixed, read-only user table every lookup runs against.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::secret::Secret;

/// Account role shown in the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Administrator account
    Admin,
    /// Regular account
    User,
    /// Guest account
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
            Role::Guest => write!(f, "guest"),
        }
    }
}

/// A single user row.
///
/// Records compare equal when their identifiers match; the identifier is the
/// unique key of a [`RecordStore`].
#[derive(Debug)]
pub struct Record {
    identifier: String,
    secret: Secret,
    role: Role,
    contact: String,
}

impl Record {
    /// Creates a record.
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret: Secret::new(secret),
            role,
            contact: contact.into(),
        }
    }

    /// The unique username.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The password, redacted unless explicitly exposed.
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The account role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The contact email.
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Record {}

/// Immutable, ordered collection of [`Record`]s.
///
/// There are no mutating operations; once built, the store is a snapshot that
/// every evaluation reads by reference.
///
/// # Examples
///
/// ```
/// use injection_lab::RecordStore;
///
/// let store = RecordStore::fixed();
/// assert_eq!(store.list()[0].identifier(), "admin");
/// assert!(store.find("alice", "password123").is_some());
/// ```
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Builds a store from custom records.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateRecord`] if two records share an identifier.
    pub fn new(records: Vec<Record>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.identifier()) {
                return Err(Error::new(
                    ErrorKind::DuplicateRecord {
                        identifier: record.identifier().to_string(),
                    },
                    "record identifiers must be unique",
                ));
            }
        }
        Ok(Self { records })
    }

    /// The built-in classroom dataset.
    pub fn fixed() -> Self {
        Self {
            records: vec![
                Record::new("admin", "admin123", Role::Admin, "admin@example.com"),
                Record::new("alice", "password123", Role::User, "alice@example.com"),
                Record::new("bob", "qwerty", Role::User, "bob@example.com"),
                Record::new("guest", "guest", Role::Guest, "guest@example.com"),
            ],
        }
    }

    /// All records in their fixed order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Iterates the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Finds the record whose identifier and secret both match exactly.
    pub fn find(&self, identifier: &str, secret: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.identifier == identifier && r.secret.matches(secret))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::fixed()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_store_order_is_stable() {
        let ids: Vec<_> = RecordStore::fixed()
            .iter()
            .map(|r| r.identifier().to_string())
            .collect();

        assert_eq!(ids, vec!["admin", "alice", "bob", "guest"]);
        assert_eq!(
            ids,
            RecordStore::default()
                .iter()
                .map(|r| r.identifier().to_string())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn find_requires_both_fields() {
        let store = RecordStore::fixed();

        assert!(store.find("bob", "qwerty").is_some());
        assert!(store.find("bob", "QWERTY").is_none());
        assert!(store.find("Bob", "qwerty").is_none());
        assert!(store.find("bob", "admin123").is_none());
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let result = RecordStore::new(vec![
            Record::new("carol", "a", Role::User, "c@example.com"),
            Record::new("carol", "b", Role::Guest, "c2@example.com"),
        ]);

        let err = result.unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::DuplicateRecord {
                identifier: "carol".to_string()
            }
        );
    }

    #[test]
    fn empty_custom_store_is_allowed() {
        let store = RecordStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn record_debug_redacts_secret() {
        let store = RecordStore::fixed();
        let debug_output = format!("{:?}", store.list()[0]);

        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("admin123"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn records_compare_by_identifier() {
        let a = Record::new("dave", "x", Role::User, "d@example.com");
        let b = Record::new("dave", "y", Role::Admin, "other@example.com");
        assert_eq!(a, b);
    }
}
