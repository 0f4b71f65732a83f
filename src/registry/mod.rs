//! In-memory account registry.
//!
//! An insertion-ordered collection of account identifiers, most recently
//! inserted first. Uniqueness is a caller policy: `insert` prepends
//! unconditionally, and callers gate on `exists` to keep the roster
//! duplicate-free.

use std::collections::VecDeque;
use std::fmt;

/// A student account identifier.
///
/// Construction does not validate: well-formedness is a policy enforced
/// through the `validate` module before an identifier reaches the registry.
/// Comparison is exact sequence equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Create an identifier from raw input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Result of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalResult {
    /// The registry had no elements at call time.
    EmptyRegistry,
    /// No element matched the identifier.
    NotFound,
    /// The first matching element was spliced out.
    Removed,
}

/// Result of a non-mutating search.
///
/// An empty registry takes precedence over not-found: searching an empty
/// registry never reports `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// The registry had no elements at call time.
    EmptyRegistry,
    /// No element matched the identifier.
    NotFound,
    /// Some element matched the identifier.
    Found,
}

/// Insertion-ordered registry of account identifiers.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: VecDeque<AccountId>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts in the registry.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Whether some element equals `id`. O(n).
    pub fn exists(&self, id: &AccountId) -> bool {
        self.accounts.iter().any(|account| account == id)
    }

    /// Prepend `id` as the new most-recent element.
    ///
    /// Duplicates are not rejected here; callers check `exists` first.
    pub fn insert(&mut self, id: AccountId) {
        self.accounts.push_front(id);
    }

    /// Remove the first element equal to `id`, preserving the order of the
    /// remaining elements. O(n).
    pub fn remove(&mut self, id: &AccountId) -> RemovalResult {
        if self.accounts.is_empty() {
            return RemovalResult::EmptyRegistry;
        }

        match self.accounts.iter().position(|account| account == id) {
            Some(index) => {
                self.accounts.remove(index);
                RemovalResult::Removed
            }
            None => RemovalResult::NotFound,
        }
    }

    /// Search for `id` without mutating; stops at the first match. O(n).
    pub fn find(&self, id: &AccountId) -> SearchResult {
        if self.accounts.is_empty() {
            return SearchResult::EmptyRegistry;
        }

        if self.exists(id) {
            SearchResult::Found
        } else {
            SearchResult::NotFound
        }
    }

    /// Iterate over accounts from most- to least-recently-inserted.
    pub fn iter(&self) -> impl Iterator<Item = &AccountId> {
        self.accounts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn insert_then_exists() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        assert!(registry.exists(&AccountId::from("abc")));
        assert!(!registry.exists(&AccountId::from("abd")));
    }

    #[test]
    fn exists_on_empty_registry_is_false() {
        let registry = Registry::new();
        assert!(!registry.exists(&AccountId::from("abc")));
    }

    #[test]
    fn exists_compares_exact_sequences() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("Abc"));
        assert!(!registry.exists(&AccountId::from("abc")));
        assert!(!registry.exists(&AccountId::from("Ab")));
        assert!(registry.exists(&AccountId::from("Abc")));
    }

    #[test]
    fn enumeration_is_most_recent_first() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        registry.insert(AccountId::from("xyz"));

        let accounts: Vec<&str> = registry.iter().map(AccountId::as_str).collect();
        assert_eq!(accounts, vec!["xyz", "abc"]);
    }

    #[test]
    fn enumeration_is_restartable() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));

        assert_eq!(registry.iter().count(), 1);
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn remove_on_empty_registry() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.remove(&AccountId::from("abc")),
            RemovalResult::EmptyRegistry
        );
    }

    #[test]
    fn remove_missing_account() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        assert_eq!(
            registry.remove(&AccountId::from("xyz")),
            RemovalResult::NotFound
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_then_exists_is_false() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        assert_eq!(
            registry.remove(&AccountId::from("abc")),
            RemovalResult::Removed
        );
        assert!(!registry.exists(&AccountId::from("abc")));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("a1"));
        registry.insert(AccountId::from("b2"));
        registry.insert(AccountId::from("c3"));

        assert_eq!(
            registry.remove(&AccountId::from("b2")),
            RemovalResult::Removed
        );
        let accounts: Vec<&str> = registry.iter().map(AccountId::as_str).collect();
        assert_eq!(accounts, vec!["c3", "a1"]);
    }

    #[test]
    fn remove_splices_only_first_match() {
        // Duplicates are possible when callers bypass the exists check.
        let mut registry = Registry::new();
        registry.insert(AccountId::from("dup"));
        registry.insert(AccountId::from("dup"));

        assert_eq!(
            registry.remove(&AccountId::from("dup")),
            RemovalResult::Removed
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.exists(&AccountId::from("dup")));
    }

    #[test]
    fn find_on_empty_registry_takes_precedence_over_not_found() {
        let registry = Registry::new();
        assert_eq!(
            registry.find(&AccountId::from("a1")),
            SearchResult::EmptyRegistry
        );
    }

    #[test]
    fn find_missing_account() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        assert_eq!(
            registry.find(&AccountId::from("xyz")),
            SearchResult::NotFound
        );
    }

    #[test]
    fn find_existing_account() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        assert_eq!(registry.find(&AccountId::from("abc")), SearchResult::Found);
    }

    #[test]
    fn find_does_not_mutate() {
        let mut registry = Registry::new();
        registry.insert(AccountId::from("abc"));
        registry.find(&AccountId::from("abc"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn account_id_display_matches_contents() {
        let id = AccountId::from("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }
}
