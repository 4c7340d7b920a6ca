//! In-memory service → credential map.
//!
//! `VaultRepository` is the only owner of `CredentialEntry` values. It
//! knows nothing about encryption; `codec` turns it into bytes through
//! the canonical exchange form (a JSON object of `{user, pass}` entries).

use std::collections::BTreeMap;

use crate::errors::{Result, VaultError};

use super::entry::CredentialEntry;

/// The decrypted vault: service name → credential.
///
/// Service names are case-sensitive. Iteration order is sorted by name,
/// which is also the order written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultRepository {
    entries: BTreeMap<String, CredentialEntry>,
}

impl VaultRepository {
    /// An empty vault, as created on first unlock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `service`.
    pub fn add(&mut self, service: &str, username: &str, secret: &str) {
        self.entries
            .insert(service.to_string(), CredentialEntry::new(username, secret));
    }

    pub fn get(&self, service: &str) -> Option<&CredentialEntry> {
        self.entries.get(service)
    }

    /// Update the supplied fields of an existing entry.
    ///
    /// `None` leaves a field alone, and so does `Some("")`: an entry's
    /// username or secret is never blanked through this call. Returns
    /// `false` when `service` has no entry.
    pub fn modify(
        &mut self,
        service: &str,
        new_username: Option<&str>,
        new_secret: Option<&str>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(service) else {
            return false;
        };

        if let Some(username) = new_username.filter(|u| !u.is_empty()) {
            entry.username = username.to_string();
        }
        if let Some(secret) = new_secret.filter(|s| !s.is_empty()) {
            entry.secret = secret.to_string();
        }
        true
    }

    /// Remove the entry for `service`. Returns `false` if there was none.
    pub fn delete(&mut self, service: &str) -> bool {
        self.entries.remove(service).is_some()
    }

    /// Service names in iteration order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterate over `(service, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CredentialEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, service: &str) -> bool {
        self.entries.contains_key(service)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------
    // Canonical exchange form
    // ------------------------------------------------------------------

    /// Serialize to the exchange form: `{"<service>": {"user": .., "pass": ..}}`.
    pub fn to_exchange_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries)
            .map_err(|e| VaultError::Serialization(format!("vault entries: {e}")))
    }

    /// Parse the exchange form.
    ///
    /// Anything other than an object of `{user, pass}` string pairs is a
    /// `VaultError::Schema`.
    pub fn from_exchange_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, CredentialEntry> =
            serde_json::from_str(json).map_err(|e| VaultError::Schema(e.to_string()))?;
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VaultRepository {
        let mut repo = VaultRepository::new();
        repo.add("github", "alice", "x1y2");
        repo.add("mail", "alice@example.com", "hunter2");
        repo
    }

    #[test]
    fn add_then_get() {
        let repo = sample();
        assert_eq!(
            repo.get("github"),
            Some(&CredentialEntry::new("alice", "x1y2"))
        );
        assert_eq!(repo.get("GitHub"), None);
    }

    #[test]
    fn add_overwrites_existing_entry() {
        let mut repo = sample();
        repo.add("github", "bob", "new");
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get("github"), Some(&CredentialEntry::new("bob", "new")));
    }

    #[test]
    fn delete_after_add_leaves_nothing() {
        let mut repo = VaultRepository::new();
        repo.add("svc", "u", "p");
        assert!(repo.delete("svc"));
        assert_eq!(repo.get("svc"), None);
        assert!(!repo.delete("svc"));
        assert!(repo.is_empty());
    }

    #[test]
    fn modify_absent_service_changes_nothing() {
        let mut repo = sample();
        let before = repo.clone();
        assert!(!repo.modify("nope", Some("x"), Some("y")));
        assert_eq!(repo, before);
    }

    #[test]
    fn modify_without_fields_is_a_no_op() {
        let mut repo = sample();
        let before = repo.clone();
        assert!(repo.modify("github", None, None));
        assert_eq!(repo, before);
    }

    #[test]
    fn modify_updates_only_supplied_fields() {
        let mut repo = sample();
        assert!(repo.modify("github", None, Some("rotated")));
        assert_eq!(
            repo.get("github"),
            Some(&CredentialEntry::new("alice", "rotated"))
        );

        assert!(repo.modify("github", Some("carol"), None));
        assert_eq!(
            repo.get("github"),
            Some(&CredentialEntry::new("carol", "rotated"))
        );
    }

    #[test]
    fn modify_treats_empty_strings_as_unchanged() {
        let mut repo = sample();
        assert!(repo.modify("github", Some(""), Some("")));
        assert_eq!(
            repo.get("github"),
            Some(&CredentialEntry::new("alice", "x1y2"))
        );
    }

    #[test]
    fn list_returns_every_service() {
        let repo = sample();
        assert_eq!(repo.list(), vec!["github", "mail"]);
    }

    #[test]
    fn exchange_form_uses_user_and_pass_keys() {
        let mut repo = VaultRepository::new();
        repo.add("github", "alice", "x1y2");
        assert_eq!(
            repo.to_exchange_json().unwrap(),
            r#"{"github":{"user":"alice","pass":"x1y2"}}"#
        );
    }

    #[test]
    fn exchange_form_roundtrip() {
        let repo = sample();
        let json = repo.to_exchange_json().unwrap();
        assert_eq!(VaultRepository::from_exchange_json(&json).unwrap(), repo);
    }

    #[test]
    fn empty_object_is_an_empty_vault() {
        let repo = VaultRepository::from_exchange_json("{}").unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn wrong_shapes_are_schema_errors() {
        for bad in [
            "[]",
            "\"text\"",
            "not json",
            r#"{"github":"alice"}"#,
            r#"{"github":{"user":"alice"}}"#,
            r#"{"github":{"user":1,"pass":"x"}}"#,
        ] {
            let err = VaultRepository::from_exchange_json(bad).unwrap_err();
            assert!(matches!(err, VaultError::Schema(_)), "{bad} should be rejected");
        }
    }
}
