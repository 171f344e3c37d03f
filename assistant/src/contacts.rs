use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};
use thiserror::Error;

/// An emergency contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact {0} must not be empty")]
    Empty(&'static str),
    #[error("failed to persist contacts: {0}")]
    Persist(#[from] std::io::Error),
}

/// Emergency contacts persisted as a single JSON blob. The full list is
/// the unit of persistence: read-all on load, write-all on every
/// mutation.
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Load the persisted list. An absent blob yields an empty list; a
    /// corrupt one is logged and also yields an empty list, never a
    /// failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let contacts = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(contacts) => contacts,
                Err(error) => {
                    tracing::warn!(
                        %error,
                        path = %path.display(),
                        "contact list unreadable, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, contacts }
    }

    /// Load from the per-user config directory.
    #[must_use]
    pub fn open_default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::load(base.join("haven").join("contacts.json"))
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Append a contact under a freshly generated id and persist the full
    /// updated list.
    pub fn add(&mut self, name: &str, phone: &str) -> Result<(), ContactError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(ContactError::Empty("name"));
        }
        if phone.is_empty() {
            return Err(ContactError::Empty("phone"));
        }

        self.contacts.push(Contact {
            id: next_id(),
            name: name.to_string(),
            phone: phone.to_string(),
        });
        self.persist()?;
        Ok(())
    }

    /// Filter a contact out by id and persist the full updated list.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, ContactError> {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        let removed = self.contacts.len() != before;
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.contacts)?;
        fs::write(&self.path, raw)
    }
}

/// Timestamp-derived id with a tie-break counter, so two contacts added
/// within the same millisecond still get distinct ids.
fn next_id() -> String {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{sequence}", Utc::now().timestamp_millis())
}
