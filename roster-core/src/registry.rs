//! Thread-safe in-memory activity registry.
//!
//! Owns the full name-to-activity mapping for the process lifetime. The
//! activity set is fixed at construction; only participant lists mutate.
//! Handlers share a registry behind `Arc`; each operation takes the lock
//! once, so duplicate checks and the mutation they guard are atomic.

use std::sync::RwLock;

use indexmap::IndexMap;

use crate::activity::Activity;
use crate::error::RegistryError;

/// Registry of all activities, keyed by name in seed order.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    entries: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Create a registry holding the given activities.
    #[must_use]
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { entries: RwLock::new(activities) }
    }

    /// Return a full snapshot of the registry, in insertion order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the write lock).
    #[must_use]
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.entries
            .read()
            .expect("activity registry read lock poisoned")
            .clone()
    }

    /// Append `email` to the named activity's participant list.
    ///
    /// # Errors
    /// Returns [`RegistryError::ActivityNotFound`] if `name` is not a
    /// registry key, or [`RegistryError::AlreadySignedUp`] if `email` is
    /// already on the list.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut entries = self
            .entries
            .write()
            .expect("activity registry write lock poisoned");

        let activity = entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound { name: name.to_owned() })?;

        if activity.is_signed_up(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }
        activity.participants.push(email.to_owned());
        Ok(())
    }

    /// Remove `email` from the named activity's participant list,
    /// preserving the order of the remaining entries.
    ///
    /// # Errors
    /// Returns [`RegistryError::ActivityNotFound`] if `name` is not a
    /// registry key, or [`RegistryError::NotSignedUp`] if `email` is not
    /// on the list.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut entries = self
            .entries
            .write()
            .expect("activity registry write lock poisoned");

        let activity = entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound { name: name.to_owned() })?;

        let position = activity.participants.iter().position(|p| p == email).ok_or_else(|| {
            RegistryError::NotSignedUp {
                activity: name.to_owned(),
                email: email.to_owned(),
            }
        })?;
        activity.participants.remove(position);
        Ok(())
    }
}
