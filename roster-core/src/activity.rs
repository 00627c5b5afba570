use serde::{Deserialize, Serialize};

/// An extracurricular offering that students join and leave by email.
///
/// Activities are keyed by name in the registry; the name itself is an
/// opaque string and lives outside this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Short free-text description of the activity.
    pub description: String,
    /// Free-text meeting schedule (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Advisory capacity. Stored and reported, never enforced on signup.
    pub max_participants: u32,
    /// Signed-up student emails, insertion order, each at most once.
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty participant list.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replace the participant list, keeping the given order.
    #[must_use]
    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    /// Return `true` if `email` is already signed up.
    #[must_use]
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_activity_starts_empty() {
        let activity = Activity::new("Chess strategy", "Fridays", 12);
        assert!(activity.participants.is_empty(), "new activity must have no participants");
        assert_eq!(activity.max_participants, 12);
    }

    #[test]
    fn with_participants_preserves_order() {
        let activity = Activity::new("Chess strategy", "Fridays", 12)
            .with_participants(vec!["a@example.com".to_owned(), "b@example.com".to_owned()]);
        assert_eq!(activity.participants, ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn is_signed_up_matches_exact_email() {
        let activity = Activity::new("Chess strategy", "Fridays", 12)
            .with_participants(vec!["a@example.com".to_owned()]);
        assert!(activity.is_signed_up("a@example.com"));
        assert!(!activity.is_signed_up("A@example.com"), "emails are opaque, no case folding");
        assert!(!activity.is_signed_up("b@example.com"));
    }
}
