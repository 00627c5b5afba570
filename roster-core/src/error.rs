/// Errors produced by registry operations.
///
/// Display strings double as the human-readable `detail` text the HTTP
/// surface returns, so their wording is part of the API contract.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The named activity is not a key in the registry.
    #[error("Activity not found")]
    ActivityNotFound {
        /// The activity name that failed the lookup.
        name: String,
    },

    /// Signup for an activity the student already belongs to.
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp {
        /// The activity the duplicate signup targeted.
        activity: String,
        /// The email already present in the participant list.
        email: String,
    },

    /// Unregister for an activity the student does not belong to.
    #[error("Student is not signed up for this activity")]
    NotSignedUp {
        /// The activity the unregister targeted.
        activity: String,
        /// The email absent from the participant list.
        email: String,
    },
}
