use thiserror::Error;

/// Failures a contact record can hit on its way to storage.
///
/// Every variant is terminal for the request: there is no retry, no partial
/// acceptance, and nothing is persisted on any failure path.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field deserialized but is empty.
    #[error("{field} {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// At least one submitted phone number failed the Australian format
    /// check. Deliberately does not carry the offending value.
    #[error("Invalid Australian phone number")]
    InvalidPhoneNumber,

    /// The storage layer rejected or failed the insert.
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

impl DomainError {
    pub fn storage(e: impl Into<anyhow::Error>) -> Self {
        Self::Storage(e.into())
    }
}
