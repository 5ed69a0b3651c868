use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::NewContact;
use crate::domain::phone::is_valid_australian_phone_number;
use crate::domain::repo::ContactsRepository;

/// Validates contact records and hands accepted ones to the repository.
pub struct ContactService {
    repo: Arc<dyn ContactsRepository>,
}

impl ContactService {
    #[must_use]
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self { repo }
    }

    /// Validate `contact` and persist it.
    ///
    /// Rejection is all-or-nothing: the first invalid phone number fails the
    /// whole record and no insert is attempted.
    ///
    /// # Errors
    ///
    /// [`DomainError::Validation`] for an empty name,
    /// [`DomainError::InvalidPhoneNumber`] if any entry fails the format
    /// check, [`DomainError::Storage`] if the insert fails.
    #[instrument(skip(self, contact), fields(phone_count = contact.phone_numbers.len()))]
    pub async fn save_contact(&self, contact: NewContact) -> Result<(), DomainError> {
        if contact.full_name.is_empty() {
            return Err(DomainError::Validation {
                field: "full_name",
                message: "must not be empty",
            });
        }

        debug!("validating phone numbers");
        if !contact
            .phone_numbers
            .iter()
            .all(|p| is_valid_australian_phone_number(p))
        {
            return Err(DomainError::InvalidPhoneNumber);
        }

        self.repo
            .insert(&contact)
            .await
            .map_err(DomainError::storage)?;

        info!("contact saved");
        Ok(())
    }
}
