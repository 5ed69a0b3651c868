use async_trait::async_trait;

use crate::domain::model::NewContact;

/// Persistence seam for accepted contacts.
///
/// Implementations receive only records that already passed validation.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Insert one contact row. A single statement, no transaction wrapping.
    async fn insert(&self, contact: &NewContact) -> anyhow::Result<()>;
}
