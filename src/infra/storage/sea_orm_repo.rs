use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::model::NewContact;
use crate::domain::repo::ContactsRepository;

use super::entity::Entity as ContactsEntity;
use super::mapper;

/// `SeaORM`-backed repository over the long-lived connection opened at
/// startup. Pooling is the driver's concern.
pub struct SeaOrmContactsRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactsRepository for SeaOrmContactsRepository {
    async fn insert(&self, contact: &NewContact) -> anyhow::Result<()> {
        let row = mapper::to_active_model(contact);
        ContactsEntity::insert(row).exec(&self.db).await?;
        Ok(())
    }
}
