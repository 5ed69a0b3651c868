//! Conversion from the domain model to the `SeaORM` active model.

use sea_orm::ActiveValue;

use crate::domain::model::NewContact;

use super::entity;

/// Separator for the denormalized phone list column.
pub const PHONE_SEPARATOR: &str = ",";

/// Build the row to insert for an accepted contact.
///
/// An absent or empty email leaves the column `NotSet`, so the generated
/// INSERT binds two columns instead of three; an empty string is never
/// stored in its place.
#[must_use]
pub fn to_active_model(contact: &NewContact) -> entity::ActiveModel {
    let email = match contact.email.as_deref() {
        Some(e) if !e.is_empty() => ActiveValue::Set(Some(e.to_owned())),
        _ => ActiveValue::NotSet,
    };

    entity::ActiveModel {
        id: ActiveValue::NotSet,
        full_name: ActiveValue::Set(contact.full_name.clone()),
        email,
        phone_numbers: ActiveValue::Set(contact.phone_numbers.join(PHONE_SEPARATOR)),
    }
}
