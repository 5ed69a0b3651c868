use serde::{Deserialize, Serialize};

use crate::domain::model::NewContact;

/// Request body for `POST /contacts`.
///
/// `full_name` and `phone_numbers` are required fields; a body that omits
/// either fails extraction and is rejected with the binding error message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_numbers: Vec<String>,
}

impl From<CreateContactRequest> for NewContact {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            phone_numbers: req.phone_numbers,
        }
    }
}

/// Fixed acknowledgement payload: `{"status": "Contact saved"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const CONTACT_SAVED: Self = Self {
        status: "Contact saved",
    };

    pub const OK: Self = Self { status: "ok" };
}

/// Error payload: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
