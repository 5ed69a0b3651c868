/// A contact record accepted for persistence.
///
/// Transient: lives for the duration of one request and is never read back
/// by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub full_name: String,
    /// `None` and `Some("")` both mean "no email" and select the insert form
    /// that omits the email column.
    pub email: Option<String>,
    /// Ordered as submitted; may be empty.
    pub phone_numbers: Vec<String>,
}
