mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use reminder::ReminderClient;
pub use reminder_service_domain::{APPOINTMENT_FORMAT, ID};
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use reminder_service_api_structs::dtos::ReminderDTO as Reminder;

/// Reminder Service SDK
///
/// The SDK contains methods for interacting with the Reminder service
/// API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl ReminderSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
