use crate::{APIResponse, BaseClient, ID};
use reminder_service_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

/// Datetimes are sent as text. `appointment` has to be formatted as
/// `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, Default)]
pub struct CreateReminderInput {
    pub id: Option<ID>,
    pub name: String,
    pub appointment_type: Option<String>,
    pub appointment: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReminderInput {
    pub name: String,
    pub appointment_type: Option<String>,
    pub appointment: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
}

const PATH: &str = "reminder";

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get(PATH.into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            id: input.id,
            name: Some(input.name),
            appointment_type: input.appointment_type,
            appointment: input.appointment,
            address: input.address,
            description: input.description,
            people_concerned: input.people_concerned,
            creation_date: input.creation_date,
        };

        self.base.post(body, PATH.into(), StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            name: Some(input.name),
            appointment_type: input.appointment_type,
            appointment: input.appointment,
            address: input.address,
            description: input.description,
            people_concerned: input.people_concerned,
        };

        self.base.put(body, PATH.into(), StatusCode::OK).await
    }

    pub async fn delete(&self, name: String) -> APIResponse<delete_reminder::APIResponse> {
        let body = delete_reminder::RequestBody { name: Some(name) };

        self.base.delete(body, PATH.into(), StatusCode::OK).await
    }
}
