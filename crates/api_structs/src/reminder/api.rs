use crate::dtos::ReminderDTO;
use reminder_service_domain::Reminder;
use serde::{Deserialize, Serialize};

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;

    pub fn to_response(reminders: Vec<Reminder>) -> APIResponse {
        reminders.into_iter().map(ReminderDTO::new).collect()
    }
}

/// Field values are kept as they were sent, validating and coercing them
/// is done by the server so that it can report every bad field at once.
pub mod create_reminder {
    use super::*;
    use reminder_service_domain::ID;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<ID>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub appointment_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub appointment: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub address: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub people_concerned: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub creation_date: Option<String>,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub appointment_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub appointment: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub address: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub people_concerned: Option<String>,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
    }

    pub type APIResponse = ReminderDTO;
}
