use chrono::NaiveDateTime;
use reminder_service_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReminderDTO {
    pub id: ID,
    pub name: String,
    pub appointment_type: Option<String>,
    pub appointment: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
    pub creation_date: NaiveDateTime,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            name: reminder.name,
            appointment_type: reminder.appointment_type,
            appointment: reminder.appointment,
            address: reminder.address,
            description: reminder.description,
            people_concerned: reminder.people_concerned,
            creation_date: reminder.creation_date,
        }
    }
}
