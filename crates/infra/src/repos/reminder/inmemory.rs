use super::{unique_violation_message, IReminderRepo, RepoError, NAME_CONSTRAINT};
use crate::repos::shared::inmemory_repo::*;
use anyhow::anyhow;
use chrono::Utc;
use reminder_service_domain::{NewReminder, Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |_| true)?;
        reminders.sort_by_key(|r| r.id);
        Ok(reminders)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.name == name)?;
        if reminders.is_empty() {
            return Ok(None);
        }
        Ok(Some(reminders.remove(0)))
    }

    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, RepoError> {
        let mut reminders = lock(&self.reminders)?;

        if let Some(id) = reminder.id {
            if reminders.iter().any(|r| r.id == id) {
                return Err(RepoError::Storage(anyhow!(unique_violation_message(
                    "reminders_pkey",
                    Some(&format!("Key (id)=({}) already exists.", id))
                ))));
            }
        }
        if reminders.iter().any(|r| r.name == reminder.name) {
            return Err(RepoError::UniqueViolation(unique_violation_message(
                NAME_CONSTRAINT,
                Some(&format!("Key (name)=({}) already exists.", reminder.name)),
            )));
        }

        let id = match reminder.id {
            Some(id) => id,
            None => next_id(reminders.as_slice())?,
        };
        let stored = reminder.clone().into_reminder(id, Utc::now().naive_utc());
        reminders.push(stored.clone());
        Ok(stored)
    }

    async fn save(&self, reminder: &Reminder) -> Result<(), RepoError> {
        if save(reminder, &self.reminders)? {
            Ok(())
        } else {
            Err(RepoError::Missing)
        }
    }

    async fn delete(&self, reminder_id: ID) -> Result<Option<Reminder>, RepoError> {
        Ok(delete(reminder_id, &self.reminders)?)
    }
}
