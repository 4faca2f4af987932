mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use reminder_service_domain::{NewReminder, Reminder, ID};
use thiserror::Error;

/// Constraint guarding the uniqueness of `Reminder` names
pub(crate) const NAME_CONSTRAINT: &str = "reminders_name_key";

#[derive(Error, Debug)]
pub enum RepoError {
    /// The `Reminder` name is already taken. Contains the message
    /// given by the store.
    #[error("{0}")]
    UniqueViolation(String),
    /// The `Reminder` was removed after it was resolved
    #[error("The reminder no longer exists")]
    Missing,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.into())
    }
}

pub(crate) fn unique_violation_message(constraint: &str, detail: Option<&str>) -> String {
    let message = format!("duplicate key value violates unique constraint \"{}\"", constraint);
    match detail {
        Some(detail) => format!("{}. {}", message, detail),
        None => message,
    }
}

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// All `Reminder`s ordered by id
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Exact match on the name
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Reminder>>;
    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, RepoError>;
    async fn save(&self, reminder: &Reminder) -> Result<(), RepoError>;
    async fn delete(&self, reminder_id: ID) -> Result<Option<Reminder>, RepoError>;
}
