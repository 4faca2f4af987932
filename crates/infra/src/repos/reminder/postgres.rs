use super::{unique_violation_message, IReminderRepo, RepoError, NAME_CONSTRAINT};
use chrono::NaiveDateTime;
use reminder_service_domain::{NewReminder, Reminder, ID};
use sqlx::{postgres::PgDatabaseError, FromRow, PgPool};
use tracing::instrument;

/// SQLSTATE of postgres unique violations
const UNIQUE_VIOLATION: &str = "23505";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS reminders (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        appointment_type VARCHAR(10),
        appointment TIMESTAMP,
        address VARCHAR(100),
        description VARCHAR(150),
        people_concerned VARCHAR(100),
        creation_date TIMESTAMP NOT NULL,
        CONSTRAINT reminders_name_key UNIQUE (name)
    )
"#;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_table(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: i64,
    name: String,
    appointment_type: Option<String>,
    appointment: Option<NaiveDateTime>,
    address: Option<String>,
    description: Option<String>,
    people_concerned: Option<String>,
    creation_date: NaiveDateTime,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            appointment_type: raw.appointment_type,
            appointment: raw.appointment,
            address: raw.address,
            description: raw.description,
            people_concerned: raw.people_concerned,
            creation_date: raw.creation_date,
        }
    }
}

fn map_insert_error(e: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &e {
        if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
            if pg_err.code() == UNIQUE_VIOLATION && pg_err.constraint() == Some(NAME_CONSTRAINT) {
                return RepoError::UniqueViolation(unique_violation_message(
                    NAME_CONSTRAINT,
                    pg_err.detail(),
                ));
            }
        }
    }
    RepoError::from(e)
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    #[instrument(name = "Fetch all reminders", skip(self))]
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut tx = self.pool.begin().await?;
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            ORDER BY id
            "#,
        )
        .fetch_all(&mut tx)
        .await?;
        tx.commit().await?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    #[instrument(name = "Fetch reminder by name", skip(self))]
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Reminder>> {
        let mut tx = self.pool.begin().await?;
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut tx)
        .await?;
        tx.commit().await?;

        Ok(reminder.map(|r| r.into()))
    }

    #[instrument(name = "Insert reminder", skip(self))]
    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, RepoError> {
        let mut tx = self.pool.begin().await?;
        let stored = sqlx::query_as::<_, ReminderRaw>(
            r#"
            INSERT INTO reminders
            (id, name, appointment_type, appointment, address, description, people_concerned, creation_date)
            VALUES(
                COALESCE($1, nextval(pg_get_serial_sequence('reminders', 'id'))),
                $2, $3, $4, $5, $6, $7,
                COALESCE($8, timezone('utc', now()))
            )
            RETURNING *
            "#,
        )
        .bind(reminder.id)
        .bind(&reminder.name)
        .bind(&reminder.appointment_type)
        .bind(reminder.appointment)
        .bind(&reminder.address)
        .bind(&reminder.description)
        .bind(&reminder.people_concerned)
        .bind(reminder.creation_date)
        .fetch_one(&mut tx)
        .await
        .map_err(map_insert_error)?;
        tx.commit().await?;

        Ok(stored.into())
    }

    #[instrument(name = "Save reminder", skip(self))]
    async fn save(&self, reminder: &Reminder) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await?;
        let rows_affected = sqlx::query(
            r#"
            UPDATE reminders
            SET appointment_type = $2,
            appointment = $3,
            address = $4,
            description = $5,
            people_concerned = $6,
            creation_date = $7
            WHERE id = $1
            "#,
        )
        .bind(reminder.id)
        .bind(&reminder.appointment_type)
        .bind(reminder.appointment)
        .bind(&reminder.address)
        .bind(&reminder.description)
        .bind(&reminder.people_concerned)
        .bind(reminder.creation_date)
        .execute(&mut tx)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(RepoError::Missing);
        }
        tx.commit().await?;
        Ok(())
    }

    #[instrument(name = "Delete reminder", skip(self))]
    async fn delete(&self, reminder_id: ID) -> Result<Option<Reminder>, RepoError> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.id = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id)
        .fetch_optional(&mut tx)
        .await?;
        tx.commit().await?;

        Ok(deleted.map(|r| r.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, RepoError, Repos};
    use chrono::{NaiveDate, Utc};
    use reminder_service_domain::{NewReminder, ReminderPatch};

    /// Runs only when a database is configured through DATABASE_URL
    async fn setup() -> Option<Repos> {
        let config = Config::new();
        let url = config.database_url?;
        let repos = Repos::create_postgres(&url, config.database_max_connections)
            .await
            .expect("To connect to postgres");
        Some(repos)
    }

    fn unique_name(prefix: &str) -> String {
        let now = Utc::now();
        format!("{}-{}-{}", prefix, now.timestamp(), now.timestamp_subsec_nanos())
    }

    // A single test so the table is only bootstrapped once at a time
    #[tokio::test]
    async fn it_stores_reminders_in_postgres() {
        let repos = match setup().await {
            Some(repos) => repos,
            None => return,
        };

        // Insert fills in id and creation_date
        let name = unique_name("dentist");
        let mut new_reminder = NewReminder::new(name.clone());
        new_reminder.appointment = Some(NaiveDate::from_ymd(2024, 3, 1).and_hms(9, 0, 0));
        let mut reminder = repos
            .reminders
            .insert(&new_reminder)
            .await
            .expect("To insert reminder");
        assert_eq!(reminder.name, name);
        assert_eq!(reminder.appointment, new_reminder.appointment);
        let age = Utc::now().naive_utc() - reminder.creation_date;
        assert!(age.num_seconds().abs() < 60);

        // Supplied creation_date is kept
        let mut dated = NewReminder::new(unique_name("dated"));
        dated.creation_date = Some(NaiveDate::from_ymd(2020, 1, 1).and_hms(8, 0, 0));
        let dated = repos.reminders.insert(&dated).await.unwrap();
        assert_eq!(
            dated.creation_date,
            NaiveDate::from_ymd(2020, 1, 1).and_hms(8, 0, 0)
        );
        assert_ne!(dated.id, reminder.id);

        // Names are unique
        let mut duplicate = NewReminder::new(name.clone());
        duplicate.description = Some("Another one".into());
        match repos.reminders.insert(&duplicate).await {
            Err(RepoError::UniqueViolation(msg)) => {
                assert!(msg.contains("reminders_name_key"));
                assert!(msg.contains(&name));
            }
            res => panic!("Expected unique violation, got: {:?}", res),
        }

        // Lookups are exact
        let found = repos.reminders.find_by_name(&name).await.unwrap();
        assert_eq!(found, Some(reminder.clone()));
        let prefix = &name[..name.len() - 1];
        for pattern in &[format!("{}%", prefix), format!("{}_", prefix), name.to_uppercase()] {
            assert!(repos
                .reminders
                .find_by_name(pattern)
                .await
                .unwrap()
                .is_none());
        }
        let all = repos.reminders.find_all().await.unwrap();
        assert!(all.contains(&reminder));
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        // Save
        reminder.apply(&ReminderPatch {
            address: Some("Main St".into()),
            ..Default::default()
        });
        repos.reminders.save(&reminder).await.unwrap();
        let found = repos.reminders.find_by_name(&name).await.unwrap();
        assert_eq!(found.and_then(|r| r.address).as_deref(), Some("Main St"));

        // Delete returns the last values
        let deleted = repos.reminders.delete(reminder.id).await.unwrap();
        assert_eq!(deleted, Some(reminder.clone()));
        assert!(repos.reminders.delete(reminder.id).await.unwrap().is_none());

        // Saving after delete is missing
        assert!(matches!(
            repos.reminders.save(&reminder).await,
            Err(RepoError::Missing)
        ));

        repos.reminders.delete(dated.id).await.unwrap();
    }
}
