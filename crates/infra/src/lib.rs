mod config;
mod repos;

pub use config::Config;
pub use repos::{IReminderRepo, RepoError, Repos};
use tracing::info;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
}

impl ReminderContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.database_url {
            Some(connection_string) => {
                Repos::create_postgres(connection_string, config.database_max_connections).await?
            }
            None => {
                info!("Using inmemory database");
                Repos::create_inmemory()
            }
        };
        Ok(Self { repos, config })
    }

    /// Context backed by the inmemory store regardless of the environment
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    ReminderContext::create(Config::new()).await
}
