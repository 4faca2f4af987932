use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Connection string of the postgres database. When it is not
    /// provided the reminders are only kept in memory.
    pub database_url: Option<String>,
    /// Maximum number of connections kept open in the database pool
    pub database_max_connections: u32,
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> T
where
    T: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000);
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => Some(url),
            _ => {
                info!("Did not find DATABASE_URL environment variable. Reminders will be kept in memory.");
                None
            }
        };
        let database_max_connections = parse_env_or("DATABASE_MAX_CONNECTIONS", 5);

        Self {
            port,
            database_url,
            database_max_connections,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
