use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;
use std::time::Duration;

/// Connection pool settings, loaded from the environment with defaults
/// sized for a small VPS deployment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl DbConfig {
    /// Helper to parse numeric pool settings
    fn parse_var<T: std::str::FromStr>(key: &str, default: &str) -> T {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<T>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load database configuration from environment variables
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");

        Self {
            url,
            max_connections: Self::parse_var("DB_MAX_CONNECTIONS", "50"),
            min_connections: Self::parse_var("DB_MIN_CONNECTIONS", "10"),
            connect_timeout_secs: Self::parse_var("DB_CONNECT_TIMEOUT", "5"),
            acquire_timeout_secs: Self::parse_var("DB_ACQUIRE_TIMEOUT", "5"),
            idle_timeout_secs: Self::parse_var("DB_IDLE_TIMEOUT", "300"),
            max_lifetime_secs: Self::parse_var("DB_MAX_LIFETIME", "1800"),
        }
    }
}

pub async fn connect(config: &DbConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .sqlx_logging(false);

    Database::connect(opt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_when_pool_vars_unset() {
        env::set_var("DATABASE_URL", "postgres://localhost/dreamwell_test");
        env::remove_var("DB_MAX_CONNECTIONS");
        env::remove_var("DB_MIN_CONNECTIONS");

        let config = DbConfig::from_env();

        assert_eq!(config.url, "postgres://localhost/dreamwell_test");
        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 10);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.idle_timeout_secs, 300);
    }
}
