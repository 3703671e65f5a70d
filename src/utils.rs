use poem_openapi::Tags;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Tags)]
pub enum ApiTags {
    /// Welcome endpoint backed by a database probe
    Welcome,
    /// Health check endpoints
    HealthCheck,
}

/// Environment-backed configuration. Every value has a literal fallback, so
/// loading never fails; a malformed `PORT` falls back to the default.
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "node_user".to_string()),
            db_password: env::var("DB_PASSWORD").unwrap_or_else(|_| "secure_password".to_string()),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "node_app".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
        }
    }
}

/// Build the MySQL pool without opening a connection; the first query
/// triggers the actual connect. Up to 10 connections, waiters queue until
/// the acquire timeout fires.
pub fn get_db_pool(config: &Config) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect_lazy_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_falls_back_to_defaults() {
        env::remove_var("DB_HOST");
        env::remove_var("DB_USER");
        env::remove_var("DB_PASSWORD");
        env::remove_var("DB_NAME");
        env::remove_var("PORT");

        let config = Config::from_env();
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_user, "node_user");
        assert_eq!(config.db_password, "secure_password");
        assert_eq!(config.db_name, "node_app");
        assert_eq!(config.port, 3000);
    }

    #[tokio::test]
    async fn pool_is_lazy() {
        let config = Config {
            db_host: "localhost".to_string(),
            db_user: "node_user".to_string(),
            db_password: "secure_password".to_string(),
            db_name: "node_app".to_string(),
            port: 3000,
        };
        let pool = get_db_pool(&config);
        assert_eq!(pool.size(), 0);
    }
}
