use std::path::PathBuf;

use sqlx::postgres::PgConnectOptions;

/// Postgres port is part of the deployment contract, not configuration.
pub const DB_PORT: u16 = 5432;

/// Database connection and bootstrap settings, read from the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Directory holding `init-db.sql` and `populate-books.sql`.
    pub migrations_dir: PathBuf,
    /// When true, a failed bootstrap aborts startup instead of being logged.
    pub strict_migrations: bool,
}

impl DbConfig {
    /// Read `DB_HOST`, `DB_USER`, `DB_PASS`, `DATABASE`, `MIGRATIONS_DIR`
    /// and `DB_STRICT_MIGRATIONS`, falling back to local-dev defaults.
    pub fn from_env() -> Self {
        let password = std::env::var("DB_PASS").unwrap_or_else(|_| {
            tracing::warn!("DB_PASS not set; using empty password");
            String::new()
        });

        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password,
            database: std::env::var("DATABASE").unwrap_or_else(|_| "bookstock".to_string()),
            migrations_dir: std::env::var("MIGRATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("crates/store/migrations")),
            strict_migrations: std::env::var("DB_STRICT_MIGRATIONS")
                .unwrap_or_else(|_| "false".to_string())
                .parse::<bool>()
                .unwrap_or(false),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(DB_PORT)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}
