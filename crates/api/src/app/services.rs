use std::sync::Arc;

use bookstock_store::{BookRepository, DbConfig, InMemoryBookStore, PostgresBookStore};

use crate::notify::LowStockNotifier;

/// Process-scoped dependencies, built once at startup and handed to the
/// router via `Extension` (never referenced as ambient state).
pub struct AppServices {
    pub repo: Arc<dyn BookRepository>,
    pub notifier: LowStockNotifier,
}

impl AppServices {
    pub fn new(repo: Arc<dyn BookRepository>, notifier: LowStockNotifier) -> Self {
        Self { repo, notifier }
    }
}

/// Build services from the environment.
///
/// `USE_PERSISTENT_STORE` (default true) selects Postgres; set it to false
/// to run against the in-memory store during development.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "true".to_string())
        .parse::<bool>()
        .unwrap_or(true);

    let repo: Arc<dyn BookRepository> = if use_persistent {
        Arc::new(build_postgres_store().await)
    } else {
        tracing::info!("USE_PERSISTENT_STORE=false; using in-memory book store");
        Arc::new(InMemoryBookStore::new())
    };

    AppServices::new(repo, LowStockNotifier::from_env())
}

async fn build_postgres_store() -> PostgresBookStore {
    let cfg = DbConfig::from_env();
    let store = PostgresBookStore::new(&cfg);

    // Bootstrap runs on every start; both scripts are idempotent. Lenient
    // by default: a failure is logged and the process keeps going, so a
    // broken schema only surfaces per request. `DB_STRICT_MIGRATIONS=true`
    // aborts startup instead.
    let migrated = store.migrate(&cfg.migrations_dir).await;
    if cfg.strict_migrations {
        migrated.expect("initial migration failed and DB_STRICT_MIGRATIONS is set");
    } else if let Err(e) = migrated {
        tracing::error!(error = %e, "initial migration failed");
    }

    let seeded = store.seed(&cfg.migrations_dir).await;
    if cfg.strict_migrations {
        seeded.expect("book population failed and DB_STRICT_MIGRATIONS is set");
    } else if let Err(e) = seeded {
        tracing::error!(error = %e, "book population failed");
    }

    store
}
