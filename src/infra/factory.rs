use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgConnectOptions, PgPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::{ImageStore, PaymentGateway};
use crate::infra::payment::stripe_gateway::StripeGateway;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_session_repo::PostgresSessionRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_session_repo::SqliteSessionRepo,
};
use crate::infra::storage::{http_image_store::HttpImageStore, local_image_store::LocalImageStore};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let payment: Option<Arc<dyn PaymentGateway>> = match &config.stripe_secret_key {
        Some(key) => Some(Arc::new(StripeGateway::new(key.clone()))),
        None => {
            warn!("STRIPE_SECRET_KEY not set; payment intents will be rejected");
            None
        }
    };

    let image_store: Arc<dyn ImageStore> = match (&config.storage_url, &config.storage_service_key) {
        (Some(url), Some(key)) => {
            info!("Using hosted image storage at {}", url);
            Arc::new(HttpImageStore::new(url.clone(), key.clone()))
        }
        _ => {
            info!("Using local image storage at {}", config.storage_root);
            Arc::new(LocalImageStore::new(config.storage_root.clone(), config.public_image_base.clone()))
        }
    };

    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            session_repo: Arc::new(PostgresSessionRepo::new(pool)),
            image_store,
            payment,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepo::new(pool)),
            image_store,
            payment,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
