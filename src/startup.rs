//! Startup initialization for tracing and the database connection.

use std::sync::Arc;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::{config::Config, error::AppError};

/// Tracing target carrying database query log entries.
const QUERY_LOG_TARGET: &str = "db::query";

/// Queries slower than this are logged as slow queries.
const SLOW_QUERY_MS: u128 = 1000;

/// Queries slower than this are flagged as notable but not slow.
const NOTABLE_QUERY_MS: u128 = 500;

/// Initializes tracing with a console layer and a query log file layer.
///
/// The console layer is filtered through `RUST_LOG` (default `info`) and
/// carries all application logs. A second JSON layer captures only database
/// query entries (the `db::query` target) and appends them to
/// `<log_dir>/database.log`, mirroring the console/file split of the
/// original query logger.
///
/// # Arguments
/// - `config` - Application configuration providing the log directory
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::IoErr)` - Failed to create the log directory or file
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    std::fs::create_dir_all(&config.log_dir)?;
    let query_log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::path::Path::new(&config.log_dir).join("database.log"))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let query_file_layer = fmt::layer()
        .json()
        .with_writer(Arc::new(query_log))
        .with_filter(Targets::new().with_target(QUERY_LOG_TARGET, tracing::Level::DEBUG));

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(console_filter))
        .with(query_file_layer)
        .init();

    Ok(())
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, installs the query metric callback, then runs all pending
/// SeaORM migrations so the schema is up to date before the application
/// accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    // sqlx's own statement logging is replaced by the metric callback below.
    opt.sqlx_logging(false);

    let mut db = Database::connect(opt).await?;
    db.set_metric_callback(log_query_metrics);

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Logs one executed statement with its duration, SQL text, and parameters.
///
/// Entries are categorized by latency: failures at `error`, queries over
/// 1000 ms at `warn` (slow query), over 500 ms at `info`, everything else at
/// `debug`. All entries share the `db::query` target so they reach both the
/// console and the query log file.
fn log_query_metrics(info: &sea_orm::metric::Info<'_>) {
    let duration_ms = info.elapsed.as_millis();
    let sql = info.statement.sql.as_str();
    let params = info
        .statement
        .values
        .as_ref()
        .map(|values| format!("{:?}", values))
        .unwrap_or_default();

    if info.failed {
        tracing::error!(target: QUERY_LOG_TARGET, duration_ms, sql, params, "query failed");
    } else if duration_ms > SLOW_QUERY_MS {
        tracing::warn!(target: QUERY_LOG_TARGET, duration_ms, sql, params, "slow query");
    } else if duration_ms > NOTABLE_QUERY_MS {
        tracing::info!(target: QUERY_LOG_TARGET, duration_ms, sql, params, "query");
    } else {
        tracing::debug!(target: QUERY_LOG_TARGET, duration_ms, sql, params, "query");
    }
}
