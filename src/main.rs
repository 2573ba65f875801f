//! AttendHub administrative entry point
//!
//! Validates configuration, applies database migrations and reports store
//! health. The request-routing layer mounts the library's handlers
//! separately; this binary only prepares and checks the deployment.

use tracing::info;

use AttendHub::{
    config::Settings,
    database::{connection, DatabaseService},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive all file output
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting AttendHub {}...", AttendHub::VERSION);

    // Initialize database connection
    info!("Connecting to database...");
    let pool_config = connection::PoolConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        ..connection::PoolConfig::default()
    };
    let pool = connection::create_pool(&pool_config).await?;

    // Apply pending migrations
    connection::run_migrations(&pool).await?;

    // Report store health and statistics
    connection::health_check(&pool).await?;
    let db = DatabaseService::new(pool);
    let events = db.events.count().await?;
    let attendees = db.attendees.count().await?;
    let certificates = db.certificates.count().await?;
    info!(
        events = events,
        attendees = attendees,
        certificates = certificates,
        "Store healthy"
    );

    info!("AttendHub preflight completed successfully");
    Ok(())
}
