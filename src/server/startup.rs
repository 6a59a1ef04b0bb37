use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    service::seed::{SeedOutcome, SeedService},
};

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Fill an empty ledger from the CSV exports, or the built-in season data when they are absent
pub async fn bootstrap_ledger(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    if !config.seed_on_startup {
        tracing::info!("Startup seeding disabled");
        return Ok(());
    }

    match SeedService::new(db).bootstrap(&config.seed_data_dir).await? {
        SeedOutcome::Seeded => tracing::info!("Ledger seeded at startup"),
        SeedOutcome::AlreadySeeded => tracing::info!("Ledger already holds data, skipping seed"),
        SeedOutcome::NothingToSeed => {}
    }

    Ok(())
}
