use anyhow::{Context, Result};

use crate::domain::a001_production_item::seed;
use crate::shared::config::{self, Config};
use crate::shared::data::db::{get_connection, initialize_database};

/// Open the configured database and create the schema
pub async fn initialize_storage(config: &Config) -> Result<()> {
    let db_path = config::get_database_path(config);
    initialize_database(&db_path)
        .await
        .context("db init failed")
}

/// Import the configured seed file. Failures are logged, startup continues.
pub async fn import_seed(config: &Config) {
    let Some(seed_config) = &config.seed else {
        return;
    };
    let seed_path = config::resolve_path(&seed_config.file);
    if let Err(e) = seed::import_file(get_connection(), &seed_path).await {
        tracing::error!("Seed import failed: {:#}", e);
    }
}
