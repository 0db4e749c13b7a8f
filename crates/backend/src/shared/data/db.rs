use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_PRODUCTION_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS production_orders (
        id TEXT PRIMARY KEY NOT NULL,
        order_id TEXT NOT NULL,
        style_code TEXT,
        fabric TEXT,
        color TEXT,
        quantity INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT 'pending',
        timeline TEXT,
        brand TEXT,
        source_file TEXT,
        created_at TEXT,
        updated_at TEXT
    );
"#;

const CREATE_ORDER_ID_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_production_orders_order_id
    ON production_orders (order_id);
"#;

/// SQLite URL for a database file, creating the parent directory
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Open a connection and make sure the schema exists
pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_owned());
    options.sqlx_logging(false);
    // Every pooled connection to `:memory:` would get its own empty database
    if db_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in [CREATE_PRODUCTION_ORDERS, CREATE_ORDER_ID_INDEX] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = connect(&db_url).await?;
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_schema() {
        let conn = connect("sqlite::memory:").await.unwrap();
        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name='production_orders'"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_sqlite_url_absolute() {
        let dir = std::env::temp_dir().join("production-db-url-test");
        let url = sqlite_url(&dir.join("app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("app.db?mode=rwc"));
    }
}
