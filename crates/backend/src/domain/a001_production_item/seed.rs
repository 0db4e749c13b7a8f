//! Import of parsed production orders into an empty database

use super::repository::{self, NewProductionOrder};
use super::service::encode_timeline;
use anyhow::{Context, Result};
use contracts::domain::a001_production_item::stage_dates::StageDates;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use std::path::Path;

/// Document produced by the planning-sheet parser: `{"orders": [...]}`
#[derive(Debug, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub orders: Vec<SeedOrder>,
}

#[derive(Debug, Deserialize)]
pub struct SeedOrder {
    pub order_id: String,
    #[serde(default)]
    pub style_code: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timeline: Option<StageDates>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub source_file: Option<String>,
}

impl SeedOrder {
    fn into_new_order(self) -> Result<NewProductionOrder> {
        let timeline = match &self.timeline {
            Some(dates) => encode_timeline(dates)?,
            None => None,
        };
        Ok(NewProductionOrder {
            order_id: self.order_id,
            style_code: self.style_code,
            fabric: self.fabric,
            color: self.color,
            quantity: self.quantity.unwrap_or(0).max(0),
            status: self.status.unwrap_or_else(|| "pending".to_string()),
            timeline,
            brand: self.brand,
            source_file: self.source_file,
        })
    }
}

pub fn parse_seed(contents: &str) -> Result<SeedDocument> {
    Ok(serde_json::from_str(contents)?)
}

/// Insert every order of `document` unless the table already has rows.
/// Returns the number of inserted orders.
///
/// All orders go in one transaction; a failure leaves the table empty so the
/// next start imports again.
pub async fn import_if_empty(db: &DatabaseConnection, document: SeedDocument) -> Result<usize> {
    let existing = repository::count_all(db).await?;
    if existing > 0 {
        tracing::info!("Seed skipped: {} production orders already stored", existing);
        return Ok(0);
    }

    let txn = db.begin().await?;
    let mut stored = 0;
    for order in document.orders {
        let order_id = order.order_id.clone();
        repository::insert(&txn, order.into_new_order()?)
            .await
            .with_context(|| format!("Failed to store seed order {}", order_id))?;
        stored += 1;
    }
    txn.commit().await?;
    tracing::info!("Seed imported {} production orders", stored);
    Ok(stored)
}

pub async fn import_file(db: &DatabaseConnection, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read seed file {}", path.display()))?;
    import_if_empty(db, parse_seed(&contents)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_production_item::service;
    use crate::shared::data::db::connect;
    use sea_orm::ConnectionTrait;

    const SEED: &str = r#"{
        "orders": [
            {
                "order_id": "PO-001",
                "style_code": "STYLE-ABC",
                "fabric": "100% Cotton",
                "color": "Navy Blue",
                "quantity": 1000,
                "status": "pending",
                "timeline": {
                    "fabric": "2024-01-15",
                    "cutting": "2024-01-20",
                    "sewing": null,
                    "shipping": "2024-02-01"
                },
                "brand": "Nike",
                "source_file": "plan.xlsx",
                "raw_data": {}
            },
            {"order_id": "PO-002"}
        ]
    }"#;

    #[tokio::test]
    async fn test_import_into_empty_db() {
        let db = connect("sqlite::memory:").await.unwrap();
        let stored = import_if_empty(&db, parse_seed(SEED).unwrap()).await.unwrap();
        assert_eq!(stored, 2);

        let item = service::get_by_key(&db, "PO-001").await.unwrap().unwrap();
        assert_eq!(item.quantity, Some(1000));
        assert_eq!(item.brand.as_deref(), Some("Nike"));
        assert_eq!(
            item.dates.as_ref().and_then(|d| d.get("shipping")),
            Some("2024-02-01")
        );

        let bare = service::get_by_key(&db, "PO-002").await.unwrap().unwrap();
        assert_eq!(bare.quantity, Some(0));
        assert_eq!(bare.status.code(), "pending");
    }

    #[tokio::test]
    async fn test_import_skips_populated_db() {
        let db = connect("sqlite::memory:").await.unwrap();
        import_if_empty(&db, parse_seed(SEED).unwrap()).await.unwrap();
        let stored = import_if_empty(&db, parse_seed(SEED).unwrap()).await.unwrap();
        assert_eq!(stored, 0);
    }

    #[tokio::test]
    async fn test_failed_import_leaves_table_empty() {
        let db = connect("sqlite::memory:").await.unwrap();
        db.execute_unprepared(
            "CREATE TRIGGER reject_po_002 BEFORE INSERT ON production_orders \
             WHEN NEW.order_id = 'PO-002' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await
        .unwrap();

        let result = import_if_empty(&db, parse_seed(SEED).unwrap()).await;
        assert!(result.is_err());
        assert_eq!(repository::count_all(&db).await.unwrap(), 0);

        db.execute_unprepared("DROP TRIGGER reject_po_002")
            .await
            .unwrap();
        let stored = import_if_empty(&db, parse_seed(SEED).unwrap()).await.unwrap();
        assert_eq!(stored, 2);
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(parse_seed("{orders").is_err());
    }
}
