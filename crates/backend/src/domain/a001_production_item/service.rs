use super::repository::{self, Model, NewProductionOrder};
use anyhow::Result;
use contracts::domain::a001_production_item::aggregate::{
    ItemId, ProductionItem, ProductionItemList, ProductionStatus,
};
use contracts::domain::a001_production_item::stage_dates::{StageDates, StageKind};
use sea_orm::DatabaseConnection;

pub use repository::ProductionOrderListQuery;

fn parse_timeline(model: &Model) -> StageDates {
    match model.timeline.as_deref() {
        Some(raw) if !raw.trim().is_empty() => match serde_json::from_str(raw) {
            Ok(dates) => dates,
            Err(e) => {
                tracing::warn!("Bad timeline JSON for order {}: {}", model.order_id, e);
                StageDates::new()
            }
        },
        _ => StageDates::new(),
    }
}

/// Stored timeline serialized for the `timeline` column
pub fn encode_timeline(dates: &StageDates) -> Result<Option<String>> {
    if dates.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(dates)?))
}

/// Row as shown in the list: stored timeline as-is
pub fn to_list_item(model: Model) -> ProductionItem {
    let dates = parse_timeline(&model);
    ProductionItem {
        id: ItemId::Text(model.id),
        order_number: Some(model.order_id),
        style: model.style_code,
        fabric: model.fabric,
        color: model.color,
        quantity: Some(model.quantity.max(0) as u64),
        status: ProductionStatus::from_code(&model.status),
        dates: Some(dates),
        brand: model.brand,
        source_file: model.source_file,
        created_at: model.created_at.map(|d| d.to_rfc3339()),
        updated_at: model.updated_at.map(|d| d.to_rfc3339()),
    }
}

/// Full record for the detail endpoint.
///
/// Missing text fields become empty strings and `dates` always carries the
/// four canonical stages.
pub fn to_detail_item(model: Model) -> ProductionItem {
    let timeline = parse_timeline(&model);
    let dates = StageKind::canonical()
        .iter()
        .filter_map(|kind| kind.key())
        .map(|key| (key.to_string(), timeline.get(key).map(str::to_string)))
        .collect::<StageDates>();

    ProductionItem {
        id: ItemId::Text(model.id),
        order_number: Some(model.order_id),
        style: Some(model.style_code.unwrap_or_default()),
        fabric: Some(model.fabric.unwrap_or_default()),
        color: Some(model.color.unwrap_or_default()),
        quantity: Some(model.quantity.max(0) as u64),
        status: ProductionStatus::from_code(&model.status),
        dates: Some(dates),
        brand: Some(model.brand.unwrap_or_default()),
        source_file: Some(model.source_file.unwrap_or_default()),
        created_at: model.created_at.map(|d| d.to_rfc3339()),
        updated_at: model.updated_at.map(|d| d.to_rfc3339()),
    }
}

pub async fn list(
    db: &DatabaseConnection,
    query: ProductionOrderListQuery,
) -> Result<ProductionItemList> {
    let (rows, total) = repository::list(db, &query).await?;
    Ok(ProductionItemList {
        items: rows.into_iter().map(to_list_item).collect(),
        total,
        skip: query.skip,
        limit: query.limit,
    })
}

pub async fn get_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<ProductionItem>> {
    let model = repository::find_by_key(db, key).await?;
    Ok(model.map(to_detail_item))
}

/// Delete by id or order number. `false` when nothing matched.
pub async fn delete_by_key(db: &DatabaseConnection, key: &str) -> Result<bool> {
    let Some(model) = repository::find_by_key(db, key).await? else {
        return Ok(false);
    };
    let deleted = repository::delete_by_id(db, &model.id).await?;
    if deleted == 1 {
        tracing::info!("Deleted production item {}", key);
        Ok(true)
    } else {
        Err(anyhow::anyhow!("Failed to delete item {}", key))
    }
}

pub async fn create(db: &DatabaseConnection, order: NewProductionOrder) -> Result<String> {
    repository::insert(db, order).await
}
