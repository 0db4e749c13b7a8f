use anyhow::Result;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "production_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_id: String,
    pub style_code: Option<String>,
    pub fabric: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
    pub status: String,
    /// Stage -> date JSON object
    pub timeline: Option<String>,
    pub brand: Option<String>,
    pub source_file: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Values of a new order row
#[derive(Debug, Clone, Default)]
pub struct NewProductionOrder {
    pub order_id: String,
    pub style_code: Option<String>,
    pub fabric: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
    pub status: String,
    pub timeline: Option<String>,
    pub brand: Option<String>,
    pub source_file: Option<String>,
}

/// Filter and window for the list endpoint
#[derive(Debug, Clone)]
pub struct ProductionOrderListQuery {
    /// Case-insensitive substring of `style_code`
    pub style: Option<String>,
    pub status: Option<String>,
    pub skip: u64,
    /// Page size, `0` returns every remaining row
    pub limit: u64,
}

impl Default for ProductionOrderListQuery {
    fn default() -> Self {
        Self {
            style: None,
            status: None,
            skip: 0,
            limit: 100,
        }
    }
}

/// Works on a plain connection or inside a transaction
pub async fn insert<C: ConnectionTrait>(db: &C, order: NewProductionOrder) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let active_model = ActiveModel {
        id: Set(id.clone()),
        order_id: Set(order.order_id),
        style_code: Set(order.style_code),
        fabric: Set(order.fabric),
        color: Set(order.color),
        quantity: Set(order.quantity),
        status: Set(order.status),
        timeline: Set(order.timeline),
        brand: Set(order.brand),
        source_file: Set(order.source_file),
        created_at: Set(Some(now)),
        updated_at: Set(None),
    };
    Entity::insert(active_model).exec(db).await?;
    Ok(id)
}

/// Look up by primary id, then by order number
pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<Model>> {
    if let Some(model) = Entity::find_by_id(key.to_string()).one(db).await? {
        return Ok(Some(model));
    }
    let model = Entity::find()
        .filter(Column::OrderId.eq(key))
        .order_by_asc(Column::CreatedAt)
        .one(db)
        .await?;
    Ok(model)
}

pub async fn list(
    db: &DatabaseConnection,
    query: &ProductionOrderListQuery,
) -> Result<(Vec<Model>, u64)> {
    let mut select = Entity::find();
    if let Some(style) = query.style.as_deref().filter(|s| !s.is_empty()) {
        // SQLite LIKE ignores ASCII case
        let pattern = LikeExpr::new(format!("%{}%", escape_like(style))).escape(LIKE_ESCAPE);
        select = select.filter(Expr::col((Entity, Column::StyleCode)).like(pattern));
    }
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        select = select.filter(Column::Status.eq(status));
    }

    let total = select.clone().count(db).await?;
    // SQLite binds integers as i64; 0 means no limit, and SQLite needs a
    // LIMIT in front of OFFSET
    let limit = match query.limit {
        0 => MAX_SQLITE_INT,
        n => n.min(MAX_SQLITE_INT),
    };
    let items = select
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::OrderId)
        .offset(query.skip.min(MAX_SQLITE_INT))
        .limit(limit)
        .all(db)
        .await?;
    Ok((items, total))
}

pub async fn delete_by_id(db: &DatabaseConnection, id: &str) -> Result<u64> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected)
}

pub async fn count_all(db: &DatabaseConnection) -> Result<u64> {
    Ok(Entity::find().count(db).await?)
}

const LIKE_ESCAPE: char = '\\';
const MAX_SQLITE_INT: u64 = i64::MAX as u64;

/// Make `%`, `_` and the escape character match literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}
