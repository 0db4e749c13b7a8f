use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use contracts::domain::a001_production_item::aggregate::{ProductionItem, ProductionItemList};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::a001_production_item::service::{self, ProductionOrderListQuery};
use crate::shared::data::db::get_connection;

const DEFAULT_LIMIT: u64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Production item not found")]
    NotFound,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Production Planning API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    let database = match get_connection().ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            "error"
        }
    };
    Json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        database,
    })
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub skip: Option<u64>,
    /// Defaults to 100; `0` lists everything
    pub limit: Option<u64>,
    pub style: Option<String>,
    pub status: Option<String>,
}

impl From<ListQuery> for ProductionOrderListQuery {
    fn from(q: ListQuery) -> Self {
        Self {
            style: q.style,
            status: q.status,
            skip: q.skip.unwrap_or(0),
            limit: q.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}

/// GET /api/production-items
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<ProductionItemList>, ApiError> {
    let result = service::list(get_connection(), query.into()).await?;
    Ok(Json(result))
}

/// GET /api/production-items/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ProductionItem>, ApiError> {
    match service::get_by_key(get_connection(), &id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

/// DELETE /api/production-items/:id
pub async fn delete(Path(id): Path<String>) -> Result<Json<DeleteResponse>, ApiError> {
    if !service::delete_by_key(get_connection(), &id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteResponse {
        message: format!("Item {} deleted successfully", id),
        id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(anyhow::anyhow!("disk full"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ProductionOrderListQuery = ListQuery::default().into();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 100);
        assert!(query.style.is_none());
    }

    #[test]
    fn test_zero_limit_passes_through_as_unbounded() {
        let query: ProductionOrderListQuery = ListQuery {
            limit: Some(0),
            ..Default::default()
        }
        .into();
        assert_eq!(query.limit, 0);
    }
}
