use crate::shared::api_utils::{item_url, items_url};
use contracts::domain::a001_production_item::aggregate::{
    ItemId, ProductionItem, ProductionItemList,
};
use gloo_net::http::Request;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Something that can load a full production item
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    async fn fetch_item(&self, id: &ItemId) -> Result<ProductionItem, FetchError>;
}

/// Loads items from the REST backend
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    base: String,
}

impl HttpItemSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl ItemSource for HttpItemSource {
    async fn fetch_item(&self, id: &ItemId) -> Result<ProductionItem, FetchError> {
        let url = item_url(&self.base, id);
        log::debug!("Loading production item: {}", url);
        get_json(&url).await
    }
}

/// `GET /api/production-items`
pub async fn fetch_items(base: &str) -> Result<ProductionItemList, FetchError> {
    let url = items_url(base);
    log::debug!("Loading production items: {}", url);
    get_json(&url).await
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
