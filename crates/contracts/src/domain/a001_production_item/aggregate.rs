use super::stage_dates::StageDates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a production item as sent by the backend.
///
/// The backend emits string ids, older exports carry integers; both are
/// accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(v) => write!(f, "{}", v),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Text(String::new())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Int(value)
    }
}

/// Production status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProductionStatus {
    Pending,
    InProduction,
    Completed,
    Delayed,
    /// Anything the dashboard does not recognise, including a missing value
    #[default]
    Unknown,
}

impl ProductionStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            ProductionStatus::Pending => "pending",
            ProductionStatus::InProduction => "in_production",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Delayed => "delayed",
            ProductionStatus::Unknown => "unknown",
        }
    }

    /// Parse a wire code; unrecognised codes map to `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => ProductionStatus::Pending,
            "in_production" => ProductionStatus::InProduction,
            "completed" => ProductionStatus::Completed,
            "delayed" => ProductionStatus::Delayed,
            _ => ProductionStatus::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProductionStatus::Unknown)
    }

    pub fn all_known() -> [ProductionStatus; 4] {
        [
            ProductionStatus::Pending,
            ProductionStatus::InProduction,
            ProductionStatus::Completed,
            ProductionStatus::Delayed,
        ]
    }
}

impl From<Option<String>> for ProductionStatus {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(ProductionStatus::from_code)
            .unwrap_or_default()
    }
}

impl From<ProductionStatus> for String {
    fn from(value: ProductionStatus) -> Self {
        value.code().to_string()
    }
}

/// Manufacturing order as exposed by `/api/production-items`.
///
/// List responses carry a summary subset; the detail endpoint fills every
/// field. Missing keys decode to `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionItem {
    pub id: ItemId,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub dates: Option<StageDates>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response of `GET /api/production-items`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionItemList {
    pub items: Vec<ProductionItem>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_item() {
        let item: ProductionItem = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(item.id, ItemId::Text("abc".into()));
        assert_eq!(item.status, ProductionStatus::Unknown);
        assert!(item.order_number.is_none());
        assert!(item.quantity.is_none());
        assert!(item.dates.is_none());
    }

    #[test]
    fn test_decode_integer_id() {
        let item: ProductionItem = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(item.id, ItemId::Int(42));
        assert_eq!(item.id.to_string(), "42");
    }

    #[test]
    fn test_decode_full_item() {
        let json = r#"{
            "id": "65a1",
            "order_number": "PO-001",
            "style": "STYLE-ABC",
            "fabric": "100% Cotton",
            "color": "Navy Blue",
            "quantity": 1000,
            "status": "in_production",
            "dates": {"fabric": "2024-01-15", "cutting": null},
            "brand": "Nike",
            "source_file": "plan.xlsx",
            "created_at": "2024-01-10T08:30:00",
            "updated_at": null
        }"#;
        let item: ProductionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.order_number.as_deref(), Some("PO-001"));
        assert_eq!(item.quantity, Some(1000));
        assert_eq!(item.status, ProductionStatus::InProduction);
        assert_eq!(item.dates.as_ref().map(|d| d.len()), Some(2));
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_status_fallbacks() {
        let item: ProductionItem =
            serde_json::from_str(r#"{"id": "1", "status": "on_hold"}"#).unwrap();
        assert_eq!(item.status, ProductionStatus::Unknown);
        let item: ProductionItem =
            serde_json::from_str(r#"{"id": "1", "status": null}"#).unwrap();
        assert_eq!(item.status, ProductionStatus::Unknown);
    }

    #[test]
    fn test_status_codes() {
        for status in ProductionStatus::all_known() {
            assert_eq!(ProductionStatus::from_code(status.code()), status);
            assert!(status.is_known());
        }
        assert_eq!(
            serde_json::to_string(&ProductionStatus::Delayed).unwrap(),
            r#""delayed""#
        );
    }

    #[test]
    fn test_list_roundtrip_keeps_stage_order() {
        let json = r#"{"items":[{"id":"a","dates":{"sewing":"2024-02-01","fabric":"2024-01-01"}}],"total":1,"skip":0,"limit":100}"#;
        let list: ProductionItemList = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&list.items[0].dates).unwrap();
        assert_eq!(encoded, r#"{"sewing":"2024-02-01","fabric":"2024-01-01"}"#);
    }
}
