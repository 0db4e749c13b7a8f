//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::domain::a001_production_item::aggregate::ItemId;

/// Get the base URL for API requests
///
/// Taken from `PRODUCTION_API_URL` at build time. When unset the requests
/// go to the same origin that served the app.
///
/// # Returns
/// - API base URL like "http://localhost:8000" (no trailing slash)
/// - Empty string for same-origin requests
pub fn api_base() -> String {
    normalize_base(option_env!("PRODUCTION_API_URL").unwrap_or_default())
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// `GET` endpoint returning the production item list
pub fn items_url(base: &str) -> String {
    format!("{}/api/production-items", normalize_base(base))
}

/// `GET` endpoint returning one full production item
pub fn item_url(base: &str, id: &ItemId) -> String {
    format!(
        "{}/{}",
        items_url(base),
        urlencoding::encode(&id.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_same_origin() {
        assert_eq!(
            item_url("", &ItemId::from("65a1f0")),
            "/api/production-items/65a1f0"
        );
    }

    #[test]
    fn test_item_url_with_base() {
        assert_eq!(
            item_url("http://localhost:8000/", &ItemId::Int(7)),
            "http://localhost:8000/api/production-items/7"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(
            item_url("", &ItemId::from("PO 001/A")),
            "/api/production-items/PO%20001%2FA"
        );
    }
}
