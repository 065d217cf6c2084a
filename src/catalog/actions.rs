//! Inventory Actions
//!
//! Local guards run before any request; a rejected action never reaches the
//! backend.

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::Sweet;
use super::FilterSpec;

/// Fetch the catalog: plain listing when no filter is set, remote search otherwise.
/// The caller still composes the result locally.
pub async fn load_sweets(api: &ApiClient, filter: &FilterSpec) -> AppResult<Vec<Sweet>> {
    if filter.is_empty() {
        return api.list_sweets().await;
    }
    match api.search_sweets(filter).await {
        // Search rejects some combinations (e.g. a lone min price); filter locally instead
        Err(AppError::Server { status: 400, .. }) => {
            log::debug!("[Catalog] search rejected, falling back to full listing");
            api.list_sweets().await
        }
        other => other,
    }
}

pub fn validate_purchase(sweet: &Sweet, qty: u32) -> AppResult<()> {
    if qty == 0 {
        return Err(AppError::Validation("Choose at least one unit.".to_string()));
    }
    if sweet.quantity == 0 {
        return Err(AppError::Validation(format!("{} is sold out.", sweet.name)));
    }
    if qty > sweet.quantity {
        return Err(AppError::Validation(format!("Only {} units available.", sweet.quantity)));
    }
    Ok(())
}

pub fn validate_restock(qty: u32) -> AppResult<()> {
    if qty == 0 {
        return Err(AppError::Validation("Restock at least one unit.".to_string()));
    }
    Ok(())
}

pub async fn purchase(api: &ApiClient, sweet: &Sweet, qty: u32) -> AppResult<Sweet> {
    validate_purchase(sweet, qty)?;
    log::info!("[Catalog] purchasing {} x{}", sweet.id, qty);
    api.purchase_sweet(sweet.id, qty).await
}

pub async fn restock(api: &ApiClient, id: u64, qty: u32) -> AppResult<Sweet> {
    validate_restock(qty)?;
    log::info!("[Catalog] restocking {} +{}", id, qty);
    api.restock_sweet(id, qty).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::executor::block_on;

    use super::*;
    use crate::models::Category;
    use crate::session::{MemoryStorage, SessionStore};

    fn toffee(quantity: u32) -> Sweet {
        Sweet { id: 9, name: "Toffee".to_string(), category: Category::Candy, price: 1.5, quantity }
    }

    // Port 9 (discard) is never served; any request would fail as Network
    fn unreachable_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9", SessionStore::new(Arc::new(MemoryStorage::new())))
    }

    #[test]
    fn test_purchase_guard() {
        assert!(validate_purchase(&toffee(5), 5).is_ok());
        assert!(validate_purchase(&toffee(5), 6).is_err());
        assert!(validate_purchase(&toffee(5), 0).is_err());
        assert!(validate_purchase(&toffee(0), 1).is_err());
    }

    #[test]
    fn test_over_purchase_never_issues_request() {
        let result = block_on(purchase(&unreachable_api(), &toffee(2), 3));
        assert_eq!(result, Err(AppError::Validation("Only 2 units available.".to_string())));
    }

    #[test]
    fn test_zero_restock_never_issues_request() {
        let result = block_on(restock(&unreachable_api(), 9, 0));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::Category;
    use crate::session::{MemoryStorage, SessionStore};

    fn api_for(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri(), SessionStore::new(Arc::new(MemoryStorage::new())))
    }

    fn catalog_body() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Fudge", "category": "Candy", "price": 2.5, "quantity": 3},
            {"id": 2, "name": "Dark Bar", "category": "Chocolate", "price": 4.0, "quantity": 12}
        ])
    }

    async fn mount_list(server: &MockServer, calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/sweets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
            .expect(calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_empty_filter_lists_everything() {
        let server = MockServer::start().await;
        mount_list(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/api/sweets/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let sweets = load_sweets(&api_for(&server), &FilterSpec::default()).await.unwrap();
        assert_eq!(sweets.len(), 2);
    }

    #[tokio::test]
    async fn test_filter_uses_remote_search() {
        let server = MockServer::start().await;
        mount_list(&server, 0).await;
        Mock::given(method("GET"))
            .and(path("/api/sweets/search"))
            .and(query_param("name", "bar"))
            .and(query_param("category", "Chocolate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Dark Bar", "category": "Chocolate", "price": 4.0, "quantity": 12}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let filter = FilterSpec {
            name: Some("bar".to_string()),
            category: Some(Category::Chocolate),
            ..Default::default()
        };
        let sweets = load_sweets(&api_for(&server), &filter).await.unwrap();
        assert_eq!(sweets.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_rejected_search_falls_back_to_listing() {
        let server = MockServer::start().await;
        mount_list(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/api/sweets/search"))
            .respond_with(ResponseTemplate::new(400).set_body_string("maxPrice required"))
            .expect(1)
            .mount(&server)
            .await;

        let filter = FilterSpec { min_price: Some(3.0), ..Default::default() };
        let sweets = load_sweets(&api_for(&server), &filter).await.unwrap();
        assert_eq!(sweets.len(), 2);
    }

    #[tokio::test]
    async fn test_other_search_errors_are_returned() {
        let server = MockServer::start().await;
        mount_list(&server, 0).await;
        Mock::given(method("GET"))
            .and(path("/api/sweets/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let filter = FilterSpec { name: Some("x".to_string()), ..Default::default() };
        let result = load_sweets(&api_for(&server), &filter).await;
        assert!(matches!(result, Err(AppError::Server { status: 500, .. })));
    }
}
