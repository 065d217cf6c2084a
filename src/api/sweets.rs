//! Sweet Endpoints

use reqwest::Method;

use crate::catalog::FilterSpec;
use crate::error::AppResult;
use crate::models::{Sweet, SweetDraft};
use super::ApiClient;

fn sweet_path(id: u64) -> String {
    format!("/api/sweets/{}", id)
}

impl ApiClient {
    pub async fn list_sweets(&self) -> AppResult<Vec<Sweet>> {
        Self::send_json(self.request(Method::GET, "/api/sweets")).await
    }

    pub async fn get_sweet(&self, id: u64) -> AppResult<Sweet> {
        Self::send_json(self.request(Method::GET, &sweet_path(id))).await
    }

    pub async fn add_sweet(&self, draft: &SweetDraft) -> AppResult<Sweet> {
        let builder = self.request(Method::POST, "/api/sweets").json(draft);
        Self::send_json(builder).await
    }

    pub async fn update_sweet(&self, id: u64, draft: &SweetDraft) -> AppResult<Sweet> {
        let builder = self.request(Method::PUT, &sweet_path(id)).json(draft);
        Self::send_json(builder).await
    }

    pub async fn delete_sweet(&self, id: u64) -> AppResult<()> {
        Self::send_empty(self.request(Method::DELETE, &sweet_path(id))).await
    }

    pub async fn restock_sweet(&self, id: u64, qty: u32) -> AppResult<Sweet> {
        let builder = self
            .request(Method::POST, &format!("{}/restock", sweet_path(id)))
            .query(&[("qty", qty)]);
        Self::send_json(builder).await
    }

    pub async fn purchase_sweet(&self, id: u64, qty: u32) -> AppResult<Sweet> {
        let builder = self
            .request(Method::POST, &format!("{}/purchase", sweet_path(id)))
            .query(&[("qty", qty)]);
        Self::send_json(builder).await
    }

    /// Remote search with only the set filter fields
    pub async fn search_sweets(&self, filter: &FilterSpec) -> AppResult<Vec<Sweet>> {
        let builder = self
            .request(Method::GET, "/api/sweets/search")
            .query(&filter.query_params());
        Self::send_json(builder).await
    }
}
