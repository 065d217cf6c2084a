//! Backend API Client
//!
//! Typed wrappers over the REST endpoints, organized by domain.

mod auth;
mod sweets;

use leptos::prelude::*;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::session::SessionStore;

/// HTTP client bound to the backend origin; attaches the stored bearer token
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("[API] request failed with {}: {}", status, body);
        Err(AppError::from_status(status.as_u16(), body))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> AppResult<T> {
        let response = Self::send(builder).await?;
        response.json::<T>().await.map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn send_empty(builder: RequestBuilder) -> AppResult<()> {
        Self::send(builder).await.map(|_| ())
    }
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn test_url_join() {
        let api = ApiClient::new("http://localhost:8080", SessionStore::new(Arc::new(MemoryStorage::new())));
        assert_eq!(api.url("/api/sweets/7"), "http://localhost:8080/api/sweets/7");
    }
}
