//! Auth Endpoints

use reqwest::Method;

use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use super::ApiClient;

impl ApiClient {
    pub async fn register(&self, req: &RegisterRequest) -> AppResult<()> {
        let builder = self.request(Method::POST, "/api/auth/register").json(req);
        Self::send_empty(builder).await
    }

    pub async fn login(&self, req: &LoginRequest) -> AppResult<LoginResponse> {
        let builder = self.request(Method::POST, "/api/auth/login").json(req);
        Self::send_json(builder).await
    }
}
