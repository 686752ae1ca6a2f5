//! Typed client for the site content REST API.
//!
//! Every call goes through [`ApiClient::request`]: one attempt, no retry, no
//! timeout. Non-2xx statuses and `success: false` envelopes become
//! [`RequestError`]s, and each failure is logged exactly once here so callers
//! only need to decide what to do with it.

mod error;
mod types;

pub use error::RequestError;
pub use types::{
    Ack, ApiResponse, HealthStatus, ListParams, PaginatedResponse, PaginationInfo, ReorderItem,
    SettingsMap,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::BusinessConfig;
use crate::entities::{Faq, PrivacyPolicySection, Project, Setting};
use crate::http::{Method, Request};
use error::envelope_message;
use types::{ReorderRequest, SettingValueRequest, SubscriptionRequest};

/// Explicit client value; construct once from config and clone it into pages.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: BusinessConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    /// Starts a request against `endpoint` on the configured origin.
    pub fn builder(&self, method: Method, endpoint: &str) -> Request {
        Request::new(method, self.config.url(endpoint))
    }

    fn with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Request, RequestError> {
        self.builder(method, endpoint)
            .json(body)
            .map_err(RequestError::Encode)
    }

    /// Sends `request` and decodes the JSON body as `T`.
    pub async fn request<T: DeserializeOwned>(&self, request: Request) -> Result<T, RequestError> {
        let method = request.method();
        let url = request.url().to_owned();

        let result = self.execute(request).await;
        if let Err(err) = &result {
            log::error!("API request failed: {method} {url}: {err}");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, RequestError> {
        let response = request
            .send(&self.http)
            .await
            .map_err(RequestError::Transport)?;

        let body: Option<serde_json::Value> = if response.body.is_empty() {
            None
        } else {
            serde_json::from_slice(&response.body).ok()
        };

        if !response.is_success() {
            return Err(RequestError::Status {
                status: response.status,
                message: envelope_message(body.as_ref(), response.status),
            });
        }

        let body = match body {
            Some(body) => body,
            // 204 and friends: nothing to decode beyond the implied success
            None if response.body.is_empty() => serde_json::json!({ "success": true }),
            None => {
                return serde_json::from_slice(&response.body).map_err(RequestError::Decode);
            }
        };

        if body.get("success") == Some(&serde_json::Value::Bool(false)) {
            return Err(RequestError::Rejected {
                message: envelope_message(Some(&body), response.status),
            });
        }

        serde_json::from_value(body).map_err(RequestError::Decode)
    }

    /// GET `{endpoint}?{params}`
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &ListParams,
    ) -> Result<PaginatedResponse<T>, RequestError> {
        let path = format!("{endpoint}{}", params.to_query_string());
        self.request(self.builder(Method::Get, &path)).await
    }

    /// GET `{endpoint}/{id}`
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: i64,
    ) -> Result<ApiResponse<T>, RequestError> {
        self.request(self.builder(Method::Get, &format!("{endpoint}/{id}")))
            .await
    }

    /// POST `{endpoint}`
    pub async fn create<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, RequestError> {
        self.request(self.with_body(Method::Post, endpoint, body)?)
            .await
    }

    /// PUT `{endpoint}/{id}`; the body replaces the stored record.
    pub async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        id: i64,
        body: &B,
    ) -> Result<ApiResponse<T>, RequestError> {
        self.request(self.with_body(Method::Put, &format!("{endpoint}/{id}"), body)?)
            .await
    }

    /// DELETE `{endpoint}/{id}`
    pub async fn delete(&self, endpoint: &str, id: i64) -> Result<Ack, RequestError> {
        self.request(self.builder(Method::Delete, &format!("{endpoint}/{id}")))
            .await
    }

    /// Server-side row count of a collection, read from a one-row page.
    pub async fn count(&self, endpoint: &str) -> Result<u64, RequestError> {
        let page: PaginatedResponse<serde_json::Value> =
            self.get_all(endpoint, &ListParams::new().limit(1)).await?;
        Ok(page.total())
    }

    /// PATCH `/api/subscribers/{id}/subscription`
    pub async fn update_subscription_status(
        &self,
        id: i64,
        subscribed: bool,
    ) -> Result<Ack, RequestError> {
        let body = SubscriptionRequest {
            email: None,
            subscribed,
        };
        let path = format!("/api/subscribers/{id}/subscription");
        self.request(self.with_body(Method::Patch, &path, &body)?)
            .await
    }

    /// PATCH `/api/subscribers/subscription`
    pub async fn update_subscription_by_email(
        &self,
        email: &str,
        subscribed: bool,
    ) -> Result<Ack, RequestError> {
        let body = SubscriptionRequest {
            email: Some(email),
            subscribed,
        };
        self.request(self.with_body(Method::Patch, "/api/subscribers/subscription", &body)?)
            .await
    }

    /// GET `/api/projects/featured`
    pub async fn featured_projects(&self) -> Result<Vec<Project>, RequestError> {
        let response: ApiResponse<Vec<Project>> = self
            .request(self.builder(Method::Get, "/api/projects/featured"))
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// GET `/api/projects/category/{id}`
    pub async fn projects_by_category(&self, category_id: i64) -> Result<Vec<Project>, RequestError> {
        let path = format!("/api/projects/category/{category_id}");
        let response: ApiResponse<Vec<Project>> =
            self.request(self.builder(Method::Get, &path)).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// GET `/api/faqs/search?q={query}`
    pub async fn search_faqs(&self, query: &str) -> Result<Vec<Faq>, RequestError> {
        let path = format!("/api/faqs/search?q={}", urlencoding::encode(query));
        let response: ApiResponse<Vec<Faq>> =
            self.request(self.builder(Method::Get, &path)).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// GET `/api/settings/object`
    pub async fn settings_object(&self) -> Result<SettingsMap, RequestError> {
        let response: ApiResponse<SettingsMap> = self
            .request(self.builder(Method::Get, "/api/settings/object"))
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// GET `/api/settings/key/{key}`
    pub async fn setting_by_key(&self, key: &str) -> Result<ApiResponse<Setting>, RequestError> {
        let path = format!("/api/settings/key/{}", urlencoding::encode(key));
        self.request(self.builder(Method::Get, &path)).await
    }

    /// PUT `/api/settings/key/{key}` with `{ "value": ... }`
    pub async fn update_setting_by_key(
        &self,
        key: &str,
        value: &str,
    ) -> Result<ApiResponse<Setting>, RequestError> {
        let path = format!("/api/settings/key/{}", urlencoding::encode(key));
        self.request(self.with_body(Method::Put, &path, &SettingValueRequest { value })?)
            .await
    }

    /// GET `/api/privacy-policy-sections/ordered`
    pub async fn ordered_privacy_sections(&self) -> Result<Vec<PrivacyPolicySection>, RequestError> {
        let response: ApiResponse<Vec<PrivacyPolicySection>> = self
            .request(self.builder(Method::Get, "/api/privacy-policy-sections/ordered"))
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// PUT `/api/privacy-policy-sections/reorder` with `{ "sections": [...] }`
    pub async fn reorder_privacy_sections(
        &self,
        sections: &[ReorderItem],
    ) -> Result<Ack, RequestError> {
        let body = ReorderRequest { sections };
        self.request(self.with_body(
            Method::Put,
            "/api/privacy-policy-sections/reorder",
            &body,
        )?)
        .await
    }

    /// GET `/health`
    pub async fn health(&self) -> Result<ApiResponse<HealthStatus>, RequestError> {
        self.request(self.builder(Method::Get, "/health")).await
    }

    /// GET `/health/detailed`
    pub async fn detailed_health(&self) -> Result<ApiResponse<serde_json::Value>, RequestError> {
        self.request(self.builder(Method::Get, "/health/detailed"))
            .await
    }
}
