//! Response envelopes and request payloads shared by every endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Envelope returned by item endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}

/// Envelope for calls whose payload is irrelevant (delete, reorder, patches).
pub type Ack = ApiResponse<serde_json::Value>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Envelope returned by collection endpoints.
///
/// A missing or `null` `data` field decodes as an empty list.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl<T> PaginatedResponse<T> {
    /// Server-side total, 0 when the server omitted pagination.
    pub fn total(&self) -> u64 {
        self.pagination.map_or(0, |p| p.total)
    }
}

/// Query parameters for collection requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub extra: Vec<(String, String)>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// `?k=v&...` with percent-encoded values, or an empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            pairs.push(format!("offset={offset}"));
        }
        for (key, value) in &self.extra {
            pairs.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// One entry of a privacy-section reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: i64,
    pub display_order: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReorderRequest<'a> {
    pub sections: &'a [ReorderItem],
}

#[derive(Debug, Serialize)]
pub(crate) struct SubscriptionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub subscribed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SettingValueRequest<'a> {
    pub value: &'a str,
}

/// Settings flattened to `key → value`.
pub type SettingsMap = HashMap<String, String>;

/// Payload of `/health`; every field is optional because deployments differ.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub uptime: Option<f64>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    /// Whole hours of uptime, as the dashboard shows it.
    pub fn uptime_hours(&self) -> Option<u64> {
        self.uptime
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(|secs| (secs / 3600.0).floor() as u64)
    }
}
