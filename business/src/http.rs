//! JSON transport under [`crate::api::ApiClient`].
//!
//! On native targets the request runs on the caller's Tokio task. On WASM the
//! reqwest future is not `Send`, so it runs under `spawn_local` and hands the
//! response back through a `flume` channel.
//!
//! Nothing here knows about the API envelope; a [`Response`] is status + bytes.

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("network error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One outgoing call. Always sent with `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self)
    }

    pub async fn send(self, client: &reqwest::Client) -> Result<Response, HttpError> {
        let request = self.into_reqwest(client);

        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(request).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded(1);
            wasm_bindgen_futures::spawn_local(async move {
                // receiver is gone when the owning scope was cancelled
                let _ = tx.send_async(execute(request).await).await;
            });
            rx.recv_async()
                .await
                .map_err(|_| HttpError::new("request dropped"))?
        }
    }

    fn into_reqwest(self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Post => client.post(&self.url),
            Method::Put => client.put(&self.url),
            Method::Patch => client.patch(&self.url),
            Method::Delete => client.delete(&self.url),
        }
        .header(reqwest::header::CONTENT_TYPE, "application/json");

        match self.body {
            Some(body) => request.body(body),
            None => request,
        }
    }
}

async fn execute(request: reqwest::RequestBuilder) -> Result<Response, HttpError> {
    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = Response {
            status: 204,
            body: Vec::new(),
        };
        let missing = Response {
            status: 404,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_json_body_is_serialized() {
        let request = Request::new(Method::Patch, "https://example.com/api/subscribers/1")
            .json(&serde_json::json!({ "subscribed": false }))
            .unwrap();

        assert_eq!(request.method(), Method::Patch);
        assert_eq!(request.url(), "https://example.com/api/subscribers/1");
        assert_eq!(request.body.as_deref(), Some(br#"{"subscribed":false}"#.as_slice()));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
