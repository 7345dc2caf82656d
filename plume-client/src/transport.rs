//! HTTP transport
//!
//! `HttpTransport` is the seam between the typed API surface and the wire:
//! `NetworkTransport` speaks HTTP with bearer auth, tests swap in a stub
//! that records calls and replays canned envelopes.

use crate::{ClientError, ClientResult, Session};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use std::sync::Arc;

/// Transport abstraction over the admin API wire protocol
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    /// Delete endpoints respond with no payload
    async fn delete(&self, path: &str) -> ClientResult<()>;

    /// Upload a single file as a multipart form
    async fn upload<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<T>;
}

/// HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl NetworkTransport {
    pub fn new(base_url: &str, timeout: u64, session: Arc<Session>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn auth_header(&self) -> Option<String> {
        self.session.access_token().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        req
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_body(status, text));
        }

        let envelope: ApiResponse<T> = resp.json().await?;
        envelope.into_data().map_err(|e| ClientError::Api {
            code: e.code.into(),
            message: e.message,
        })
    }

    /// Like [`handle_response`](Self::handle_response), but for endpoints
    /// that answer with `data: null`.
    async fn handle_unit(resp: reqwest::Response) -> ClientResult<()> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_body(status, text));
        }

        let envelope: ApiResponse<serde_json::Value> = resp.json().await?;
        envelope.into_unit().map_err(|e| ClientError::Api {
            code: e.code.into(),
            message: e.message,
        })
    }
}

/// Map a non-success response body to a typed error.
///
/// The server usually wraps errors in the response envelope; an envelope
/// without a message falls back to the raw body. Non-envelope bodies map by
/// HTTP status.
fn error_from_body(status: StatusCode, text: String) -> ClientError {
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
        && let Some(code) = envelope.code
        && code != 0
    {
        let message = if envelope.message.is_empty() {
            text
        } else {
            envelope.message
        };
        return ClientError::Api { code, message };
    }

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

#[async_trait]
impl HttpTransport for NetworkTransport {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let resp = self.request(reqwest::Method::GET, path).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let resp = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let resp = self.request(reqwest::Method::POST, path).send().await?;
        Self::handle_response(resp).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let resp = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let resp = self
            .request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let resp = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::handle_unit(resp).await
    }

    async fn upload<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<T> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.essence_str())
            .map_err(|e| ClientError::Internal(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let resp = self
            .request(reqwest::Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(resp).await
    }
}


#[cfg(test)]
pub(crate) mod stub {
    //! Recording transport for tests: logs every call and replays queued
    //! envelope payloads in order.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct RecordedCall {
        pub method: &'static str,
        pub path: String,
        pub body: Option<serde_json::Value>,
    }

    #[derive(Debug, Default)]
    pub(crate) struct StubTransport {
        pub calls: Mutex<Vec<RecordedCall>>,
        responses: Mutex<VecDeque<serde_json::Value>>,
    }

    impl StubTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn enqueue(&self, data: serde_json::Value) {
            self.responses
                .lock()
                .expect("stub lock poisoned")
                .push_back(data);
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().expect("stub lock poisoned").len()
        }

        pub(crate) fn paths(&self) -> Vec<String> {
            self.calls
                .lock()
                .expect("stub lock poisoned")
                .iter()
                .map(|c| c.path.clone())
                .collect()
        }

        fn respond<T: DeserializeOwned>(
            &self,
            method: &'static str,
            path: &str,
            body: Option<serde_json::Value>,
        ) -> ClientResult<T> {
            self.calls
                .lock()
                .expect("stub lock poisoned")
                .push(RecordedCall {
                    method,
                    path: path.to_string(),
                    body,
                });

            let data = self
                .responses
                .lock()
                .expect("stub lock poisoned")
                .pop_front()
                .unwrap_or(serde_json::Value::Null);

            serde_json::from_value(data).map_err(|e| ClientError::InvalidResponse(e.to_string()))
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
            self.respond("GET", path, None)
        }

        async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
        where
            T: DeserializeOwned + Send,
            B: Serialize + Sync,
        {
            let body = serde_json::to_value(body)?;
            self.respond("POST", path, Some(body))
        }

        async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
            self.respond("POST", path, None)
        }

        async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
        where
            T: DeserializeOwned + Send,
            B: Serialize + Sync,
        {
            let body = serde_json::to_value(body)?;
            self.respond("PUT", path, Some(body))
        }

        async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
        where
            T: DeserializeOwned + Send,
            B: Serialize + Sync,
        {
            let body = serde_json::to_value(body)?;
            self.respond("PATCH", path, Some(body))
        }

        async fn delete(&self, path: &str) -> ClientResult<()> {
            self.calls
                .lock()
                .expect("stub lock poisoned")
                .push(RecordedCall {
                    method: "DELETE",
                    path: path.to_string(),
                    body: None,
                });
            self.responses
                .lock()
                .expect("stub lock poisoned")
                .pop_front();
            Ok(())
        }

        async fn upload<T: DeserializeOwned + Send>(
            &self,
            path: &str,
            field: &str,
            file_name: &str,
            _bytes: Vec<u8>,
        ) -> ClientResult<T> {
            self.respond(
                "UPLOAD",
                path,
                Some(serde_json::json!({ "field": field, "file_name": file_name })),
            )
        }
    }
}
