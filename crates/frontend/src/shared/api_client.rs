//! HTTP client for the remote admin API.
//!
//! Built from the [`Session`] on every call site, so requests always carry
//! the current token and admin key. All functions return `Result<T, String>`
//! with a message ready for the error banner.

use contracts::shared::api_response::{error_message_from_body, status_fallback};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::system::session::Session;

/// Whether the endpoint additionally needs the `x-admin-key` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Open,
    AdminKey,
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
    admin_key: String,
}

impl ApiClient {
    pub fn from_session(session: &Session) -> Self {
        Self {
            base: session.api_base.trim_end_matches('/').to_string(),
            token: session.token.clone(),
            admin_key: session.admin_key().to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn builder(&self, verb: Verb, path: &str, gate: Gate) -> RequestBuilder {
        let url = self.url(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        if gate == Gate::AdminKey {
            builder = builder.header("x-admin-key", &self.admin_key);
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        gate: Gate,
        fallback: &str,
    ) -> Result<T, String> {
        let request = self
            .builder(Verb::Get, path, gate)
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?;
        send(request, fallback).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        gate: Gate,
        fallback: &str,
    ) -> Result<T, String> {
        let request = self
            .builder(Verb::Post, path, gate)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send(request, fallback).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        gate: Gate,
        fallback: &str,
    ) -> Result<T, String> {
        let request = self
            .builder(Verb::Put, path, gate)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send(request, fallback).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, String> {
        let request = self
            .builder(Verb::Delete, path, Gate::Open)
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?;
        send(request, fallback).await
    }

    /// DELETE with a JSON body (bulk delete)
    pub async fn delete_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, String> {
        let request = self
            .builder(Verb::Delete, path, Gate::Open)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send(request, fallback).await
    }

    /// Multipart POST; the browser sets the boundary header itself
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
        fallback: &str,
    ) -> Result<T, String> {
        let request = self
            .builder(Verb::Post, path, Gate::Open)
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?;
        send(request, fallback).await
    }
}

async fn send<T: DeserializeOwned>(request: Request, fallback: &str) -> Result<T, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read(response, fallback).await
}

async fn read<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    let status = response.status();
    if status == 429 {
        log::warn!("Rate limited by server: {}", response.url());
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !response.ok() {
        log::error!("{} -> HTTP {}", response.url(), status);
        return Err(error_message_from_body(&body, &status_fallback(status, fallback)));
    }

    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Path segment for an id taken from the API
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::DEFAULT_ADMIN_KEY;

    #[test]
    fn test_client_from_session() {
        let mut session = Session {
            api_base: "http://localhost:5000/api/".to_string(),
            ..Session::default()
        };
        let client = ApiClient::from_session(&session);
        assert_eq!(client.url("/categories"), "http://localhost:5000/api/categories");
        assert_eq!(client.admin_key, DEFAULT_ADMIN_KEY);
        assert!(client.token.is_none());

        session.token = Some("t".to_string());
        session.set_admin_key("custom");
        let client = ApiClient::from_session(&session);
        assert_eq!(client.token.as_deref(), Some("t"));
        assert_eq!(client.admin_key, "custom");
    }

    #[test]
    fn test_segment_escapes() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}
