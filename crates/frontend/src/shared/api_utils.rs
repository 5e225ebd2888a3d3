//! API utilities for frontend-backend communication
//!
//! Every request goes through [`fetch_json`], which attaches the session token
//! when one is stored and turns the backend's `{"detail": "..."}` error body
//! into a readable message.

use std::fmt;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Why a request did not produce the expected JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never got a response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, detail: String },
    /// The body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Failed to send request: {}", e),
            FetchError::Status { status, detail } if detail.is_empty() => {
                write!(f, "Request failed with status {}", status)
            }
            FetchError::Status { detail, .. } => write!(f, "{}", detail),
            FetchError::Parse(e) => write!(f, "Failed to parse response: {}", e),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Message carried by an error response body, if it has the usual shape.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_session_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status,
            detail: error_detail(&body).unwrap_or_default(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// GET `path` and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = with_auth(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    read_response(response).await
}

#[derive(Clone, Copy)]
enum Method {
    Post,
    Put,
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, FetchError> {
    let url = api_url(path);
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
    };
    let response = with_auth(builder)
        .json(body)
        .map_err(|e| FetchError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    read_response(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    fetch_json(path).await.map_err(|e| e.to_string())
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_json(Method::Post, path, body)
        .await
        .map_err(|e| e.to_string())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_json(Method::Put, path, body)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_detail_from_error_body() {
        assert_eq!(
            error_detail(r#"{"detail":"Vehicle with van number 999 not found"}"#).as_deref(),
            Some("Vehicle with van number 999 not found")
        );
        assert_eq!(error_detail("<html>bad gateway</html>"), None);
        assert_eq!(error_detail(r#"{"detail":"  "}"#), None);
    }

    #[test]
    fn status_error_falls_back_to_code() {
        let bare = FetchError::Status {
            status: 502,
            detail: String::new(),
        };
        assert_eq!(bare.to_string(), "Request failed with status 502");

        let detailed = FetchError::Status {
            status: 400,
            detail: "Engineer and start date are required".into(),
        };
        assert_eq!(detailed.to_string(), "Engineer and start date are required");
    }
}
