//! HTTP client for auth service requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the auth service, keeping the session cookie between calls and turning
//! responses into payloads or errors.

use super::error::ApiError;
use super::models::{error_message, Payload};
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Makes requests to the auth service and tries to conform response data to
/// the given type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL with an empty cookie
    /// jar.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Return payload of a GET request to the path.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.call(Method::GET, path, None::<&()>).await?;
        Self::parse(response).await
    }

    /// Return payload of a POST request with a JSON body to the path.
    ///
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.call(Method::POST, path, Some(body)).await?;
        Self::parse(response).await
    }

    /// Make request and return the raw response or error.
    ///
    async fn call<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let url = reqwest::Url::parse(&request_url)
            .map_err(|_| ApiError::InvalidUrl(request_url.clone()))?;

        log::debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Check status before trying to deserialize, extracting the service's
    /// error message on failure.
    ///
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let response_bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&response_bytes)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unexpected response")
                        .to_lowercase()
                });
            log::warn!("Request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Payload<T> = serde_json::from_slice(&response_bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize API response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            e
        })?;
        Ok(payload.into_inner())
    }
}
