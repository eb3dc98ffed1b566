//! HTTP client for the astronomy API

use reqwest::{Client, Method, Request, StatusCode, Url};

use super::types::{ErrorBody, ResultRecord};
use crate::config::Config;
use crate::error::LookupError;
use crate::request::RequestDescriptor;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the `stars` / `planets` endpoints
#[derive(Debug, Clone)]
pub struct AstroClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl AstroClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// `<base>/<route>?name=<name>`, with the name percent-encoded
    pub fn request_url(&self, request: &RequestDescriptor) -> Result<Url, LookupError> {
        let mut url = self
            .base_url
            .join(request.route)
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("name", &request.name);
        Ok(url)
    }

    /// Build the GET request, API key header included
    pub fn build_request(&self, request: &RequestDescriptor) -> Result<Request, LookupError> {
        let url = self.request_url(request)?;
        tracing::debug!("GET {}", url);

        Ok(self
            .client
            .request(Method::GET, url)
            .header(API_KEY_HEADER, &self.api_key)
            .build()?)
    }

    /// Send the request and decode the records
    pub async fn lookup(&self, request: &RequestDescriptor) -> Result<Vec<ResultRecord>, LookupError> {
        let http_request = self.build_request(request)?;

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        let body = response.text().await?;

        decode_response(status, &body)
    }
}

/// Interpret a response by status: records on success, [`LookupError::Api`] otherwise
pub fn decode_response(status: StatusCode, body: &str) -> Result<Vec<ResultRecord>, LookupError> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    tracing::warn!("API returned {}: {}", status.as_u16(), message);
    Err(LookupError::Api {
        status: status.as_u16(),
        message,
    })
}
