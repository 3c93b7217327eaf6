/// Strato Cloud API client
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.stratocloud.dev";

/// Structured error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[allow(dead_code)]
    id: Option<String>,
    message: String,
}

/// HTTP client for the Strato Cloud API.
///
/// Cheap to clone; each service family holds its own copy.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with bearer-token auth against the default API URL.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create a client against a non-default base URL (used by tests and
    /// the `--api-url` override).
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidArgument("API token is not valid header text".into()))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.base_url, path)
    }

    /// GET a typed body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// GET a typed body with query parameters.
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body, returning a typed response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body where the API responds with no content.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_empty(response).await
    }

    /// PUT a JSON body, returning a typed response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// PATCH a JSON body, returning a typed response.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("PATCH {}", url);
        let response = self
            .client
            .request(Method::PATCH, &url)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// DELETE with no body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::handle_empty(response).await
    }

    /// DELETE carrying a JSON body (used by firewall rule/tag removal).
    pub async fn delete_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).json(body).send().await?;
        Self::handle_empty(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn handle_empty(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn api_error(status: StatusCode, response: reqwest::Response) -> Error {
        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) => text,
        };
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let result = ApiClient::new("test-token");
        assert!(result.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::with_base_url("t", "http://localhost:8080/").unwrap();
        assert_eq!(client.url("servers"), "http://localhost:8080/v2/servers");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = ApiClient::new("bad\ntoken");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
