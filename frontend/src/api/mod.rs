//! Generic typed REST client.
//!
//! `ApiClient<T>` translates CRUD intents into HTTP requests against a
//! configured resource path and decodes the JSON responses into `T`. One
//! client instance is created per resource; `set_config` fixes the base
//! path the instance resolves against. Every operation is a one-shot
//! `async fn`: it resolves exactly once, and transport errors are forwarded
//! unchanged to the caller. There is no caching, no retry and no
//! deduplication of in-flight requests.
//!
//! Requests issued before `set_config` resolve against an empty base path.
//! That mirrors the backend contract rather than guarding it; callers are
//! expected to configure the client at construction time.

use std::marker::PhantomData;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::FormData;

mod error;
pub mod people;

pub use error::ApiError;

/// Root URL every request resolves against. The backend mounts the REST
/// resources under this prefix.
pub const API_URL: &str = "/api";

/// Configuration applied to an `ApiClient` instance.
pub struct ApiConfig {
    /// URL segment identifying the resource collection, e.g. `/people`.
    pub base_path: String,
}

/// Typed REST client for a single resource collection.
pub struct ApiClient<T> {
    api_url: String,
    base_path: String,
    _resource: PhantomData<T>,
}

impl<T: DeserializeOwned> ApiClient<T> {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            base_path: String::new(),
            _resource: PhantomData,
        }
    }

    /// Sets the resource base path. Idempotent; may be called again to
    /// repoint the instance.
    pub fn set_config(&mut self, config: ApiConfig) {
        self.base_path = config.base_path;
    }

    fn full_url(&self, endpoint: Option<&str>) -> String {
        format!("{}{}{}", self.api_url, self.base_path, endpoint.unwrap_or(""))
    }

    fn item_url(&self, id: i64, endpoint: Option<&str>) -> String {
        format!("{}/{}", self.full_url(endpoint), id)
    }

    /// GET the whole collection, optionally narrowed by query parameters.
    pub async fn list(
        &self,
        endpoint: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let response = Request::get(&self.full_url(endpoint))
            .query(query.iter().copied())
            .send()
            .await?;
        read_json(response).await
    }

    /// GET a single record under `endpoint`.
    pub async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let response = Request::get(&self.full_url(Some(endpoint)))
            .query(query.iter().copied())
            .send()
            .await?;
        read_json(response).await
    }

    /// POST a JSON body.
    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        let response = Request::post(&self.full_url(Some(endpoint)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        read_json(response).await
    }

    /// POST a multipart payload. No explicit content-type header: the
    /// transport sets it together with the boundary.
    pub async fn post_form_data(
        &self,
        form_data: FormData,
        endpoint: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.full_url(endpoint))
            .body(form_data)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        read_json(response).await
    }

    /// PUT a JSON body.
    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        let response = Request::put(&self.full_url(Some(endpoint)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        read_json(response).await
    }

    /// PATCH a JSON body.
    pub async fn patch<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        let response = Request::patch(&self.full_url(Some(endpoint)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE the record with the given id.
    pub async fn delete(&self, id: i64, endpoint: Option<&str>) -> Result<T, ApiError> {
        let response = Request::delete(&self.item_url(id, endpoint)).send().await?;
        read_json(response).await
    }
}

/// Turns a response into the expected type, mapping non-2xx statuses to
/// `ApiError::Status` with the raw body kept for logging.
async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn client() -> ApiClient<Value> {
        let mut client = ApiClient::new(API_URL);
        client.set_config(ApiConfig {
            base_path: "/test".to_string(),
        });
        client
    }

    #[test]
    fn full_url_joins_api_url_base_path_and_endpoint() {
        assert_eq!(client().full_url(None), "/api/test");
        assert_eq!(client().full_url(Some("/1")), "/api/test/1");
    }

    #[test]
    fn item_url_appends_the_id() {
        assert_eq!(client().item_url(7, None), "/api/test/7");
        assert_eq!(client().item_url(7, Some("/archived")), "/api/test/archived/7");
    }

    #[test]
    fn unconfigured_client_resolves_against_empty_base_path() {
        let client: ApiClient<Value> = ApiClient::new(API_URL);
        assert_eq!(client.full_url(Some("/1")), "/api/1");
    }

    #[test]
    fn set_config_may_be_called_again() {
        let mut client = client();
        client.set_config(ApiConfig {
            base_path: "/test".to_string(),
        });
        assert_eq!(client.full_url(None), "/api/test");
        client.set_config(ApiConfig {
            base_path: "/other".to_string(),
        });
        assert_eq!(client.full_url(None), "/api/other");
    }
}
