use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::api::error::ApiError;
use crate::api::ProductsApi;
use crate::model::{Product, ProductId, ProductPayload};

/// Collection path appended to the configured base URL.
pub const PRODUCTS_PATH: &str = "/api/Products";

pub struct HttpProductsApi {
    client: Client,
    base_url: Url,
}

impl HttpProductsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder().build().map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Collection URL, or the item URL when `id` is given.
    ///
    /// Any path prefix on the base URL is kept; the id is percent-encoded as
    /// a single segment.
    pub fn endpoint(&self, id: Option<&ProductId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(PRODUCTS_PATH.trim_start_matches('/').split('/'));
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    async fn send(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(method, url = %url, "Sending products request");

        let response = request.send().await.map_err(|source| ApiError::Network {
            method,
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(method, url = %url, status = status.as_u16(), "Products request succeeded");
        Ok(response)
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint(None);
        let response = self.send("GET", &url, self.client.get(url.clone())).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            method: "GET",
            url: url.to_string(),
            source,
        })
    }

    async fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = self.endpoint(None);
        let request = self.client.post(url.clone()).json(payload);
        let response = self.send("POST", &url, request).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            method: "POST",
            url: url.to_string(),
            source,
        })
    }

    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.endpoint(Some(id));
        let request = self.client.put(url.clone()).json(payload);
        self.send("PUT", &url, request).await?;
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.endpoint(Some(id));
        self.send("DELETE", &url, self.client.delete(url.clone()))
            .await?;
        Ok(())
    }
}
