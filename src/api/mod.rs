//! Remote client for the external Products service.
//!
//! [`ProductsApi`] is the seam between the view controller and the network;
//! [`HttpProductsApi`] is the REST/JSON implementation used by the binary.

mod client;
mod error;

pub use client::{HttpProductsApi, PRODUCTS_PATH};
pub use error::ApiError;

use async_trait::async_trait;

use crate::model::{Product, ProductId, ProductPayload};

/// The four calls the product view makes against the backend.
///
/// No retries and no timeouts beyond transport defaults.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /api/Products`
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /api/Products`; the backend assigns the id.
    async fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError>;

    /// `PUT /api/Products/{id}`; the response body is ignored.
    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<(), ApiError>;

    /// `DELETE /api/Products/{id}`; deleting twice may fail.
    async fn delete(&self, id: &ProductId) -> Result<(), ApiError>;
}
