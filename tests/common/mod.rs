//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use prodman::api::{ApiError, ProductsApi};
use prodman::manager::Confirm;
use prodman::model::{Product, ProductId, ProductPayload};
use ratatui::buffer::Buffer;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// One call the controller made against the remote client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(ProductPayload),
    Update(ProductId, ProductPayload),
    Delete(ProductId),
}

#[derive(Default)]
struct FakeInner {
    products: Vec<Product>,
    calls: Vec<ApiCall>,
    failing: bool,
    next_id: i64,
}

/// In-memory stand-in for the Products service that records every call.
///
/// Clones share state, so a test can keep one handle while the manager owns
/// another.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .filter_map(|p| match p.id {
                ProductId::Number(id) => Some(id),
                ProductId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        let api = Self::default();
        {
            let mut inner = api.inner.lock().unwrap();
            inner.products = products;
            inner.next_id = next_id;
        }
        api
    }

    /// Make every subsequent call fail with HTTP 500.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.lock().unwrap().products.clone()
    }

    fn record(&self, call: ApiCall, method: &'static str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing {
            return Err(server_error(method, 500));
        }
        Ok(())
    }
}

pub fn server_error(method: &'static str, status: u16) -> ApiError {
    ApiError::Server {
        method,
        url: "http://fake/api/Products".to_string(),
        status,
        body: String::new(),
    }
}

#[async_trait]
impl ProductsApi for FakeApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.record(ApiCall::List, "GET")?;
        Ok(self.products())
    }

    async fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.record(ApiCall::Create(payload.clone()), "POST")?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id.max(1);
        inner.next_id = id + 1;
        let product = Product {
            id: ProductId::Number(id),
            name: payload.name.clone(),
            price: payload.price,
            quantity: payload.quantity,
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<(), ApiError> {
        self.record(ApiCall::Update(id.clone(), payload.clone()), "PUT")?;
        let mut inner = self.inner.lock().unwrap();
        match inner.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.name = payload.name.clone();
                product.price = payload.price;
                product.quantity = payload.quantity;
                Ok(())
            }
            None => Err(server_error("PUT", 404)),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.clone()), "DELETE")?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.products.len();
        inner.products.retain(|p| &p.id != id);
        if inner.products.len() == before {
            return Err(server_error("DELETE", 404));
        }
        Ok(())
    }
}

/// Confirmation step with a fixed answer that counts how often it was asked.
pub struct ScriptedConfirm {
    pub answer: bool,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: Vec::new(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            asked: Vec::new(),
        }
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answer
    }
}

pub fn product(id: i64, name: &str, price: &str, quantity: i64) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        price: Decimal::from_str(price).expect("valid decimal"),
        quantity,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Widget", "9.99", 3),
        product(2, "Gadget", "24.50", 12),
        product(3, "Sprocket", "0.75", 400),
    ]
}

/// Buffer contents as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
