//! Product entity, the editable form draft, and the payload sent upstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Backend-assigned product identifier.
///
/// The Products service owns identifiers; the client only echoes them back,
/// so both numeric and string ids are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(value) => write!(f, "{}", value),
            ProductId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// A product as returned by `GET /api/Products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
}

/// JSON body for create and update requests.
///
/// `id` is omitted on create and carried on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
}

/// Form fields of the add/edit dialogs, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Price,
    Quantity,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Price, DraftField::Quantity];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Price => "Price",
            DraftField::Quantity => "Quantity",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Price,
            DraftField::Price => DraftField::Quantity,
            DraftField::Quantity => DraftField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::Name => DraftField::Quantity,
            DraftField::Price => DraftField::Name,
            DraftField::Quantity => DraftField::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{field} '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Draft has no product id")]
    MissingId,
}

/// Scratch copy of a product while a form is open.
///
/// Fields hold the raw text typed by the user; nothing is parsed until
/// [`ProductDraft::to_payload`] runs at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl ProductDraft {
    /// The blank template used by the add form and after every reset.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Quantity => &self.quantity,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Quantity => self.quantity = value,
        }
    }

    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        let price = parse_price(self.price.trim()).ok_or_else(|| DraftError::InvalidNumber {
            field: "Price",
            value: self.price.clone(),
        })?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| DraftError::InvalidNumber {
                field: "Quantity",
                value: self.quantity.clone(),
            })?;

        Ok(ProductPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            price,
            quantity,
        })
    }
}

/// Plain decimal, or exponent notation such as `1e3` or `2.5E-1`.
fn parse_price(text: &str) -> Option<Decimal> {
    text.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}
