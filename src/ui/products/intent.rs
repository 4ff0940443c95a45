use crate::model::{DraftField, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductIntent {
    /// A list request went out.
    LoadStarted,
    /// The list request returned; replaces the local collection.
    Loaded { products: Vec<Product> },
    /// The list request failed; the stale collection stays.
    LoadFailed,
    /// Reset the draft and open the add form.
    BeginAdd,
    /// Copy `product` into the draft and open the edit form.
    BeginEdit { product: Product },
    UpdateDraftField { field: DraftField, value: String },
    /// Reset the draft and close whichever form is open.
    CloseModal,
    AddSucceeded,
    UpdateSucceeded,
    DeleteSucceeded,
}

impl Intent for ProductIntent {}
