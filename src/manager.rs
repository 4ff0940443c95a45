//! View controller: runs the list → render → mutate → re-list loop.
//!
//! Remote calls go through [`ProductsApi`]; every state change goes through
//! [`ProductReducer`] and is published on a watch channel so the UI can keep
//! drawing while a request is in flight. Failures are logged and otherwise
//! show up only as the absence of the expected state change.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::api::ProductsApi;
use crate::model::{DraftError, DraftField, Product, ProductId};
use crate::ui::mvi::Reducer;
use crate::ui::products::{ProductIntent, ProductReducer, ProductsState};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Blocking yes/no question asked before a destructive call.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, message: &str) -> bool;
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct ProductManager<A> {
    api: A,
    state: ProductsState,
    publisher: watch::Sender<ProductsState>,
}

impl<A: ProductsApi> ProductManager<A> {
    pub fn new(api: A) -> Self {
        let state = ProductsState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            api,
            state,
            publisher,
        }
    }

    pub fn state(&self) -> &ProductsState {
        &self.state
    }

    /// Receiver that sees every state the reducer produces from now on.
    pub fn subscribe(&self) -> watch::Receiver<ProductsState> {
        self.publisher.subscribe()
    }

    /// Re-list products. Loading is cleared whether or not the call succeeds.
    pub async fn refresh(&mut self) {
        self.dispatch(ProductIntent::LoadStarted);
        match self.api.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.dispatch(ProductIntent::Loaded { products });
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.error_type(), "Error fetching products");
                self.dispatch(ProductIntent::LoadFailed);
            }
        }
    }

    pub fn begin_add(&mut self) {
        self.dispatch(ProductIntent::BeginAdd);
    }

    pub fn begin_edit(&mut self, product: Product) {
        self.dispatch(ProductIntent::BeginEdit { product });
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: String) {
        self.dispatch(ProductIntent::UpdateDraftField { field, value });
    }

    pub fn close_modal(&mut self) {
        self.dispatch(ProductIntent::CloseModal);
    }

    /// Create the drafted product. The add form stays open on failure.
    pub async fn submit_add(&mut self) {
        let payload = match self.state.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "Error adding product");
                return;
            }
        };

        match self.api.create(&payload).await {
            Ok(created) => {
                tracing::info!(id = %created.id, name = %created.name, "Product added");
                self.dispatch(ProductIntent::AddSucceeded);
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.error_type(), "Error adding product");
            }
        }
    }

    /// Save the drafted changes under the draft's id. The edit form stays
    /// open on failure.
    pub async fn submit_edit(&mut self) {
        let payload = match self.state.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "Error updating product");
                return;
            }
        };
        let Some(id) = payload.id.clone() else {
            let err = DraftError::MissingId;
            tracing::error!(error = %err, "Error updating product");
            return;
        };

        match self.api.update(&id, &payload).await {
            Ok(()) => {
                tracing::info!(%id, "Product updated");
                self.dispatch(ProductIntent::UpdateSucceeded);
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(
                    %id,
                    error = %err,
                    kind = err.error_type(),
                    "Error updating product"
                );
            }
        }
    }

    /// Delete `id` after the user confirms. Declining makes no call.
    pub async fn remove_product<C>(&mut self, id: &ProductId, confirm: &mut C)
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT).await {
            tracing::debug!(%id, "Delete declined");
            return;
        }
        self.remove_confirmed(id).await;
    }

    /// Delete `id` once the user has already agreed, then re-list.
    pub async fn remove_confirmed(&mut self, id: &ProductId) {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "Product deleted");
                self.dispatch(ProductIntent::DeleteSucceeded);
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(
                    %id,
                    error = %err,
                    kind = err.error_type(),
                    "Error deleting product"
                );
            }
        }
    }

    fn dispatch(&mut self, intent: ProductIntent) {
        dispatch_mvi!(self, state, ProductReducer, intent);
        self.publisher.send_replace(self.state.clone());
    }
}
