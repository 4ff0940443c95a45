use crate::model::ProductDraft;
use crate::ui::mvi::Reducer;
use crate::ui::products::intent::ProductIntent;
use crate::ui::products::state::ProductsState;

pub const ADDED_NOTICE: &str = "Product added successfully!";
pub const UPDATED_NOTICE: &str = "Product updated successfully!";
pub const DELETED_NOTICE: &str = "Product deleted successfully!";

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductsState;
    type Intent = ProductIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductIntent::LoadStarted => ProductsState {
                loading: true,
                ..state
            },
            ProductIntent::Loaded { products } => ProductsState {
                products,
                loading: false,
                ..state
            },
            ProductIntent::LoadFailed => ProductsState {
                loading: false,
                ..state
            },
            ProductIntent::BeginAdd => ProductsState {
                draft: ProductDraft::empty(),
                show_add_modal: true,
                notice: None,
                ..state
            },
            ProductIntent::BeginEdit { product } => ProductsState {
                draft: ProductDraft::from_product(&product),
                show_edit_modal: true,
                notice: None,
                ..state
            },
            ProductIntent::UpdateDraftField { field, value } => {
                let mut draft = state.draft;
                draft.set_field(field, value);
                ProductsState { draft, ..state }
            }
            ProductIntent::CloseModal => ProductsState {
                draft: ProductDraft::empty(),
                show_add_modal: false,
                show_edit_modal: false,
                ..state
            },
            ProductIntent::AddSucceeded => ProductsState {
                draft: ProductDraft::empty(),
                show_add_modal: false,
                notice: Some(ADDED_NOTICE.to_string()),
                ..state
            },
            ProductIntent::UpdateSucceeded => ProductsState {
                draft: ProductDraft::empty(),
                show_edit_modal: false,
                notice: Some(UPDATED_NOTICE.to_string()),
                ..state
            },
            ProductIntent::DeleteSucceeded => ProductsState {
                notice: Some(DELETED_NOTICE.to_string()),
                ..state
            },
        }
    }
}
