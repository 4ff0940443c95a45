mod common;

use common::{product, sample_products};
use prodman::model::{DraftField, ProductDraft, ProductId};
use prodman::ui::mvi::Reducer;
use prodman::ui::products::{
    ProductIntent, ProductReducer, ProductsState, ADDED_NOTICE, DELETED_NOTICE, UPDATED_NOTICE,
};

fn loaded() -> ProductsState {
    ProductReducer::reduce(
        ProductsState::default(),
        ProductIntent::Loaded {
            products: sample_products(),
        },
    )
}

#[test]
fn load_started_sets_loading() {
    let state = ProductReducer::reduce(loaded(), ProductIntent::LoadStarted);
    assert!(state.loading);
    assert_eq!(state.products.len(), 3);
}

#[test]
fn loaded_replaces_collection() {
    let state = ProductReducer::reduce(
        loaded(),
        ProductIntent::Loaded {
            products: vec![product(9, "Nut", "0.05", 1000)],
        },
    );
    assert!(!state.loading);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].id, ProductId::Number(9));
}

#[test]
fn load_failed_keeps_stale_collection() {
    let state = ProductReducer::reduce(loaded(), ProductIntent::LoadStarted);
    let state = ProductReducer::reduce(state, ProductIntent::LoadFailed);
    assert!(!state.loading);
    assert_eq!(state.products, sample_products());
}

#[test]
fn begin_add_resets_draft_and_clears_notice() {
    let mut state = loaded();
    state.draft.name = "leftover".to_string();
    state.notice = Some(DELETED_NOTICE.to_string());

    let state = ProductReducer::reduce(state, ProductIntent::BeginAdd);
    assert!(state.show_add_modal);
    assert!(!state.show_edit_modal);
    assert!(state.draft.is_empty());
    assert_eq!(state.notice, None);
}

#[test]
fn begin_edit_copies_product() {
    let target = product(42, "Widget", "9.99", 3);
    let state = ProductReducer::reduce(
        loaded(),
        ProductIntent::BeginEdit {
            product: target.clone(),
        },
    );
    assert!(state.show_edit_modal);
    assert_eq!(state.draft, ProductDraft::from_product(&target));
}

#[test]
fn update_field_touches_only_that_field() {
    let state = ProductReducer::reduce(loaded(), ProductIntent::BeginAdd);
    let state = ProductReducer::reduce(
        state,
        ProductIntent::UpdateDraftField {
            field: DraftField::Price,
            value: "abc".to_string(),
        },
    );
    assert_eq!(state.draft.price, "abc");
    assert_eq!(state.draft.name, "");
    assert_eq!(state.draft.quantity, "");
}

#[test]
fn both_modal_flags_can_be_set() {
    let state = ProductReducer::reduce(loaded(), ProductIntent::BeginAdd);
    let state = ProductReducer::reduce(
        state,
        ProductIntent::BeginEdit {
            product: product(1, "Widget", "9.99", 3),
        },
    );
    assert!(state.show_add_modal);
    assert!(state.show_edit_modal);

    let state = ProductReducer::reduce(state, ProductIntent::CloseModal);
    assert!(!state.is_modal_open());
    assert!(state.draft.is_empty());
}

#[test]
fn add_succeeded_closes_add_form_with_notice() {
    let state = ProductReducer::reduce(loaded(), ProductIntent::BeginAdd);
    let state = ProductReducer::reduce(
        state,
        ProductIntent::UpdateDraftField {
            field: DraftField::Name,
            value: "Widget".to_string(),
        },
    );
    let state = ProductReducer::reduce(state, ProductIntent::AddSucceeded);
    assert!(!state.show_add_modal);
    assert!(state.draft.is_empty());
    assert_eq!(state.notice.as_deref(), Some(ADDED_NOTICE));
}

#[test]
fn update_succeeded_closes_edit_form_with_notice() {
    let state = ProductReducer::reduce(
        loaded(),
        ProductIntent::BeginEdit {
            product: product(2, "Gadget", "24.50", 12),
        },
    );
    let state = ProductReducer::reduce(state, ProductIntent::UpdateSucceeded);
    assert!(!state.show_edit_modal);
    assert!(state.draft.is_empty());
    assert_eq!(state.notice.as_deref(), Some(UPDATED_NOTICE));
}

#[test]
fn delete_succeeded_only_sets_notice() {
    let before = loaded();
    let state = ProductReducer::reduce(before.clone(), ProductIntent::DeleteSucceeded);
    assert_eq!(state.notice.as_deref(), Some(DELETED_NOTICE));
    assert_eq!(state.products, before.products);
    assert!(!state.is_modal_open());
}
