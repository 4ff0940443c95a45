use crate::model::{Product, ProductDraft};
use crate::ui::mvi::UiState;

/// State of the product view.
///
/// The two modal flags are independent; nothing stops both from being set.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub show_add_modal: bool,
    pub show_edit_modal: bool,
    pub draft: ProductDraft,
    /// Success message from the last mutation, shown in the footer.
    pub notice: Option<String>,
}

/// Loading until the first list request settles.
impl Default for ProductsState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            show_add_modal: false,
            show_edit_modal: false,
            draft: ProductDraft::empty(),
            notice: None,
        }
    }
}

impl UiState for ProductsState {}

impl ProductsState {
    pub fn is_modal_open(&self) -> bool {
        self.show_add_modal || self.show_edit_modal
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }
}
