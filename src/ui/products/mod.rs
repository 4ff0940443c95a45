mod intent;
mod reducer;
mod state;

pub use intent::ProductIntent;
pub use reducer::{ProductReducer, ADDED_NOTICE, DELETED_NOTICE, UPDATED_NOTICE};
pub use state::ProductsState;
