//! Model-View-Intent primitives for the product view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / reply ───┘
//! ```
//!
//! - **State**: everything the view needs to draw one frame
//! - **Intent**: a user action or the outcome of a remote call
//! - **Reducer**: pure `(State, Intent) -> State`; remote calls live elsewhere

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

