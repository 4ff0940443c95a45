//! Terminal presentation of the product view.
//!
//! [`runtime::run`] owns the terminal and the event loop; everything else is
//! state ([`app`], [`products`]), input mapping ([`input`]) or pure drawing.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod products;
pub mod prompt;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
