pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod manager;
pub mod model;
pub mod ui;
