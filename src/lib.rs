//! Terminal tool for creating and tracking EVM accounts.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod modules;
pub mod services;
pub mod store;
pub mod ui;
