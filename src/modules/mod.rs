//! UI Modules
//!
//! Each module owns its own state and key handling:
//! - form: account creation form shown in the left pane

pub mod form;
