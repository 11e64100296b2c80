pub mod action;
pub mod router;

pub use action::{AccountSubmitted, Action};
pub use router::{InputRouter, Pane, KEY_HELP};
