//! Account domain models and contracts
//!
//! Types and traits here are independent of the key derivation scheme and
//! of the storage backend.

pub mod account;
pub mod keys;

pub use account::{join_labels, parse_labels, split_stored_labels, AccountRecord};
pub use keys::{GeneratedKey, KeyGenerator};
