//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Alloy-based secp256k1 key generation

pub mod keygen;

pub use keygen::EvmKeyGenerator;
