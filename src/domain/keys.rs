//! Key generation contract

use crate::error::KeyGenerationError;

/// A freshly generated key pair, rendered for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub address: String,
    pub private_key: String,
}

/// Source of new account key pairs.
///
/// Implementations only consume system entropy; the address and private key
/// are pure functions of the generated secret.
pub trait KeyGenerator {
    fn generate(&self) -> Result<GeneratedKey, KeyGenerationError>;
}

impl<T: KeyGenerator + ?Sized> KeyGenerator for &T {
    fn generate(&self) -> Result<GeneratedKey, KeyGenerationError> {
        (**self).generate()
    }
}
