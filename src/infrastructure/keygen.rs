//! secp256k1 key generation using Alloy's local signer

use alloy::signers::local::PrivateKeySigner;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::{GeneratedKey, KeyGenerator};
use crate::error::KeyGenerationError;

/// Generates EVM accounts: EIP-55 checksummed `0x` address, private key as
/// 64 lowercase hex chars without prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmKeyGenerator;

impl EvmKeyGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Derive the account for a given 32-byte secret.
    pub fn from_secret(secret: &[u8]) -> Result<GeneratedKey, KeyGenerationError> {
        let signer = PrivateKeySigner::from_slice(secret)
            .map_err(|err| KeyGenerationError::InvalidKey(err.to_string()))?;
        Ok(GeneratedKey {
            address: signer.address().to_checksum(None),
            private_key: hex::encode(signer.to_bytes()),
        })
    }
}

impl KeyGenerator for EvmKeyGenerator {
    fn generate(&self) -> Result<GeneratedKey, KeyGenerationError> {
        let mut secret = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut secret)
            .map_err(|err| KeyGenerationError::Entropy(err.to_string()))?;
        Self::from_secret(&secret)
    }
}
