//! Account creation pipeline
//!
//! Key generation -> label normalization -> persistence. Nothing is written
//! unless key generation succeeds, and nothing is retried.

use tracing::{error, info};

use crate::core::AccountSubmitted;
use crate::domain::{parse_labels, AccountRecord, KeyGenerator};
use crate::error::{PersistenceError, PipelineError};
use crate::store::AccountStore;

/// Creates accounts from submitted form values.
///
/// Owns its key generator and store; the app passes it around explicitly.
#[derive(Debug)]
pub struct AccountPipeline<K, S> {
    keys: K,
    store: S,
}

impl<K: KeyGenerator, S: AccountStore> AccountPipeline<K, S> {
    pub fn new(keys: K, store: S) -> Self {
        Self { keys, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key_generator(&self) -> &K {
        &self.keys
    }

    /// Generate a key pair and persist a new account built from `submitted`.
    ///
    /// On success the caller should replace its form with a fresh one; on
    /// error the form must be left as is so the operator can resubmit.
    pub fn on_submit(&self, submitted: &AccountSubmitted) -> Result<AccountRecord, PipelineError> {
        let key = self.keys.generate().map_err(|err| {
            error!(error = %err, "key generation failed");
            err
        })?;
        info!(address = %key.address, "generated account");

        let record = AccountRecord {
            alias: submitted.alias.clone(),
            chain: submitted.chain.clone(),
            labels: parse_labels(&submitted.label),
            memo: submitted.memo.clone(),
            total_value: 0.0,
            ..AccountRecord::new(key.address, key.private_key)
        };

        let saved = self.store.save(&record).map_err(|err| {
            error!(error = %err, address = %record.address, "failed to save account");
            err
        })?;
        info!(
            id = saved.id.unwrap_or_default(),
            alias = %saved.alias,
            address = %saved.address,
            "account saved"
        );
        Ok(saved)
    }

    /// Everything in the store, for the account list.
    pub fn accounts(&self) -> Result<Vec<AccountRecord>, PersistenceError> {
        self.store.load_all()
    }
}
