//! Durable account storage

mod accounts;

pub use accounts::SqliteAccountStore;

use crate::domain::AccountRecord;
use crate::error::StoreResult;

/// Append-only account persistence.
///
/// Backends accept a single writer; callers must not overlap `save` calls.
pub trait AccountStore {
    /// Insert a new account and return the stored copy with its assigned id
    /// and timestamps. Address and private key must be non-empty.
    fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord>;

    /// All stored accounts, oldest first.
    fn load_all(&self) -> StoreResult<Vec<AccountRecord>>;
}

impl<T: AccountStore + ?Sized> AccountStore for &T {
    fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord> {
        (**self).save(account)
    }

    fn load_all(&self) -> StoreResult<Vec<AccountRecord>> {
        (**self).load_all()
    }
}
