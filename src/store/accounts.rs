use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use super::AccountStore;
use crate::domain::{split_stored_labels, AccountRecord};
use crate::error::{PersistenceError, StoreResult};

const SELECT_COLUMNS: &str = "SELECT id, address, private_key, alias, chain, label, memo, \
     total_value, created_at, updated_at FROM accounts";

/// SQLite-backed account store.
///
/// Holds a single connection, which is also the single writer.
#[derive(Debug)]
pub struct SqliteAccountStore {
    conn: Connection,
}

impl SqliteAccountStore {
    /// Open the database file. Schema is not touched; see [`Self::migrate`].
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).with_context(|| format!("open db {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        Ok(Self { conn })
    }

    /// Create the accounts table if it does not exist yet.
    pub fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS accounts (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    address     TEXT NOT NULL,
                    private_key TEXT NOT NULL,
                    alias       TEXT NOT NULL DEFAULT '',
                    chain       TEXT NOT NULL DEFAULT '',
                    label       TEXT NOT NULL DEFAULT '',
                    memo        TEXT NOT NULL DEFAULT '',
                    total_value REAL NOT NULL DEFAULT 0,
                    created_at  TEXT NOT NULL,
                    updated_at  TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_accounts_address ON accounts(address);",
            )
            .context("create accounts table")?;
        Ok(())
    }

    fn find(&self, id: i64) -> StoreResult<AccountRecord> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let record = self.conn.query_row(&sql, params![id], account_from_row)?;
        Ok(record)
    }
}

impl AccountStore for SqliteAccountStore {
    fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord> {
        if account.address.is_empty() {
            return Err(PersistenceError::MissingField("address"));
        }
        if account.private_key.is_empty() {
            return Err(PersistenceError::MissingField("private_key"));
        }

        self.conn.execute(
            "INSERT INTO accounts (address, private_key, alias, chain, label, memo, total_value, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now'), datetime('now'))",
            params![
                account.address,
                account.private_key,
                account.alias,
                account.chain,
                account.joined_labels(),
                account.memo,
                account.total_value,
            ],
        )?;
        self.find(self.conn.last_insert_rowid())
    }

    fn load_all(&self) -> StoreResult<Vec<AccountRecord>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(account_from_row(row)?);
        }
        Ok(out)
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRecord> {
    let label: String = row.get(5)?;
    Ok(AccountRecord {
        id: Some(row.get(0)?),
        address: row.get(1)?,
        private_key: row.get(2)?,
        alias: row.get(3)?,
        chain: row.get(4)?,
        labels: split_stored_labels(&label),
        memo: row.get(6)?,
        total_value: row.get(7)?,
        created_at: Some(row.get(8)?),
        updated_at: Some(row.get(9)?),
    })
}
