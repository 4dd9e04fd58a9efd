//! Database initialization, table definitions and the storage handle
//!
//! Records live in an embedded redb file. Two index tables enforce the
//! uniqueness of URLs and aliases; writes touching them happen inside a
//! single write transaction, which redb serialises, so a conflicting
//! insert is detected and rolled back atomically.

use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use tracing::debug;

use crate::error::AppError;
use crate::model::ShortenedUrl;

/// Main table for storing URL records
///
/// Key: record id
/// Value: JSON-serialized ShortenedUrl
///
/// Example:
/// - Key: 1
/// - Value: '{"id":1,"url":"https://example.com","shorten_url":"exampl"}'
///
/// Ids increase monotonically, so iteration order is insertion order.
pub const TABLE_URLS: TableDefinition<u64, &str> = TableDefinition::new("urls_v1");

/// Alias index: alias -> record id
pub const TABLE_ALIASES: TableDefinition<&str, u64> = TableDefinition::new("aliases_v1");

/// Original URL index: url -> record id
pub const TABLE_ORIGINALS: TableDefinition<&str, u64> = TableDefinition::new("originals_v1");

/// Bookkeeping values such as the id sequence
pub const TABLE_META: TableDefinition<&str, u64> = TableDefinition::new("meta_v1");

const NEXT_ID_KEY: &str = "next_id";

/// Initializes the embedded database and creates required tables
///
/// # Arguments
///
/// * `db_path` - File path where the database should be stored (e.g., "urls.db")
///
/// # Example
///
/// ```no_run
/// # use urlalias::database::init_db;
/// let db = init_db("urls.db").expect("Failed to initialize database");
/// ```
pub fn init_db(db_path: &str) -> Result<Database, redb::Error> {
    let db = Database::create(db_path)?;

    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_URLS)?;
        write_txn.open_table(TABLE_ALIASES)?;
        write_txn.open_table(TABLE_ORIGINALS)?;
        write_txn.open_table(TABLE_META)?;
    }
    write_txn.commit()?;

    Ok(db)
}

fn decode(raw: &str) -> Result<ShortenedUrl, serde_json::Error> {
    serde_json::from_str(raw)
}

fn dangling_index(what: &str, id: u64) -> AppError {
    let reason = format!("{what} index points at missing record {id}");
    AppError::Storage(redb::StorageError::Corrupted(reason).into())
}

/// Cloneable handle to the URL tables
#[derive(Clone)]
pub struct UrlStore {
    db: Arc<Database>,
}

impl UrlStore {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Opens (or creates) the database at `db_path`
    pub fn open(db_path: &str) -> Result<Self, redb::Error> {
        Ok(Self::new(init_db(db_path)?))
    }

    /// Inserts a record unless `url` or `alias` is already taken
    ///
    /// Both index inserts report the previous owner of the key. If either
    /// key was taken the transaction is aborted, so a failed insert leaves
    /// no trace, not even a consumed id.
    pub fn insert_unique(&self, url: &str, alias: &str) -> Result<ShortenedUrl, AppError> {
        let write_txn = self.db.begin_write()?;

        let outcome = {
            let mut urls = write_txn.open_table(TABLE_URLS)?;
            let mut aliases = write_txn.open_table(TABLE_ALIASES)?;
            let mut originals = write_txn.open_table(TABLE_ORIGINALS)?;
            let mut meta = write_txn.open_table(TABLE_META)?;

            let id = meta.get(NEXT_ID_KEY)?.map(|g| g.value()).unwrap_or(1);

            let previous_url = originals.insert(url, id)?.map(|g| g.value());
            if let Some(existing_id) = previous_url {
                let existing = urls
                    .get(existing_id)?
                    .map(|g| decode(g.value()))
                    .transpose()?
                    .ok_or_else(|| dangling_index("url", existing_id))?;
                Err(AppError::DuplicateUrl {
                    alias: existing.shorten_url,
                })
            } else {
                let previous_alias = aliases.insert(alias, id)?.map(|g| g.value());
                if previous_alias.is_some() {
                    Err(AppError::DuplicateAlias {
                        alias: alias.to_string(),
                    })
                } else {
                    let record = ShortenedUrl {
                        id,
                        url: url.to_string(),
                        shorten_url: alias.to_string(),
                    };
                    let record_json = serde_json::to_string(&record)?;
                    urls.insert(id, record_json.as_str())?;
                    meta.insert(NEXT_ID_KEY, id + 1)?;
                    Ok(record)
                }
            }
        };

        match outcome {
            Ok(record) => {
                write_txn.commit()?;
                debug!(id = record.id, alias = %record.shorten_url, "Stored record");
                Ok(record)
            }
            Err(err) => {
                write_txn.abort()?;
                Err(err)
            }
        }
    }

    pub fn find_by_alias(&self, alias: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let read_txn = self.db.begin_read()?;
        let aliases = read_txn.open_table(TABLE_ALIASES)?;

        let Some(id) = aliases.get(alias)?.map(|g| g.value()) else {
            return Ok(None);
        };

        let urls = read_txn.open_table(TABLE_URLS)?;
        let record = urls.get(id)?.map(|g| decode(g.value())).transpose()?;
        Ok(record)
    }

    /// Deletes the record owned by `alias` along with both index entries
    ///
    /// Returns the deleted record, or `None` when the alias is unknown.
    pub fn remove_by_alias(&self, alias: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let write_txn = self.db.begin_write()?;

        let removed = {
            let mut urls = write_txn.open_table(TABLE_URLS)?;
            let mut aliases = write_txn.open_table(TABLE_ALIASES)?;
            let mut originals = write_txn.open_table(TABLE_ORIGINALS)?;

            let id = aliases.remove(alias)?.map(|g| g.value());
            match id {
                Some(id) => {
                    let record = urls.remove(id)?.map(|g| decode(g.value())).transpose()?;
                    if let Some(record) = &record {
                        originals.remove(record.url.as_str())?;
                    }
                    record
                }
                None => None,
            }
        };

        if removed.is_some() {
            write_txn.commit()?;
        } else {
            write_txn.abort()?;
        }

        Ok(removed)
    }

    /// Lists records in id order
    ///
    /// `window` is an `(offset, limit)` pair; `None` returns everything.
    pub fn list(&self, window: Option<(usize, usize)>) -> Result<Vec<ShortenedUrl>, AppError> {
        let (offset, limit) = window.unwrap_or((0, usize::MAX));

        let read_txn = self.db.begin_read()?;
        let urls = read_txn.open_table(TABLE_URLS)?;

        let records = urls
            .iter()?
            .skip(offset)
            .take(limit)
            .map(|entry| -> Result<ShortenedUrl, AppError> {
                let (_, value) = entry?;
                Ok(decode(value.value())?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
