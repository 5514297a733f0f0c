//! Indexed vocabulary operations.
//!
//! Words are immutable once loaded: the only write path is the bulk import
//! used to seed the dictionary. Search is case-insensitive substring match,
//! and the empty search string matches all entries (the "browse all"
//! default).

use super::connection::StoreDb;
use crate::page::Paged;
use crate::Error;
use tokio_rusqlite::params;

/// Turn a raw search string into a LIKE pattern, escaping the LIKE
/// metacharacters so user input matches literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl StoreDb {
    /// Bulk-insert vocabulary words, ignoring ones already present.
    ///
    /// Returns the number of words actually inserted.
    pub async fn import_words(&self, words: &[String]) -> Result<u64, Error> {
        let words = words.to_vec();
        let imported = self
            .conn
            .call(move |conn| -> Result<u64, Error> {
                let tx = conn.transaction().map_err(Error::from)?;
                let mut inserted = 0u64;
                {
                    let mut stmt = tx.prepare("INSERT OR IGNORE INTO words (word) VALUES (?1)")?;
                    for word in &words {
                        inserted += stmt.execute(params![word])? as u64;
                    }
                }
                tx.commit().map_err(Error::from)?;
                Ok(inserted)
            })
            .await?;

        tracing::debug!("imported {imported} words");
        Ok(imported)
    }

    /// Fetch one window of matching words in lexical order.
    pub async fn find_words_page(&self, search: &str, skip: u64, limit: u64) -> Result<Vec<String>, Error> {
        let search = search.to_string();
        let limit = limit.min(i64::MAX as u64) as i64;
        let skip = skip.min(i64::MAX as u64) as i64;
        self.conn
            .call(move |conn| -> Result<Vec<String>, Error> {
                if search.is_empty() {
                    let mut stmt = conn.prepare("SELECT word FROM words ORDER BY word LIMIT ?1 OFFSET ?2")?;
                    let rows = stmt.query_map(params![limit, skip], |row| row.get(0))?;
                    rows.collect::<Result<Vec<String>, _>>().map_err(Error::from)
                } else {
                    let mut stmt = conn.prepare(
                        "SELECT word FROM words WHERE word LIKE ?1 ESCAPE '\\'
                         ORDER BY word LIMIT ?2 OFFSET ?3",
                    )?;
                    let rows = stmt.query_map(params![like_pattern(&search), limit, skip], |row| row.get(0))?;
                    rows.collect::<Result<Vec<String>, _>>().map_err(Error::from)
                }
            })
            .await
            .map_err(Error::from)
    }

    /// Count all matching words, unaffected by any page window.
    pub async fn count_words(&self, search: &str) -> Result<u64, Error> {
        let search = search.to_string();
        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count: i64 = if search.is_empty() {
                    conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?
                } else {
                    conn.query_row(
                        "SELECT COUNT(*) FROM words WHERE word LIKE ?1 ESCAPE '\\'",
                        params![like_pattern(&search)],
                        |row| row.get(0),
                    )?
                };
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}

/// Paged source over the vocabulary for one search pattern.
pub struct WordSearch {
    db: StoreDb,
    search: String,
}

impl WordSearch {
    pub fn new(db: StoreDb, search: impl Into<String>) -> Self {
        Self { db, search: search.into() }
    }
}

impl Paged for WordSearch {
    type Item = String;

    async fn fetch(&self, skip: u64, limit: u64) -> Result<Vec<String>, Error> {
        self.db.find_words_page(&self.search, skip, limit).await
    }

    async fn count(&self) -> Result<u64, Error> {
        self.db.count_words(&self.search).await
    }
}
