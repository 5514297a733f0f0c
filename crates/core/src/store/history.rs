//! Per-user search history.
//!
//! History is append-only: every successful lookup records one row,
//! duplicates included, and nothing deletes them.

use super::connection::StoreDb;
use crate::page::Paged;
use crate::Error;
use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio_rusqlite::params;

/// One recorded word lookup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryRecord {
    pub word: String,
    pub user_id: String,
    pub searched_at: String,
}

impl StoreDb {
    /// Append a history record for a lookup, returning it.
    pub async fn insert_history(&self, word: &str, user_id: &str) -> Result<HistoryRecord, Error> {
        let record = HistoryRecord {
            word: word.to_string(),
            user_id: user_id.to_string(),
            searched_at: Utc::now().to_rfc3339(),
        };

        let row = record.clone();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO history (word, user_id, searched_at) VALUES (?1, ?2, ?3)",
                    params![row.word, row.user_id, row.searched_at],
                )?;
                Ok(())
            })
            .await?;

        Ok(record)
    }

    /// Fetch one window of a user's history, most recent first.
    pub async fn history_page(&self, user_id: &str, skip: u64, limit: u64) -> Result<Vec<HistoryRecord>, Error> {
        let user_id = user_id.to_string();
        let limit = limit.min(i64::MAX as u64) as i64;
        let skip = skip.min(i64::MAX as u64) as i64;
        self.conn
            .call(move |conn| -> Result<Vec<HistoryRecord>, Error> {
                let mut stmt = conn.prepare(
                    "SELECT word, user_id, searched_at FROM history
                     WHERE user_id = ?1
                     ORDER BY searched_at DESC, id DESC
                     LIMIT ?2 OFFSET ?3",
                )?;
                let rows = stmt.query_map(params![user_id, limit, skip], |row| {
                    Ok(HistoryRecord { word: row.get(0)?, user_id: row.get(1)?, searched_at: row.get(2)? })
                })?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Error::from)
            })
            .await
            .map_err(Error::from)
    }

    /// Count all history rows for a user.
    pub async fn count_history(&self, user_id: &str) -> Result<u64, Error> {
        let user_id = user_id.to_string();
        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM history WHERE user_id = ?1",
                    params![user_id],
                    |row| row.get(0),
                )?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}

/// Paged source over one user's history.
pub struct UserHistory {
    db: StoreDb,
    user_id: String,
}

impl UserHistory {
    pub fn new(db: StoreDb, user_id: impl Into<String>) -> Self {
        Self { db, user_id: user_id.into() }
    }
}

impl Paged for UserHistory {
    type Item = HistoryRecord;

    async fn fetch(&self, skip: u64, limit: u64) -> Result<Vec<HistoryRecord>, Error> {
        self.db.history_page(&self.user_id, skip, limit).await
    }

    async fn count(&self) -> Result<u64, Error> {
        self.db.count_history(&self.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{self, PageRequest};

    #[tokio::test]
    async fn test_insert_and_count() {
        let db = StoreDb::open_in_memory().await.unwrap();
        let record = db.insert_history("apple", "u1").await.unwrap();
        assert_eq!(record.word, "apple");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.searched_at).is_ok());
        assert_eq!(db.count_history("u1").await.unwrap(), 1);
        assert_eq!(db.count_history("u2").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let db = StoreDb::open_in_memory().await.unwrap();
        db.insert_history("apple", "u1").await.unwrap();
        db.insert_history("apple", "u1").await.unwrap();
        assert_eq!(db.count_history("u1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_page_is_most_recent_first() {
        let db = StoreDb::open_in_memory().await.unwrap();
        for word in ["first", "second", "third"] {
            db.insert_history(word, "u1").await.unwrap();
        }

        let page = db.history_page("u1", 0, 2).await.unwrap();
        let words: Vec<&str> = page.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["third", "second"]);
    }

    #[tokio::test]
    async fn test_history_is_scoped_per_user() {
        let db = StoreDb::open_in_memory().await.unwrap();
        db.insert_history("apple", "u1").await.unwrap();
        db.insert_history("pear", "u2").await.unwrap();

        let source = UserHistory::new(db, "u1");
        let result = page::execute(&source, PageRequest::new(1, 10).unwrap()).await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].word, "apple");
    }
}
