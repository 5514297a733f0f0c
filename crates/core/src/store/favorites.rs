//! Per-user favorited words.
//!
//! Favorites are unique per `(word, user_id)`. Re-favoriting returns the
//! existing record unchanged, original timestamp included; it does not
//! refresh `favorited_at`.

use super::connection::StoreDb;
use crate::page::Paged;
use crate::Error;
use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio_rusqlite::params;

/// One favorited word.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteRecord {
    pub word: String,
    pub user_id: String,
    pub favorited_at: String,
}

impl StoreDb {
    /// Add a favorite, or return the existing record if one is present.
    pub async fn upsert_favorite(&self, word: &str, user_id: &str) -> Result<FavoriteRecord, Error> {
        let word = word.to_string();
        let user_id = user_id.to_string();
        let favorited_at = Utc::now().to_rfc3339();

        self.conn
            .call(move |conn| -> Result<FavoriteRecord, Error> {
                conn.execute(
                    "INSERT INTO favorites (word, user_id, favorited_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(word, user_id) DO NOTHING",
                    params![word, user_id, favorited_at],
                )?;

                let record = conn.query_row(
                    "SELECT word, user_id, favorited_at FROM favorites WHERE word = ?1 AND user_id = ?2",
                    params![word, user_id],
                    |row| {
                        Ok(FavoriteRecord { word: row.get(0)?, user_id: row.get(1)?, favorited_at: row.get(2)? })
                    },
                )?;
                Ok(record)
            })
            .await
            .map_err(Error::from)
    }

    /// Remove a favorite, reporting whether a matching record existed.
    pub async fn delete_favorite(&self, word: &str, user_id: &str) -> Result<bool, Error> {
        let word = word.to_string();
        let user_id = user_id.to_string();
        self.conn
            .call(move |conn| -> Result<bool, Error> {
                let deleted = conn.execute(
                    "DELETE FROM favorites WHERE word = ?1 AND user_id = ?2",
                    params![word, user_id],
                )?;
                Ok(deleted > 0)
            })
            .await
            .map_err(Error::from)
    }

    /// Check whether a user has favorited a word.
    pub async fn is_favorite(&self, word: &str, user_id: &str) -> Result<bool, Error> {
        let word = word.to_string();
        let user_id = user_id.to_string();
        self.conn
            .call(move |conn| -> Result<bool, Error> {
                let found: bool = conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM favorites WHERE word = ?1 AND user_id = ?2)",
                    params![word, user_id],
                    |row| row.get(0),
                )?;
                Ok(found)
            })
            .await
            .map_err(Error::from)
    }

    /// Fetch one window of a user's favorites, most recent first.
    pub async fn favorites_page(&self, user_id: &str, skip: u64, limit: u64) -> Result<Vec<FavoriteRecord>, Error> {
        let user_id = user_id.to_string();
        let limit = limit.min(i64::MAX as u64) as i64;
        let skip = skip.min(i64::MAX as u64) as i64;
        self.conn
            .call(move |conn| -> Result<Vec<FavoriteRecord>, Error> {
                let mut stmt = conn.prepare(
                    "SELECT word, user_id, favorited_at FROM favorites
                     WHERE user_id = ?1
                     ORDER BY favorited_at DESC, id DESC
                     LIMIT ?2 OFFSET ?3",
                )?;
                let rows = stmt.query_map(params![user_id, limit, skip], |row| {
                    Ok(FavoriteRecord { word: row.get(0)?, user_id: row.get(1)?, favorited_at: row.get(2)? })
                })?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Error::from)
            })
            .await
            .map_err(Error::from)
    }

    /// Count all favorites for a user.
    pub async fn count_favorites(&self, user_id: &str) -> Result<u64, Error> {
        let user_id = user_id.to_string();
        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM favorites WHERE user_id = ?1",
                    params![user_id],
                    |row| row.get(0),
                )?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}

/// Paged source over one user's favorites.
pub struct UserFavorites {
    db: StoreDb,
    user_id: String,
}

impl UserFavorites {
    pub fn new(db: StoreDb, user_id: impl Into<String>) -> Self {
        Self { db, user_id: user_id.into() }
    }
}

impl Paged for UserFavorites {
    type Item = FavoriteRecord;

    async fn fetch(&self, skip: u64, limit: u64) -> Result<Vec<FavoriteRecord>, Error> {
        self.db.favorites_page(&self.user_id, skip, limit).await
    }

    async fn count(&self) -> Result<u64, Error> {
        self.db.count_favorites(&self.user_id).await
    }
}
