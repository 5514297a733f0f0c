//! Generic keyed TTL cache.
//!
//! Values live behind a plain mutex-guarded map. The lock is never held
//! across an await point, so request-parallel callers only contend for the
//! duration of a map operation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Slot<V> {
    value: V,
    expires_at: Instant,
}

/// In-process key-value cache with per-entry TTL expiry.
///
/// An entry is visible only while `now < stored_at + ttl`; an expired entry
/// is treated as absent whether or not it has been physically evicted
/// (`get` evicts it on sight). There is no capacity bound and no eviction
/// policy beyond expiry.
///
/// Cache operations never fail the caller: a poisoned lock falls through to
/// the inner state instead of propagating the panic as an error.
pub struct KeyedCache<V> {
    slots: Mutex<HashMap<String, Slot<V>>>,
}

impl<V> Default for KeyedCache<V> {
    fn default() -> Self {
        Self { slots: Mutex::new(HashMap::new()) }
    }
}

impl<V: Clone> KeyedCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live entry, evicting it if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut slots = self.lock();
        match slots.get(key) {
            Some(slot) if Instant::now() < slot.expires_at => Some(slot.value.clone()),
            Some(_) => {
                slots.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value under `key`, replacing any previous entry and
    /// restarting its lifetime.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        self.lock().insert(key.to_string(), Slot { value, expires_at });
    }

    /// Number of physically present entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no entries are physically present.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> u64 {
        let mut slots = self.lock();
        let before = slots.len();
        let now = Instant::now();
        slots.retain(|_, slot| now < slot.expires_at);
        (before - slots.len()) as u64
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot<V>>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
