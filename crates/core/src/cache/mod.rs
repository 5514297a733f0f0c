//! In-process TTL caches for dictionary lookups and entry listings.
//!
//! Two compositions share one primitive:
//!
//! - [`KeyedCache`]: generic keyed value cache with per-entry TTL expiry
//! - [`PagedCache`]: KeyedCache over whole [`crate::PageResult`] pages,
//!   used by the entry-search path only
//!
//! Expiry is the only eviction policy. There is no single-flight
//! de-duplication: concurrent misses on the same key may each call
//! upstream, and the last writer wins.

pub mod key;
pub mod keyed;
pub mod paged;

pub use crate::Error;

pub use keyed::KeyedCache;
pub use paged::PagedCache;
