//! Cache key rendering.
//!
//! Key formats are part of the observable contract: transport layers report
//! hit/miss per key, and operators can reason about what a key addresses.

use crate::PageRequest;

/// Key for a single-word dictionary lookup.
pub fn lookup_key(word: &str) -> String {
    format!("search:{word}")
}

/// Key for one page of an entry search, stable across identical requests.
pub fn entries_key(search: &str, req: PageRequest) -> String {
    format!("entries:{search}:{}:{}", req.limit(), req.page())
}
