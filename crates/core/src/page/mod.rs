//! Pagination types and the paged-query executor.
//!
//! Entry search, history, and favorites all page the same way: fetch one
//! `(skip, limit)` window from a filtered, ordered source, count the total
//! matches under the same filter, and derive the navigation fields from
//! `(total, limit, page)`. The two operations are not atomic; under
//! concurrent writes `items` and `total` may be transiently inconsistent,
//! which is accepted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated page window request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Build a request, clamping `page` to at least 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` when `limit` is zero, or when the
    /// requested window starts past what a signed 64-bit offset can
    /// address.
    pub fn new(page: u64, limit: u64) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::Validation("limit must be greater than 0".into()));
        }
        let page = page.max(1);
        let addressable = limit <= i64::MAX as u64
            && (page - 1).checked_mul(limit).is_some_and(|skip| skip <= i64::MAX as u64);
        if !addressable {
            return Err(Error::Validation("page window out of range".into()));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset of the first item in the window. Cannot overflow: the
    /// constructor bounds `(page - 1) * limit` to `i64::MAX`.
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// One page of a filtered, counted collection.
///
/// `total` is the full match count irrespective of the window, so
/// `items.len() <= limit` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub from_cache: bool,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// A filterable, countable collection that can serve page windows.
///
/// Implementors capture the filter (search pattern, user id) and the sort
/// order; `fetch` and `count` must apply the same filter.
pub trait Paged {
    type Item;

    /// Fetch up to `limit` items starting at `skip`, in source order.
    fn fetch(&self, skip: u64, limit: u64) -> impl Future<Output = Result<Vec<Self::Item>, Error>> + Send;

    /// Count all matches, unaffected by the page window.
    fn count(&self) -> impl Future<Output = Result<u64, Error>> + Send;
}

/// Execute a page request against a source.
pub async fn execute<S: Paged>(source: &S, req: PageRequest) -> Result<PageResult<S::Item>, Error> {
    let items = source.fetch(req.skip(), req.limit()).await?;
    let total = source.count().await?;

    Ok(PageResult { items, total, page: req.page(), limit: req.limit(), from_cache: false })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed in-memory source, word-ordered.
    struct Vocabulary(Vec<&'static str>);

    impl Paged for Vocabulary {
        type Item = String;

        async fn fetch(&self, skip: u64, limit: u64) -> Result<Vec<String>, Error> {
            Ok(self
                .0
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .map(|w| w.to_string())
                .collect())
        }

        async fn count(&self) -> Result<u64, Error> {
            Ok(self.0.len() as u64)
        }
    }

    fn twelve_words() -> Vocabulary {
        Vocabulary(vec![
            "ash", "bark", "cedar", "dew", "elm", "fern", "grove", "hazel", "ivy", "juniper", "kelp", "larch",
        ])
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = PageRequest::new(1, 0);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_window_past_i64_offset_rejected() {
        assert!(matches!(PageRequest::new(u64::MAX, 2), Err(Error::Validation(_))));
        assert!(matches!(PageRequest::new(2, u64::MAX), Err(Error::Validation(_))));
        assert!(matches!(PageRequest::new(1, u64::MAX), Err(Error::Validation(_))));
        // The largest representable window is still accepted.
        let req = PageRequest::new(1, i64::MAX as u64).unwrap();
        assert_eq!(req.skip(), 0);
    }

    #[test]
    fn test_page_clamped_to_one() {
        let req = PageRequest::new(0, 10).unwrap();
        assert_eq!(req.page(), 1);
        assert_eq!(req.skip(), 0);
    }

    #[tokio::test]
    async fn test_first_page_of_twelve() {
        let source = twelve_words();
        let page = execute(&source, PageRequest::new(1, 10).unwrap()).await.unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_next());
        assert!(!page.has_prev());
        assert!(!page.from_cache);
    }

    #[tokio::test]
    async fn test_last_page_is_short() {
        let source = twelve_words();
        let page = execute(&source, PageRequest::new(2, 10).unwrap()).await.unwrap();

        assert_eq!(page.items, vec!["kelp", "larch"]);
        assert_eq!(page.total, 12);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[tokio::test]
    async fn test_window_past_the_end_is_empty() {
        let source = twelve_words();
        let page = execute(&source, PageRequest::new(5, 10).unwrap()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 12);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[tokio::test]
    async fn test_window_length_invariant() {
        let source = twelve_words();
        for (page_no, limit) in [(1u64, 5u64), (2, 5), (3, 5), (1, 12), (2, 12), (1, 1), (12, 1)] {
            let req = PageRequest::new(page_no, limit).unwrap();
            let page = execute(&source, req).await.unwrap();
            let expected = 12u64.saturating_sub(req.skip()).min(limit);
            assert_eq!(page.items.len() as u64, expected, "page={page_no} limit={limit}");
            assert_eq!(page.total_pages(), 12u64.div_ceil(limit));
        }
    }
}
