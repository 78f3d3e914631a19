//! Page result container

use serde::{Deserialize, Serialize};

/// One page of records plus the metadata needed to navigate the rest
///
/// `total_items` counts the records that passed the keyword filter, before
/// slicing. `total_pages` is `ceil(total_items / page_size)`, so an empty
/// result has zero pages.
///
/// # Example
///
/// ```rust
/// use query_pager::PageResult;
///
/// let page = PageResult::new(vec!["d", "e"], 2, 3, 5);
/// assert_eq!(page.total_pages, 2);
/// assert!(!page.has_next());
/// assert!(page.has_prev());
/// assert_eq!(page.offset(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<R> {
    /// Records on this page, at most `page_size` of them
    pub items: Vec<R>,
    /// Page number echoed from the request (1-indexed)
    pub current_page: u32,
    /// Page size echoed from the request
    pub page_size: u32,
    /// Number of records matching the filter across all pages
    pub total_items: u64,
    /// Number of pages needed to hold `total_items`
    pub total_pages: u32,
}

impl<R> PageResult<R> {
    /// Build a result, deriving `total_pages` from the totals
    #[must_use]
    pub fn new(items: Vec<R>, current_page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            items,
            current_page,
            page_size,
            total_items,
            total_pages: calculate_total_pages(total_items, page_size),
        }
    }

    /// Whether a page exists after this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a page exists before this one
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Number of filtered records preceding this page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Whether this page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item, keeping the page metadata
    ///
    /// ```rust
    /// use query_pager::PageResult;
    ///
    /// let page = PageResult::new(vec![1, 2], 1, 2, 7).map(|n| n * 10);
    /// assert_eq!(page.items, vec![10, 20]);
    /// assert_eq!(page.total_pages, 4);
    /// ```
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(R) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Calculate total pages, rounding up
///
/// A zero page size yields zero pages.
#[must_use]
pub fn calculate_total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
