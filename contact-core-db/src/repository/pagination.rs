/// Offset-based page request
///
/// # Example
/// ```
/// use contact_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0);
/// let second = PageRequest::for_page(20, 2);
/// assert_eq!(second.offset, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page request for a 1-based page number; 0 is treated as 1
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// `LIMIT` as bound to a Postgres `BIGINT`
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// `OFFSET` as bound to a Postgres `BIGINT`
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of results plus the total across all pages
///
/// # Example
/// ```
/// use contact_core_db::repository::pagination::Page;
///
/// let page = Page::new(vec![1, 2, 3], 100, 20, 0);
/// assert!(page.has_more());
/// assert_eq!(page.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Converts the items while keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_page_clamps_page_zero() {
        assert_eq!(PageRequest::for_page(10, 0), PageRequest::new(10, 0));
        assert_eq!(PageRequest::for_page(10, 3), PageRequest::new(10, 20));
    }

    #[test]
    fn test_sql_bounds_saturate() {
        let request = PageRequest::new(usize::MAX, 5);
        assert_eq!(request.sql_limit(), i64::MAX);
        assert_eq!(request.sql_offset(), 5);
    }

    #[test]
    fn test_last_page() {
        let page = Page::new(vec!['a', 'b'], 12, 5, 10);
        assert!(!page.has_more());
        assert_eq!(page.page_number(), 3);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_zero_limit_is_single_page() {
        let page: Page<u8> = Page::new(vec![], 7, 0, 0);
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 4, 2, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!((page.total, page.limit, page.offset), (4, 2, 2));
    }
}
