//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Page numbers are 1-based. A request whose number or size is zero is
/// *unpaged*: it asks for no pagination at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed, 0 means unpaged).
    pub page_number: usize,
    /// The number of items per page (0 means unpaged).
    pub page_size: usize,
    /// Ordering expression handed to the query engine, e.g. `"id DESC"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Whether the engine should run a count query.
    #[serde(default = "default_count")]
    pub count: bool,
}

fn default_count() -> bool {
    true
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum page size accepted from request binding.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request that performs a count query.
    ///
    /// The size is taken verbatim; clamping is the job of request binding.
    #[must_use]
    pub const fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
            order_by: None,
            count: true,
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Creates a request that disables pagination.
    #[must_use]
    pub const fn unpaged() -> Self {
        Self::new(0, 0)
    }

    /// Sets the ordering expression.
    #[must_use]
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Sets whether a count query should run.
    #[must_use]
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Returns true if this request asks for pagination.
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.page_number >= 1 && self.page_size >= 1
    }

    /// Returns the row offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_number.saturating_sub(1) * self.page_size
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Metadata describing where a page sits inside the full result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of records across all pages.
    pub total: u64,
    /// The current page number (1-indexed).
    pub page_num: usize,
    /// The number of records per page.
    pub page_size: usize,
    /// The number of records on this page.
    pub size: usize,
    /// 1-based row number of the first record on this page.
    pub start_row: u64,
    /// 1-based row number of the last record on this page.
    pub end_row: u64,
    /// The total number of pages.
    pub pages: usize,
    /// Previous page number, 0 when there is none.
    pub pre_page: usize,
    /// Next page number, 0 when there is none.
    pub next_page: usize,
    pub first_page: bool,
    pub last_page: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    /// Width of the navigation window.
    pub navigate_pages: usize,
    /// Page numbers inside the navigation window.
    pub navigatepage_nums: Vec<usize>,
    pub navigate_first_page: usize,
    pub navigate_last_page: usize,
}

impl PageInfo {
    /// The default width of the navigation window.
    pub const DEFAULT_NAVIGATE_PAGES: usize = 8;

    /// Creates page info, deriving page counts and navigation.
    #[must_use]
    pub fn new(
        page_num: usize,
        page_size: usize,
        total: u64,
        size: usize,
        navigate_pages: usize,
    ) -> Self {
        let pages = if page_size > 0 {
            usize::try_from(total.div_ceil(page_size as u64)).unwrap_or(usize::MAX)
        } else {
            0
        };

        let (start_row, end_row) = if size == 0 {
            (0, 0)
        } else {
            let start = (page_num.saturating_sub(1) as u64)
                .saturating_mul(page_size as u64)
                .saturating_add(1);
            (start, start.saturating_add(size as u64 - 1))
        };

        let navigatepage_nums = navigation_window(page_num, pages, navigate_pages);
        let (navigate_first_page, navigate_last_page, pre_page, next_page) =
            match (navigatepage_nums.first(), navigatepage_nums.last()) {
                (Some(&first), Some(&last)) => (
                    first,
                    last,
                    if page_num > 1 { page_num - 1 } else { 0 },
                    if page_num < pages { page_num + 1 } else { 0 },
                ),
                _ => (0, 0, 0, 0),
            };

        Self {
            total,
            page_num,
            page_size,
            size,
            start_row,
            end_row,
            pages,
            pre_page,
            next_page,
            first_page: page_num == 1,
            last_page: page_num == pages || pages == 0,
            has_previous_page: page_num > 1,
            has_next_page: page_num < pages,
            navigate_pages,
            navigatepage_nums,
            navigate_first_page,
            navigate_last_page,
        }
    }
}

/// Computes the page numbers shown around `page_num`, clamped to `1..=pages`.
fn navigation_window(page_num: usize, pages: usize, width: usize) -> Vec<usize> {
    if width == 0 || pages == 0 {
        return Vec::new();
    }
    if pages <= width {
        return (1..=pages).collect();
    }

    let half = width / 2;
    if page_num <= half {
        (1..=width).collect()
    } else if page_num + half > pages {
        (pages - width + 1..=pages).collect()
    } else {
        let start = page_num - half;
        (start..start + width).collect()
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records on this page.
    pub list: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page with the default navigation width.
    #[must_use]
    pub fn new(list: Vec<T>, page_num: usize, page_size: usize, total: u64) -> Self {
        Self::with_navigate_pages(list, page_num, page_size, total, PageInfo::DEFAULT_NAVIGATE_PAGES)
    }

    /// Creates a new page with an explicit navigation width.
    #[must_use]
    pub fn with_navigate_pages(
        list: Vec<T>,
        page_num: usize,
        page_size: usize,
        total: u64,
        navigate_pages: usize,
    ) -> Self {
        let size = list.len();
        Self {
            list,
            info: PageInfo::new(page_num, page_size, total, size, navigate_pages),
        }
    }

    /// Wraps an unpaged list as a single page holding every record.
    ///
    /// An empty list yields [`Page::empty`].
    #[must_use]
    pub fn of(list: Vec<T>) -> Self {
        if list.is_empty() {
            return Self::empty();
        }
        let len = list.len();
        Self::new(list, 1, len, len as u64)
    }

    /// Creates the canonical empty page: no records, zeroed metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            list: Vec::new(),
            info: PageInfo::default(),
        }
    }

    /// Maps the records to a different type, keeping the metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            list: self.list.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Maps the records with a fallible function.
    ///
    /// Stops at the first failure; no partially mapped page is returned.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let list = self.list.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            list,
            info: self.info,
        })
    }

    /// Returns true if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the page metadata.
    #[must_use]
    pub const fn info(&self) -> &PageInfo {
        &self.info
    }

    /// Returns the total number of records across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.info.total
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn pages(&self) -> usize {
        self.info.pages
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.info.has_next_page
    }

    /// Returns true if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.info.has_previous_page
    }

    /// Splits the page into its records and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        (self.list, self.info)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request() {
        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
        assert!(req.count);
        assert!(req.order_by.is_none());
    }

    #[test]
    fn test_page_request_keeps_size_verbatim() {
        let req = PageRequest::new(1, 1000);
        assert_eq!(req.page_size, 1000);
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::first();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, PageRequest::DEFAULT_SIZE);
        assert_eq!(req.offset(), 0);
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn test_page_request_paged() {
        assert!(PageRequest::new(1, 1).is_paged());
        assert!(!PageRequest::unpaged().is_paged());
        assert!(!PageRequest::new(0, 20).is_paged());
        assert!(!PageRequest::new(2, 0).is_paged());
    }

    #[test]
    fn test_page_request_builders() {
        let req = PageRequest::new(2, 5)
            .with_order_by("created_at DESC")
            .with_count(false);
        assert_eq!(req.order_by.as_deref(), Some("created_at DESC"));
        assert!(!req.count);
    }

    #[test]
    fn test_page_request_deserialize_defaults_count() {
        let req: PageRequest =
            serde_json::from_str(r#"{"page_number": 2, "page_size": 15}"#).unwrap();
        assert_eq!(req, PageRequest::new(2, 15));
    }

    #[test]
    fn test_page_info_first_page() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 1, 10, 25);
        assert!(page.info.first_page);
        assert!(!page.info.last_page);
        assert_eq!(page.pages(), 3);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.info.pre_page, 0);
        assert_eq!(page.info.next_page, 2);
        assert_eq!(page.info.start_row, 1);
        assert_eq!(page.info.end_row, 3);
    }

    #[test]
    fn test_page_info_last_page() {
        let page: Page<i32> = Page::new(vec![1, 2], 3, 10, 22);
        assert!(!page.info.first_page);
        assert!(page.info.last_page);
        assert!(!page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.info.pre_page, 2);
        assert_eq!(page.info.next_page, 0);
        assert_eq!(page.info.start_row, 21);
        assert_eq!(page.info.end_row, 22);
    }

    #[test]
    fn test_page_single_page() {
        let page = Page::new(vec![1, 2, 3], 1, 10, 3);
        assert!(page.info.first_page);
        assert!(page.info.last_page);
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.info.navigatepage_nums, vec![1]);
    }

    #[test]
    fn test_navigation_window_centers_on_current_page() {
        let page: Page<i32> = Page::new(vec![1], 10, 1, 20);
        assert_eq!(page.info.navigatepage_nums, (6..=13).collect::<Vec<_>>());
        assert_eq!(page.info.navigate_first_page, 6);
        assert_eq!(page.info.navigate_last_page, 13);
    }

    #[test]
    fn test_navigation_window_clamps_to_edges() {
        let head: Page<i32> = Page::new(vec![1], 2, 1, 20);
        assert_eq!(head.info.navigatepage_nums, (1..=8).collect::<Vec<_>>());

        let tail: Page<i32> = Page::new(vec![1], 18, 1, 20);
        assert_eq!(tail.info.navigatepage_nums, (13..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_navigation_window_custom_width() {
        let page: Page<i32> = Page::with_navigate_pages(vec![1], 5, 1, 9, 3);
        assert_eq!(page.info.navigate_pages, 3);
        assert_eq!(page.info.navigatepage_nums, vec![4, 5, 6]);
    }

    #[test]
    fn test_page_total_and_pages() {
        let page: Page<i32> = Page::new(vec![1], 1, 5, 11);
        assert_eq!(page.total(), 11);
        assert_eq!(page.pages(), 3); // ceil(11/5) = 3
    }

    #[test]
    fn test_page_empty() {
        let page: Page<i32> = Page::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.info, PageInfo::default());
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page, Page::default());
    }

    #[test]
    fn test_page_of_list() {
        let page = Page::of(vec!["a", "b", "c"]);
        assert_eq!(page.info.page_num, 1);
        assert_eq!(page.info.page_size, 3);
        assert_eq!(page.total(), 3);
        assert_eq!(page.pages(), 1);
        assert!(page.info.first_page && page.info.last_page);

        assert_eq!(Page::<i32>::of(Vec::new()), Page::empty());
    }

    #[test]
    fn test_page_map_keeps_info() {
        let page = Page::new(vec![1, 2, 3], 2, 3, 9);
        let info = page.info.clone();
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.list, vec![2, 4, 6]);
        assert_eq!(mapped.info, info);
    }

    #[test]
    fn test_page_try_map_stops_at_first_error() {
        let page = Page::new(vec![1, 2, 3], 1, 3, 3);
        let mut seen = Vec::new();
        let result: Result<Page<i32>, String> = page.try_map(|x| {
            seen.push(x);
            if x == 2 {
                Err(format!("rejected {x}"))
            } else {
                Ok(x)
            }
        });
        assert_eq!(result.unwrap_err(), "rejected 2");
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_page_serializes_flat() {
        let page = Page::new(vec![1], 1, 1, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["list"], serde_json::json!([1]));
        assert_eq!(json["total"], 1);
        assert_eq!(json["page_num"], 1);
        assert_eq!(json["has_next_page"], false);
    }

    #[test]
    fn test_page_into_iter() {
        let page = Page::new(vec![1, 2], 1, 2, 2);
        let (list, info) = page.clone().into_parts();
        assert_eq!(list, vec![1, 2]);
        assert_eq!(info.size, 2);
        assert_eq!(page.into_iter().sum::<i32>(), 3);
    }

    #[test]
    fn test_page_info_saturates_row_bounds() {
        let page = Page::new(vec![1], usize::MAX, usize::MAX, u64::MAX);
        assert_eq!(page.info.start_row, u64::MAX);
        assert_eq!(page.info.end_row, u64::MAX);
        assert!(!page.has_next());
    }
}
