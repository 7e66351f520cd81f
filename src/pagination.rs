//! Zero-based page requests and the pages returned for them.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("page size must be at least 1")]
    ZeroSize,
}

/// Zero-based page index plus a page size of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }
        Ok(Self { page, size })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of rows to skip. Saturates so absurd page indices simply land
    /// past the end of the table.
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_mul(self.size);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Count of every matching record, not only those on this page.
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
    pub size: usize,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: usize, request: PageRequest) -> Self {
        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages: total_elements.div_ceil(request.size()),
            number: request.page(),
            size: request.size(),
        }
    }

    /// Converts the page items while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroSize));
    }

    #[test]
    fn offset_and_limit_follow_page_index() {
        let request = PageRequest::new(2, 10).unwrap();
        assert_eq!(request.offset(), 20);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn huge_page_index_saturates() {
        let request = PageRequest::new(usize::MAX, 10).unwrap();
        assert_eq!(request.offset(), i64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 12, PageRequest::new(0, 5).unwrap());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 12);
        assert!(!page.empty);
    }

    #[test]
    fn empty_table_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], 0, PageRequest::new(0, 5).unwrap());
        assert_eq!(page.total_pages, 0);
        assert!(page.empty);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 7, PageRequest::new(1, 2).unwrap()).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.number, 1);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let page = Page::new(vec!["a"], 1, PageRequest::new(0, 12).unwrap());
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["totalElements"], 1);
        assert_eq!(value["totalPages"], 1);
        assert_eq!(value["content"][0], "a");
    }
}
