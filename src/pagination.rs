//! Page envelope returned by every listing endpoint.

use serde::Serialize;

/// A bounded slice of results plus the metadata needed to walk the pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    /// Requested page size.
    pub size: usize,
    /// Zero-based index of this page.
    pub number: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: usize, size: usize, total_elements: usize) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            size,
            number,
            number_of_elements,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }

    /// Converts the content while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
