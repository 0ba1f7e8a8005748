use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Rejects an empty page size and clamps oversized ones to [`MAX_PAGE_SIZE`].
    pub fn validated(self) -> Result<Self, String> {
        if self.size == 0 {
            return Err("Page size must be at least 1".to_string());
        }
        Ok(Self {
            page: self.page,
            size: self.size.min(MAX_PAGE_SIZE),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cuts one page out of the full, already ordered result set.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = items.len();
        let total_pages = total_elements.div_ceil(request.size.max(1));
        let content = items
            .into_iter()
            .skip(request.page.saturating_mul(request.size))
            .take(request.size)
            .collect();
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_middle_and_past_end() {
        let items: Vec<u32> = (1..=25).collect();

        let second = Page::slice(items.clone(), PageRequest::new(1, 10));
        assert_eq!(second.content, (11..=20).collect::<Vec<_>>());
        assert_eq!(second.total_elements, 25);
        assert_eq!(second.total_pages, 3);

        let beyond = Page::slice(items, PageRequest::new(5, 10));
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn test_validated_page_request() {
        assert!(PageRequest::new(0, 0).validated().is_err());
        assert_eq!(PageRequest::new(2, 500).validated().unwrap(), PageRequest::new(2, MAX_PAGE_SIZE));
    }
}
