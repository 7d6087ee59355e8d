//! Pagination and sort direction types.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Generic sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Desc,
    Asc,
}

/// Pagination parameters shared across list endpoints backed by offset queries.
///
/// - `per_page`: 1–100, default 25
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    25
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(self) -> u64 {
        let PageRequest { per_page, page } = self.clamped();
        u64::from(page - 1) * u64::from(per_page)
    }
}

/// Position of one page inside a fully known, ordered result set.
///
/// Unlike [`PageRequest`], the total is known up front, so the requested page
/// is clamped into `[1, total_pages]`. An empty set has zero pages and
/// resolves to page 1 with an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PageWindow {
    pub fn new(total_items: u64, requested_page: i64, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(u64::from(per_page));
        let page = if total_pages == 0 {
            1
        } else {
            requested_page.clamp(1, total_pages as i64) as u64
        };
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Index range of this page's items within the ordered set.
    pub fn range(&self) -> Range<usize> {
        if self.total_pages == 0 {
            return 0..0;
        }
        let start = (self.page - 1) * u64::from(self.per_page);
        let end = (start + u64::from(self.per_page)).min(self.total_items);
        start as usize..end as usize
    }
}

/// One page of items plus its window metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub window: PageWindow,
}

/// Slice an ordered set into the requested page.
pub fn paginate<T>(mut items: Vec<T>, requested_page: i64, per_page: u32) -> Page<T> {
    let window = PageWindow::new(items.len() as u64, requested_page, per_page);
    let range = window.range();
    items.truncate(range.end);
    let items = items.split_off(range.start);
    Page { items, window }
}
