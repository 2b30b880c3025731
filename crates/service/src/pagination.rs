//! Pagination utilities for the service layer
//!
//! `PageRequest` validates caller input and yields the offset/limit pair the
//! repository expects; `Page` carries the derived totals back out.

use serde::Serialize;

use crate::errors::ServiceError;

/// Page requested by a caller. Signed so that nonsense input such as `-1`
/// reaches validation instead of failing to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_SIZE: i64 = 10;

    pub fn new(page: i64, size: i64) -> Self { Self { page, size } }

    /// Reject non-positive input and convert to `(offset, limit)`.
    pub fn offset_limit(self) -> Result<(u64, u64), ServiceError> {
        if self.page <= 0 || self.size <= 0 {
            return Err(ServiceError::Validation("page and page size cannot be lower than 1".into()));
        }
        let offset = (self.page - 1)
            .checked_mul(self.size)
            .ok_or_else(|| ServiceError::Validation("page is out of range".into()))?;
        Ok((offset as u64, self.size as u64))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: Self::DEFAULT_PAGE, size: Self::DEFAULT_SIZE } }
}

/// Page descriptor returned alongside every listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl Page {
    /// Build a descriptor for an already validated request.
    pub fn new(req: PageRequest, total_elements: u64) -> Self {
        Self {
            page_number: req.page,
            page_size: req.size,
            total_elements,
            total_pages: total_pages(total_elements, req.size as u64),
        }
    }
}

/// Ceiling division; zero when `size` is zero.
pub fn total_pages(total_elements: u64, size: u64) -> u64 {
    if size == 0 { 0 } else { total_elements.div_ceil(size) }
}
