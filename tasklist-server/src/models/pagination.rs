//! Pagination parameters for list endpoints

use serde::Deserialize;

use super::ValidationError;

/// Maximum items per page
const MAX_LIMIT: u32 = 100;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (1..=100)
    pub limit: u32,
}

impl PageParams {
    /// Create pagination parameters with validation.
    ///
    /// Out-of-range values are rejected, not clamped: `page` must be at
    /// least 1 and `limit` must lie in 1..=100.
    pub fn new(page: u32, limit: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::TooSmall {
                field: "page",
                min: 1,
            });
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: MAX_LIMIT,
            });
        }

        Ok(Self { page, limit })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        ((self.page - 1) as u64) * (self.limit as u64)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TryFrom<PageQuery> for PageParams {
    type Error = ValidationError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::new(
            query.page.unwrap_or(1),
            query.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
