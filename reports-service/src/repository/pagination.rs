//! Pagination and ordering types for store queries
//!
//! # Example
//!
//! ```rust
//! use reports_service::repository::{OrderDirection, Pagination};
//!
//! let pagination = Pagination::page(3, 20);
//! assert_eq!(pagination.offset, 40);
//! assert_eq!(pagination.limit, 20);
//!
//! let order = OrderDirection::Descending;
//! assert_eq!(order.as_surql(), "DESC");
//! ```

use std::fmt;

/// Direction for ordering results by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Oldest first
    Ascending,
    /// Newest first
    #[default]
    Descending,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl OrderDirection {
    /// SurrealQL `ORDER BY` keyword
    #[must_use]
    pub const fn as_surql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Offset/limit window over a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of results to skip
    pub offset: u64,
    /// Maximum number of results to return
    pub limit: u64,
}

impl Pagination {
    /// Create new pagination parameters
    #[must_use]
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Pagination for a 1-indexed page number
    ///
    /// Page 0 is treated as page 1. The offset saturates instead of
    /// overflowing for absurdly large page numbers.
    #[must_use]
    pub const fn page(page_number: u64, page_size: u64) -> Self {
        let offset = page_number.saturating_sub(1).saturating_mul(page_size);
        Self {
            offset,
            limit: page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_direction_default_is_newest_first() {
        assert_eq!(OrderDirection::default(), OrderDirection::Descending);
        assert_eq!(format!("{}", OrderDirection::Ascending), "asc");
        assert_eq!(OrderDirection::Ascending.as_surql(), "ASC");
    }

    #[test]
    fn test_page_offsets() {
        assert_eq!(Pagination::page(1, 10), Pagination::new(0, 10));
        assert_eq!(Pagination::page(2, 10), Pagination::new(10, 10));
        assert_eq!(Pagination::page(0, 10), Pagination::new(0, 10));
    }

    #[test]
    fn test_page_offset_saturates() {
        let pagination = Pagination::page(u64::MAX, u64::MAX);
        assert_eq!(pagination.offset, u64::MAX);
    }
}
