//! Query parameters for the report listing
//!
//! `page` and `limit` are read leniently: leading whitespace and a sign are
//! accepted, digits are taken up to the first non-digit, and anything that
//! does not yield a positive number falls back to the default.
//!
//! ```rust
//! use reports_service::reports::ListParams;
//!
//! let params = ListParams::new(Some("2abc"), Some("-5"));
//! assert_eq!(params.page_number(), 2);
//! assert_eq!(params.items_per_page(), 10);
//! ```

use serde::Deserialize;

use crate::repository::Pagination;

/// Page used when none (or an unusable one) is given
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none (or an unusable one) is given
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `?page=&limit=` query string values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListParams {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    /// 1-indexed page number
    #[must_use]
    pub fn page_number(&self) -> u64 {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Page size
    #[must_use]
    pub fn items_per_page(&self) -> u64 {
        positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Store window for these parameters
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::page(self.page_number(), self.items_per_page())
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(parse_leading_int) {
        Some(n) if n > 0 => n.unsigned_abs(),
        _ => default,
    }
}

/// Parse the leading integer of `s`, ignoring trailing garbage
///
/// Returns `None` when no digit follows the optional sign. Values beyond the
/// `i64` range saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
