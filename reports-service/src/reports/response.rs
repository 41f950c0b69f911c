//! Response envelopes for the report endpoints
//!
//! Every body carries a `success` flag. Errors use the same shape with
//! `success: false` (see [`crate::error`]).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::model::Report;

/// One window over the full set of reports
///
/// ```rust
/// use reports_service::reports::PaginationMeta;
///
/// let meta = PaginationMeta::new(1, 10, 25);
/// assert_eq!(meta.pages, 3);
///
/// assert_eq!(PaginationMeta::new(1, 10, 0).pages, 0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: u64,
    /// Page size
    pub limit: u64,
    /// Number of stored reports
    pub total: u64,
    /// `ceil(total / limit)`
    pub pages: u64,
}

impl PaginationMeta {
    #[must_use]
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// A page of reports with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPage {
    pub reports: Vec<Report>,
    pub pagination: PaginationMeta,
}

/// `200 {success, data: {reports, pagination}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReportsResponse {
    pub success: bool,
    pub data: ReportPage,
}

impl From<ReportPage> for ListReportsResponse {
    fn from(data: ReportPage) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl IntoResponse for ListReportsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `201 {success, message, report}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedReportResponse {
    pub success: bool,
    pub message: String,
    pub report: Report,
}

impl CreatedReportResponse {
    pub const MESSAGE: &'static str = "report created successfully";

    pub fn new(report: Report) -> Self {
        Self {
            success: true,
            message: Self::MESSAGE.to_string(),
            report,
        }
    }
}

impl IntoResponse for CreatedReportResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// `200 {success, message}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn deleted() -> Self {
        Self::ok("report deleted successfully")
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_round_up() {
        assert_eq!(PaginationMeta::new(1, 10, 10).pages, 1);
        assert_eq!(PaginationMeta::new(1, 10, 11).pages, 2);
        assert_eq!(PaginationMeta::new(1, 1, 7).pages, 7);
        assert_eq!(PaginationMeta::new(4, 3, 2).pages, 1);
    }

    #[test]
    fn test_list_response_shape() {
        let response = ListReportsResponse::from(ReportPage {
            reports: Vec::new(),
            pagination: PaginationMeta::new(1, 10, 0),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "data": {
                    "reports": [],
                    "pagination": {"page": 1, "limit": 10, "total": 0, "pages": 0}
                }
            })
        );
    }

    #[test]
    fn test_message_response_status() {
        let response = MessageResponse::deleted().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
