//! Community reports: model, validation, service and HTTP handlers
//!
//! - [`model`]: the persisted [`Report`] and the validated [`NewReport`]
//! - [`validation`]: payload rules producing a [`NewReport`]
//! - [`service`]: listing, creation and deletion over a store
//! - [`handlers`]: axum handlers for `/api/reports`

pub mod handlers;
pub mod model;
pub mod query;
pub mod response;
pub mod service;
pub mod validation;

pub use model::{NewReport, Report, ReportId};
pub use query::{ListParams, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use response::{
    CreatedReportResponse, ListReportsResponse, MessageResponse, PaginationMeta, ReportPage,
};
pub use service::ReportService;
pub use validation::{parse_date, validate, CreateReportRequest, ValidationError};
