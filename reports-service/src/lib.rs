//! # reports-service
//!
//! REST backend for community incident reports. Clients submit a report
//! (title, description, date, location), list reports page by page, and
//! delete them.
//!
//! ## Features
//!
//! - **Endpoints**: `GET/POST /api/reports`, `DELETE /api/reports/{id}`, banner at `GET /api`
//! - **Stores**: SurrealDB (ws, http or embedded `mem://`) or an in-process store
//! - **Middleware stack**: CORS, compression, request timeout, body size limit, request ids, panic recovery
//! - **Health checks**: Liveness and readiness probes
//! - **Graceful shutdown**: Proper signal handling (SIGTERM, SIGINT)
//!
//! ## Example
//!
//! ```rust,no_run
//! use reports_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), MemoryReportStore::new());
//!
//!     Server::new(config).serve(router(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod observability;
pub mod reports;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

/// Commonly used types
pub mod prelude {
    pub use crate::config::{Config, StoreBackend, StoreConfig};
    pub use crate::error::{Error, Result};
    pub use crate::health::{banner, health, readiness};
    pub use crate::ids::{MakeTypedRequestId, RequestId};
    pub use crate::observability::init_tracing;
    pub use crate::reports::{
        validate, CreateReportRequest, ListParams, NewReport, PaginationMeta, Report,
        ReportId, ReportService, ValidationError,
    };
    pub use crate::repository::{
        OrderDirection, Pagination, ReportStore, RepositoryError, RepositoryResult,
    };
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::{MemoryReportStore, SurrealReportStore};
}
