//! Store abstraction for report persistence
//!
//! - [`ReportStore`]: the persistence seam handlers and services depend on
//! - [`RepositoryError`]: structured store failures
//! - [`Pagination`] / [`OrderDirection`]: windowing and ordering for listings
//!
//! Concrete stores live in [`crate::store`].

mod error;
mod pagination;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use pagination::{OrderDirection, Pagination};
pub use traits::{ReportStore, RepositoryResult};
