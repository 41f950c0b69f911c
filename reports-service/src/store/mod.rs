//! Concrete [`ReportStore`](crate::repository::ReportStore) implementations

mod memory;
mod surreal;
#[cfg(test)]
mod unavailable;

pub use memory::MemoryReportStore;
pub use surreal::{sanitize_url, SurrealClient, SurrealReportStore};
#[cfg(test)]
pub(crate) use unavailable::UnavailableStore;
