//! The report store trait
//!
//! Async methods use RPITIT (Return Position Impl Trait In Traits), so
//! implementations are written as plain `async fn` without `async_trait`.
//! Handlers are generic over the store type instead of boxing it.

use std::future::Future;

use super::error::RepositoryError;
use super::pagination::{OrderDirection, Pagination};
use crate::reports::model::{NewReport, Report, ReportId};

/// Result type for store operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Persistence operations over [`Report`] records
///
/// Implementations assign the id and the `created_at`/`updated_at`
/// timestamps on insert. Single-record operations are atomic as far as the
/// backing store guarantees it; nothing here adds locking across calls.
pub trait ReportStore: Clone + Send + Sync + 'static {
    /// Persist a validated report and return it with id and timestamps
    fn insert(&self, report: NewReport) -> impl Future<Output = RepositoryResult<Report>> + Send;

    /// Fetch one window of reports ordered by creation time
    fn find_page(
        &self,
        pagination: Pagination,
        order: OrderDirection,
    ) -> impl Future<Output = RepositoryResult<Vec<Report>>> + Send;

    /// Count every stored report
    fn count(&self) -> impl Future<Output = RepositoryResult<u64>> + Send;

    /// Look up a report by id
    ///
    /// Returns `Ok(None)` when no record has this id.
    fn find_by_id(
        &self,
        id: &ReportId,
    ) -> impl Future<Output = RepositoryResult<Option<Report>>> + Send;

    /// Permanently remove a report
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    fn delete_by_id(&self, id: &ReportId) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Full-text search over title, description and location, newest first
    fn search(
        &self,
        query: &str,
        limit: u64,
    ) -> impl Future<Output = RepositoryResult<Vec<Report>>> + Send;

    /// Check that the store is reachable
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}
