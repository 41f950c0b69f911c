//! Store that fails every call as if the database were unreachable

use crate::reports::model::{NewReport, Report, ReportId};
use crate::repository::{
    OrderDirection, Pagination, ReportStore, RepositoryError, RepositoryOperation,
    RepositoryResult,
};

/// Every operation returns a `ConnectionFailed` error
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore;

fn refused(operation: RepositoryOperation) -> RepositoryError {
    RepositoryError::connection_failed(operation, "connection refused")
}

impl ReportStore for UnavailableStore {
    async fn insert(&self, _report: NewReport) -> RepositoryResult<Report> {
        Err(refused(RepositoryOperation::Insert))
    }

    async fn find_page(
        &self,
        _pagination: Pagination,
        _order: OrderDirection,
    ) -> RepositoryResult<Vec<Report>> {
        Err(refused(RepositoryOperation::FindPage))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Err(refused(RepositoryOperation::Count))
    }

    async fn find_by_id(&self, _id: &ReportId) -> RepositoryResult<Option<Report>> {
        Err(refused(RepositoryOperation::FindById))
    }

    async fn delete_by_id(&self, _id: &ReportId) -> RepositoryResult<bool> {
        Err(refused(RepositoryOperation::Delete))
    }

    async fn search(&self, _query: &str, _limit: u64) -> RepositoryResult<Vec<Report>> {
        Err(refused(RepositoryOperation::Search))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Err(refused(RepositoryOperation::Ping))
    }
}
