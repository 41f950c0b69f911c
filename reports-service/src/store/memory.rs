//! In-process report store
//!
//! Keeps every report in a vector ordered oldest first. Used by the HTTP
//! tests and selectable with `store.backend = "memory"` for local runs.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::reports::model::{NewReport, Report, ReportId};
use crate::repository::{OrderDirection, Pagination, ReportStore, RepositoryResult};

/// [`ReportStore`] backed by a `RwLock<Vec<Report>>`
#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    reports: Arc<RwLock<Vec<Report>>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn window<'a>(
    reports: impl DoubleEndedIterator<Item = &'a Report>,
    order: OrderDirection,
    pagination: Pagination,
) -> Vec<Report> {
    let skip = usize::try_from(pagination.offset).unwrap_or(usize::MAX);
    let take = usize::try_from(pagination.limit).unwrap_or(usize::MAX);

    match order {
        OrderDirection::Ascending => reports.skip(skip).take(take).cloned().collect(),
        OrderDirection::Descending => reports.rev().skip(skip).take(take).cloned().collect(),
    }
}

impl ReportStore for MemoryReportStore {
    async fn insert(&self, report: NewReport) -> RepositoryResult<Report> {
        let mut reports = self.reports.write().await;
        // Stamped under the lock so vector order matches `created_at`
        let report = report.into_report(ReportId::new(), Utc::now());
        reports.push(report.clone());
        drop(reports);

        tracing::debug!(id = %report.id, "Stored report in memory");
        Ok(report)
    }

    async fn find_page(
        &self,
        pagination: Pagination,
        order: OrderDirection,
    ) -> RepositoryResult<Vec<Report>> {
        let reports = self.reports.read().await;
        Ok(window(reports.iter(), order, pagination))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.reports.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: &ReportId) -> RepositoryResult<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| &r.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &ReportId) -> RepositoryResult<bool> {
        let mut reports = self.reports.write().await;
        let before = reports.len();
        reports.retain(|r| &r.id != id);
        Ok(reports.len() != before)
    }

    async fn search(&self, query: &str, limit: u64) -> RepositoryResult<Vec<Report>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let reports = self.reports.read().await;
        let matches = reports.iter().filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.location.to_lowercase().contains(&needle)
        });

        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matches.rev().take(take).cloned().collect())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
