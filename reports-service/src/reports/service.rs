//! Report operations on top of a [`ReportStore`]

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::repository::{OrderDirection, ReportStore};

use super::model::{Report, ReportId};
use super::query::ListParams;
use super::response::{PaginationMeta, ReportPage};
use super::validation::{validate, CreateReportRequest};

/// Listing, creation and deletion of reports
#[derive(Debug)]
pub struct ReportService<S> {
    store: Arc<S>,
}

impl<S> Clone for ReportService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ReportStore> ReportService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One page of reports, newest first, with pagination metadata
    pub async fn list(&self, params: &ListParams) -> Result<ReportPage> {
        let page = params.page_number();
        let limit = params.items_per_page();

        let pagination = params.pagination();

        let total = self.store.count().await?;
        let reports = if pagination.offset >= total {
            Vec::new()
        } else {
            self.store
                .find_page(pagination, OrderDirection::Descending)
                .await?
        };

        tracing::debug!(page, limit, total, returned = reports.len(), "Listed reports");

        Ok(ReportPage {
            reports,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    /// Validate and persist a new report
    pub async fn create(&self, request: CreateReportRequest) -> Result<Report> {
        let new_report = validate(request).inspect_err(|e| {
            tracing::debug!(reason = %e, "Rejected report payload");
        })?;

        let report = self.store.insert(new_report).await?;
        tracing::info!(id = %report.id, title = %report.title, "Report created");
        Ok(report)
    }

    /// Permanently remove a report
    ///
    /// `raw_id` comes straight from the path and is rejected with
    /// [`Error::BadRequest`] unless it is a well-formed report id.
    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = ReportId::from_str(raw_id)
            .map_err(|_| Error::BadRequest(format!("invalid report id: {}", raw_id)))?;

        if self.store.find_by_id(&id).await?.is_none() {
            tracing::warn!(id = %id, "Delete requested for unknown report");
            return Err(Error::NotFound("report not found".to_string()));
        }

        // Another request may have removed it in between
        if !self.store.delete_by_id(&id).await? {
            tracing::warn!(id = %id, "Report vanished before delete");
            return Err(Error::NotFound("report not found".to_string()));
        }

        tracing::info!(id = %id, "Report deleted");
        Ok(())
    }
}
