//! HTTP handlers for `/api/reports`

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::repository::ReportStore;
use crate::state::AppState;

use super::query::ListParams;
use super::response::{CreatedReportResponse, ListReportsResponse, MessageResponse};
use super::validation::CreateReportRequest;

/// `GET /api/reports?page=&limit=`
#[instrument(skip_all)]
pub async fn list_reports<S: ReportStore>(
    State(state): State<AppState<S>>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<ListReportsResponse> {
    let Query(params) = params.map_err(|e| Error::BadRequest(e.body_text()))?;
    let page = state.reports().list(&params).await?;
    Ok(page.into())
}

/// `POST /api/reports`
#[instrument(skip_all)]
pub async fn create_report<S: ReportStore>(
    State(state): State<AppState<S>>,
    payload: std::result::Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<CreatedReportResponse> {
    let Json(request) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    let report = state.reports().create(request).await?;
    Ok(CreatedReportResponse::new(report))
}

/// `DELETE /api/reports/{id}`
#[instrument(skip(state))]
pub async fn delete_report<S: ReportStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<MessageResponse> {
    state.reports().delete(&id).await?;
    Ok(MessageResponse::deleted())
}
