//! SurrealDB report store
//!
//! Supports runtime protocol selection via URL scheme:
//! - `ws://` / `wss://` - WebSocket connections
//! - `http://` / `https://` - HTTP connections
//! - `mem://` - In-memory database (for testing)
//!
//! Reports live in the `report` table. The record key is the report's
//! TypeID, duplicated in a `key` field so rows can be decoded without
//! touching SurrealDB's record id type. Timestamps are stored as RFC 3339
//! strings and `sort_key` holds the creation time in microseconds for
//! ordering.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::reports::model::{NewReport, Report, ReportId};
use crate::repository::{
    OrderDirection, Pagination, ReportStore, RepositoryError, RepositoryOperation,
    RepositoryResult,
};

/// SurrealDB client type alias using the `Any` engine for runtime protocol selection
pub type SurrealClient = surrealdb::Surreal<surrealdb::engine::any::Any>;

const TABLE: &str = "report";

/// Largest value SurrealDB accepts for `LIMIT` and `START`
const MAX_WINDOW: u64 = u32::MAX as u64;

const DEFINE_INDEXES: &str = r#"
    DEFINE INDEX IF NOT EXISTS idx_report_date ON TABLE report FIELDS date;
    DEFINE INDEX IF NOT EXISTS idx_report_sort ON TABLE report FIELDS sort_key;
    DEFINE ANALYZER IF NOT EXISTS report_text TOKENIZERS blank, class FILTERS lowercase, ascii;
    DEFINE INDEX IF NOT EXISTS idx_report_title_search ON TABLE report FIELDS title SEARCH ANALYZER report_text BM25;
    DEFINE INDEX IF NOT EXISTS idx_report_description_search ON TABLE report FIELDS description SEARCH ANALYZER report_text BM25;
    DEFINE INDEX IF NOT EXISTS idx_report_location_search ON TABLE report FIELDS location SEARCH ANALYZER report_text BM25;
"#;

/// Row shape written to and read from the `report` table
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReportDocument {
    key: String,
    title: String,
    description: String,
    date: String,
    location: String,
    created_at: String,
    updated_at: String,
    sort_key: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(
    raw: &str,
    field: &str,
    operation: RepositoryOperation,
) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            RepositoryError::serialization_error(
                operation,
                format!("invalid {} timestamp '{}': {}", field, raw, e),
            )
        })
}

impl From<&Report> for ReportDocument {
    fn from(report: &Report) -> Self {
        Self {
            key: report.id.to_string(),
            title: report.title.clone(),
            description: report.description.clone(),
            date: to_rfc3339(&report.date),
            location: report.location.clone(),
            created_at: to_rfc3339(&report.created_at),
            updated_at: to_rfc3339(&report.updated_at),
            sort_key: report.created_at.timestamp_micros(),
        }
    }
}

impl ReportDocument {
    fn into_report(self, operation: RepositoryOperation) -> RepositoryResult<Report> {
        let id: ReportId = self.key.parse().map_err(|e| {
            RepositoryError::serialization_error(operation, format!("invalid stored id: {}", e))
                .with_entity_id(self.key.clone())
        })?;

        Ok(Report {
            date: parse_timestamp(&self.date, "date", operation)?,
            created_at: parse_timestamp(&self.created_at, "created_at", operation)?,
            updated_at: parse_timestamp(&self.updated_at, "updated_at", operation)?,
            id,
            title: self.title,
            description: self.description,
            location: self.location,
        })
    }
}

fn decode_all(
    docs: Vec<ReportDocument>,
    operation: RepositoryOperation,
) -> RepositoryResult<Vec<Report>> {
    docs.into_iter()
        .map(|doc| doc.into_report(operation))
        .collect()
}

fn during(operation: RepositoryOperation) -> impl Fn(surrealdb::Error) -> RepositoryError {
    move |e| RepositoryError::from(e).with_operation(operation)
}

/// [`ReportStore`] backed by SurrealDB
#[derive(Clone)]
pub struct SurrealReportStore {
    client: Arc<SurrealClient>,
}

impl std::fmt::Debug for SurrealReportStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurrealReportStore").finish_non_exhaustive()
    }
}

impl SurrealReportStore {
    /// Connect with retries and make sure the indexes exist
    pub async fn connect(config: &StoreConfig) -> RepositoryResult<Self> {
        let client = create_client_with_retries(config, config.max_retries).await?;
        let store = Self {
            client: Arc::new(client),
        };
        store.define_indexes().await?;
        Ok(store)
    }

    /// Wrap an already configured client
    pub fn from_client(client: Arc<SurrealClient>) -> Self {
        Self { client }
    }

    async fn define_indexes(&self) -> RepositoryResult<()> {
        self.client
            .query(DEFINE_INDEXES)
            .await
            .map_err(during(RepositoryOperation::DefineIndexes))?
            .check()
            .map_err(during(RepositoryOperation::DefineIndexes))?;

        tracing::debug!(table = TABLE, "Report indexes defined");
        Ok(())
    }
}

impl ReportStore for SurrealReportStore {
    async fn insert(&self, report: NewReport) -> RepositoryResult<Report> {
        let report = report.into_report(ReportId::new(), Utc::now());
        let document = ReportDocument::from(&report);

        self.client
            .query("CREATE type::thing($table, $key) CONTENT $data")
            .bind(("table", TABLE))
            .bind(("key", document.key.clone()))
            .bind(("data", document))
            .await
            .map_err(during(RepositoryOperation::Insert))?
            .check()
            .map_err(|e| {
                during(RepositoryOperation::Insert)(e).with_entity_id(report.id.to_string())
            })?;

        Ok(report)
    }

    async fn find_page(
        &self,
        pagination: Pagination,
        order: OrderDirection,
    ) -> RepositoryResult<Vec<Report>> {
        if pagination.offset >= MAX_WINDOW {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT * FROM type::table($table) \
             ORDER BY sort_key {dir}, key {dir} LIMIT $limit START $start",
            dir = order.as_surql()
        );

        let mut response = self
            .client
            .query(sql)
            .bind(("table", TABLE))
            .bind(("limit", pagination.limit.min(MAX_WINDOW)))
            .bind(("start", pagination.offset))
            .await
            .map_err(during(RepositoryOperation::FindPage))?;

        let docs: Vec<ReportDocument> = response
            .take(0)
            .map_err(during(RepositoryOperation::FindPage))?;

        decode_all(docs, RepositoryOperation::FindPage)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let mut response = self
            .client
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", TABLE))
            .await
            .map_err(during(RepositoryOperation::Count))?;

        let row: Option<CountRow> = response
            .take(0)
            .map_err(during(RepositoryOperation::Count))?;

        Ok(row.map_or(0, |r| r.count))
    }

    async fn find_by_id(&self, id: &ReportId) -> RepositoryResult<Option<Report>> {
        let doc: Option<ReportDocument> = self
            .client
            .select((TABLE, id.as_str()))
            .await
            .map_err(|e| during(RepositoryOperation::FindById)(e).with_entity_id(id.to_string()))?;

        doc.map(|d| d.into_report(RepositoryOperation::FindById))
            .transpose()
    }

    async fn delete_by_id(&self, id: &ReportId) -> RepositoryResult<bool> {
        let deleted: Option<ReportDocument> = self
            .client
            .delete((TABLE, id.as_str()))
            .await
            .map_err(|e| during(RepositoryOperation::Delete)(e).with_entity_id(id.to_string()))?;

        Ok(deleted.is_some())
    }

    async fn search(&self, query: &str, limit: u64) -> RepositoryResult<Vec<Report>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut response = self
            .client
            .query(
                "SELECT * FROM type::table($table) \
                 WHERE title @1@ $query OR description @2@ $query OR location @3@ $query \
                 ORDER BY sort_key DESC LIMIT $limit",
            )
            .bind(("table", TABLE))
            .bind(("query", query.to_string()))
            .bind(("limit", limit.min(MAX_WINDOW)))
            .await
            .map_err(during(RepositoryOperation::Search))?;

        let docs: Vec<ReportDocument> = response
            .take(0)
            .map_err(during(RepositoryOperation::Search))?;

        decode_all(docs, RepositoryOperation::Search)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.client
            .health()
            .await
            .map_err(during(RepositoryOperation::Ping))
    }
}

/// Create a SurrealDB client with configurable retries
///
/// Uses exponential backoff strategy for retries
async fn create_client_with_retries(
    config: &StoreConfig,
    max_retries: u32,
) -> RepositoryResult<SurrealClient> {
    let mut attempt = 0;
    let base_delay = Duration::from_secs(config.retry_delay_secs);

    loop {
        match try_create_client(config).await {
            Ok(client) => {
                if attempt > 0 {
                    tracing::info!(
                        "SurrealDB connection established after {} attempt(s)",
                        attempt + 1
                    );
                } else {
                    tracing::info!(
                        "SurrealDB connected: url={}, ns={}, db={}",
                        sanitize_url(&config.url),
                        config.namespace,
                        config.database
                    );
                }
                return Ok(client);
            }
            Err(e) => {
                attempt += 1;

                if attempt > max_retries {
                    tracing::error!(
                        "Failed to connect to SurrealDB after {} attempts: {}",
                        max_retries + 1,
                        e
                    );
                    return Err(e);
                }

                let delay_multiplier = 2_u32.saturating_pow(attempt.saturating_sub(1));
                let delay = base_delay.saturating_mul(delay_multiplier);

                tracing::warn!(
                    "SurrealDB connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Attempt to create a SurrealDB client (single try)
async fn try_create_client(config: &StoreConfig) -> RepositoryResult<SurrealClient> {
    let url_safe = sanitize_url(&config.url);
    tracing::debug!("Connecting to SurrealDB: {}", url_safe);

    let client = surrealdb::engine::any::connect(config.url.as_str())
        .await
        .map_err(|e| {
            RepositoryError::connection_failed(
                RepositoryOperation::Connect,
                format!("failed to connect to '{}': {}", url_safe, e),
            )
        })?;

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client
            .signin(surrealdb::opt::auth::Root { username, password })
            .await
            .map_err(|e| {
                RepositoryError::connection_failed(
                    RepositoryOperation::Connect,
                    format!("failed to authenticate with '{}': {}", url_safe, e),
                )
            })?;
    }

    client
        .use_ns(&config.namespace)
        .use_db(&config.database)
        .await
        .map_err(|e| {
            RepositoryError::connection_failed(
                RepositoryOperation::Connect,
                format!(
                    "failed to select namespace '{}' / database '{}': {}",
                    config.namespace, config.database, e
                ),
            )
        })?;

    Ok(client)
}

/// Sanitize connection URL for safe logging (remove credentials if present)
pub fn sanitize_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(scheme_end) = url.find("://") {
            let scheme = &url[..scheme_end + 3];
            let after_at = &url[at_pos..];
            return format!("{}***{}", scheme, after_at);
        }
    }
    url.to_string()
}
