//! Store error types
//!
//! Every [`ReportStore`](super::ReportStore) method fails with a
//! [`RepositoryError`] that records which operation failed and why.
//!
//! # Example
//!
//! ```rust
//! use reports_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::connection_failed(RepositoryOperation::Count, "connection refused");
//! assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
//! assert!(error.is_retriable());
//! ```

use std::fmt;

/// Store operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Establishing the store connection
    Connect,
    /// Defining indexes and analyzers
    DefineIndexes,
    /// Inserting a new report
    Insert,
    /// Fetching one page of reports
    FindPage,
    /// Counting reports
    Count,
    /// Looking up a report by id
    FindById,
    /// Removing a report by id
    Delete,
    /// Full-text search
    Search,
    /// Readiness ping
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::DefineIndexes => write!(f, "define_indexes"),
            Self::Insert => write!(f, "insert"),
            Self::FindPage => write!(f, "find_page"),
            Self::Count => write!(f, "count"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Delete => write!(f, "delete"),
            Self::Search => write!(f, "search"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Failed to connect or authenticate
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Query was rejected or failed to execute
    QueryFailed,
    /// A record could not be encoded or decoded
    SerializationError,
    /// Permission denied by the store
    PermissionDenied,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::PermissionDenied => write!(f, "permission_denied"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message (never sent to clients)
    pub message: String,
    /// The id of the report involved, if any
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new store error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ConnectionFailed, message)
    }

    /// Create a query failed error
    pub fn query_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::QueryFailed, message)
    }

    /// Create a serialization error
    pub fn serialization_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::SerializationError, message)
    }

    /// Attach the id of the report involved
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is transient and may succeed on retry
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref entity_id) = self.entity_id {
            write!(f, " [report: {}]", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

// SurrealDB reports most failures as strings, so classify by message content.
impl From<surrealdb::Error> for RepositoryError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        let lower = msg.to_lowercase();

        let (kind, operation) = if lower.contains("timeout") || lower.contains("timed out") {
            (RepositoryErrorKind::Timeout, RepositoryOperation::FindPage)
        } else if lower.contains("connect")
            || lower.contains("auth")
            || lower.contains("signin")
            || lower.contains("credentials")
        {
            (
                RepositoryErrorKind::ConnectionFailed,
                RepositoryOperation::Connect,
            )
        } else if lower.contains("permission")
            || lower.contains("not allowed")
            || lower.contains("denied")
        {
            (
                RepositoryErrorKind::PermissionDenied,
                RepositoryOperation::FindPage,
            )
        } else if lower.contains("serializ") || lower.contains("deserializ") {
            (
                RepositoryErrorKind::SerializationError,
                RepositoryOperation::FindPage,
            )
        } else if lower.contains("parse") || lower.contains("syntax") {
            (RepositoryErrorKind::QueryFailed, RepositoryOperation::FindPage)
        } else {
            (RepositoryErrorKind::Other, RepositoryOperation::FindPage)
        };

        Self::new(operation, kind, msg)
    }
}
