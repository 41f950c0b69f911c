//! Type-safe identifiers in the TypeID format
//!
//! Identifiers combine a readable prefix with a base32-encoded UUIDv7, so
//! they are unique, time-sortable, and self-describing in logs:
//!
//! - [`RequestId`]: `req_01h455vb4pex5vsknk084sn02q`, one per HTTP request
//! - [`ReportId`]: `report_01h455vb4pex5vsknk084sn02q`, one per stored report
//!
//! ```rust
//! use reports_service::ids::{ReportId, RequestId};
//!
//! assert!(RequestId::new().as_str().starts_with("req_"));
//! assert!(ReportId::new().as_str().starts_with("report_"));
//! ```

use http::Request;
use mti::prelude::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};

/// Error type for identifier parsing.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// The string is not a valid TypeID.
    #[error("failed to parse id: {0}")]
    Parse(#[from] MagicTypeIdError),

    /// The prefix was not the expected value.
    #[error("invalid prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        /// The expected prefix.
        expected: String,
        /// The actual prefix found.
        actual: String,
    },
}

fn parse_with_prefix(s: &str, prefix: &str) -> Result<MagicTypeId, IdError> {
    let mti = MagicTypeId::from_str(s)?;
    if mti.prefix().as_str() != prefix {
        return Err(IdError::InvalidPrefix {
            expected: prefix.to_string(),
            actual: mti.prefix().as_str().to_string(),
        });
    }
    Ok(mti)
}

/// A type-safe request identifier for log correlation.
///
/// Generated for every incoming HTTP request by [`MakeTypedRequestId`] and
/// echoed back in the `x-request-id` response header.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(MagicTypeId);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with_prefix(s, Self::PREFIX).map(Self)
    }
}

/// Identifier of a stored report.
///
/// Assigned by the store on insert and never changed afterwards. Because the
/// suffix is a UUIDv7, ids created later compare greater.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(MagicTypeId);

impl ReportId {
    /// The prefix used for report IDs
    pub const PREFIX: &'static str = "report";

    /// Creates a fresh report ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the report ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with_prefix(s, Self::PREFIX).map(Self)
    }
}

impl Serialize for ReportId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A `MakeRequestId` implementation that generates [`RequestId`]s for tower-http.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_new() {
        let id = RequestId::new();
        assert!(id.as_str().starts_with("req_"));
        // prefix (3) + underscore (1) + suffix (26)
        assert_eq!(id.as_str().len(), 30);
    }

    #[test]
    fn test_report_id_roundtrip_through_str() {
        let id_str = "report_01h455vb4pex5vsknk084sn02q";
        let id = ReportId::from_str(id_str).unwrap();
        assert_eq!(id.as_str(), id_str);
        assert_eq!(id.to_string(), id_str);
    }

    #[test]
    fn test_report_id_rejects_other_prefix() {
        let result = ReportId::from_str("req_01h455vb4pex5vsknk084sn02q");
        match result.unwrap_err() {
            IdError::InvalidPrefix { expected, actual } => {
                assert_eq!(expected, "report");
                assert_eq!(actual, "req");
            }
            other => panic!("Expected InvalidPrefix error, got {other:?}"),
        }
    }

    #[test]
    fn test_report_id_rejects_garbage() {
        assert!(ReportId::from_str("not-an-id").is_err());
        assert!(ReportId::from_str("report_invalid").is_err());
        assert!(ReportId::from_str("").is_err());
    }

    #[test]
    fn test_report_ids_are_time_ordered() {
        let first = ReportId::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = ReportId::new();
        assert!(first < second);
    }

    #[test]
    fn test_report_id_serde_as_string() {
        let id = ReportId::from_str("report_01h455vb4pex5vsknk084sn02q").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"report_01h455vb4pex5vsknk084sn02q\"");

        let back: ReportId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ReportId>("\"user_01h455vb4pex5vsknk084sn02q\"").is_err());
    }

    #[test]
    fn test_make_typed_request_id() {
        let mut maker = MakeTypedRequestId;
        let request = http::Request::builder().body(()).unwrap();

        let header_value = maker.make_request_id(&request).unwrap().into_header_value();
        assert!(header_value.to_str().unwrap().starts_with("req_"));
    }
}
