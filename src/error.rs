//! Typed errors for the audit core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The POR reference feed carried a primary key that does not match
    /// the `{country}-{admin}-{geo id}` shape. The feed is considered
    /// corrupt and index construction is aborted.
    #[error("malformed POR primary key '{pk}' in record {record}")]
    MalformedPorKey { pk: String, record: usize },

    /// A station code with no entry in the coordinate index.
    #[error("station '{0}' is not referenced in the coordinate index")]
    UnknownStation(String),
}
