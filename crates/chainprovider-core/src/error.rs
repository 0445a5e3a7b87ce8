//! Error types for the provider adapter and for wrapped clients.

use thiserror::Error;

use crate::report::ErrorReport;
use crate::request::JsonRpcError;

/// Errors a wrapped client's RPC capability may produce.
///
/// The adapter never constructs or translates one of these — whatever the
/// installed client fails with is handed to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// JSON-RPC protocol-level error returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// The client lost its connection to all chains.
    #[error("provider disconnected: {0}")]
    Disconnected(String),

    /// Any other client-side failure.
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the adapter itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    /// A candidate failed structural validation at construction or
    /// reconfiguration. Carries the full structured report; the error's
    /// string form is the report's seven-line format.
    #[error("{0}")]
    InvalidClient(ErrorReport),
}

impl ProviderError {
    /// The structured report behind this error.
    pub fn report(&self) -> &ErrorReport {
        match self {
            Self::InvalidClient(report) => report,
        }
    }
}
