//! Structural validation of provider candidates.
//!
//! A candidate is acceptable iff it exposes a callable RPC capability and a
//! callable event-registration capability. The check is shape-based only;
//! no nominal typing is involved. Anything less fails loudly with a
//! structured [`ErrorReport`] — validation never returns a sentinel.

use serde_json::json;

use chainprovider_core::{ClientCandidate, ErrorReport, ProviderError, RequestFn, SubscribeFn};

/// Numeric code carried by `invalidClient` reports.
pub const INVALID_CLIENT_CODE: u32 = 1;

/// Message carried by `invalidClient` reports.
pub const INVALID_CLIENT_MSG: &str = "Provided web3Client is an invalid EIP-1193 client";

/// A candidate that passed validation: both capabilities, no longer optional.
///
/// The only way to obtain one is [`validate`], so holding an
/// `InstalledClient` is itself the proof the shape check ran.
#[derive(Clone)]
pub struct InstalledClient {
    pub(crate) request: RequestFn,
    pub(crate) on: SubscribeFn,
}

impl std::fmt::Debug for InstalledClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstalledClient").finish_non_exhaustive()
    }
}

/// Pure shape predicate: does `candidate` expose both required capabilities?
pub fn is_valid_client(candidate: &ClientCandidate) -> bool {
    candidate.has_request() && candidate.has_on()
}

/// Validate `candidate` and split it into its capabilities.
///
/// Raises [`ProviderError::InvalidClient`] immediately if either capability
/// is missing. The report embeds the serialized rejected candidate under the
/// `web3Client` key.
pub fn validate(candidate: ClientCandidate) -> Result<InstalledClient, ProviderError> {
    match candidate.clone().into_capabilities() {
        Some((request, on)) => Ok(InstalledClient { request, on }),
        None => Err(ProviderError::InvalidClient(ErrorReport::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            INVALID_CLIENT_CODE,
            "invalidClient",
            INVALID_CLIENT_MSG,
            json!({ "web3Client": candidate }),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainprovider_core::JsonRpcResponse;
    use futures::FutureExt;
    use serde_json::Value;

    fn request_only() -> ClientCandidate {
        ClientCandidate::new()
            .with_request(|_| async { Ok(JsonRpcResponse::result(1, Value::Null)) }.boxed())
    }

    #[test]
    fn predicate_requires_both_capabilities() {
        assert!(!is_valid_client(&ClientCandidate::new()));
        assert!(!is_valid_client(&request_only()));
        assert!(!is_valid_client(&ClientCandidate::new().with_on(|_, _| {})));
        assert!(is_valid_client(&request_only().with_on(|_, _| {})));
    }

    #[test]
    fn valid_candidate_splits() {
        let installed = validate(request_only().with_on(|_, _| {}));
        assert!(installed.is_ok());
    }

    #[test]
    fn invalid_candidate_report_fields() {
        let err = validate(ClientCandidate::new()).unwrap_err();
        let report = err.report();
        assert_eq!(report.code, INVALID_CLIENT_CODE);
        assert_eq!(report.name, "invalidClient");
        assert_eq!(report.msg, INVALID_CLIENT_MSG);
        assert_eq!(report.params.to_string(), r#"{"web3Client":{}}"#);
    }

    #[test]
    fn partial_candidate_still_rejected() {
        // One capability out of two is not enough.
        let err = validate(request_only()).unwrap_err();
        assert_eq!(err.report().name, "invalidClient");
    }
}
