//! The EIP-1193 client contract and the duck-typed candidate record.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ClientError;
use crate::event::{ProviderEvent, RawListener};
use crate::request::{JsonRpcResponse, RequestArguments};

/// Future returned by a client's request capability.
pub type RequestFuture = BoxFuture<'static, Result<JsonRpcResponse, ClientError>>;

/// The RPC capability: takes request arguments, resolves to the client's
/// response (or the client's own error).
pub type RequestFn = Arc<dyn Fn(RequestArguments) -> RequestFuture + Send + Sync>;

/// The event-registration capability: attaches a raw listener to one event
/// on the client's own emission mechanism.
pub type SubscribeFn = Arc<dyn Fn(ProviderEvent, RawListener) + Send + Sync>;

/// A typed EIP-1193 client.
///
/// Concrete providers (in-memory stubs, wallet bridges, transports) implement
/// this; [`ClientCandidate::from_client`] turns any of them into a candidate
/// that trivially passes shape validation.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn Eip1193Client>`.
#[async_trait]
pub trait Eip1193Client: Send + Sync + 'static {
    /// Handle an RPC request and resolve with the response.
    async fn request(&self, args: RequestArguments) -> Result<JsonRpcResponse, ClientError>;

    /// Register `listener` for `event` on the client's emitter.
    fn on(&self, event: ProviderEvent, listener: RawListener);
}

/// An externally supplied object of unknown provenance, offered as an
/// EIP-1193 client.
///
/// The two capability slots are optional on purpose: whether a candidate
/// actually exposes both is precisely what validation decides. Nothing about
/// the candidate's nominal type matters — only the shape.
#[derive(Clone, Default)]
pub struct ClientCandidate {
    request: Option<RequestFn>,
    on: Option<SubscribeFn>,
}

impl ClientCandidate {
    /// An empty candidate with neither capability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an RPC capability.
    pub fn with_request<F>(mut self, request: F) -> Self
    where
        F: Fn(RequestArguments) -> RequestFuture + Send + Sync + 'static,
    {
        self.request = Some(Arc::new(request));
        self
    }

    /// Attach an event-registration capability.
    pub fn with_on<F>(mut self, on: F) -> Self
    where
        F: Fn(ProviderEvent, RawListener) + Send + Sync + 'static,
    {
        self.on = Some(Arc::new(on));
        self
    }

    /// Build a candidate from a typed client. Both capability slots are
    /// filled by delegating to the trait methods.
    pub fn from_client(client: Arc<dyn Eip1193Client>) -> Self {
        let request_client = Arc::clone(&client);
        Self::new()
            .with_request(move |args| {
                let client = Arc::clone(&request_client);
                async move { client.request(args).await }.boxed()
            })
            .with_on(move |event, listener| client.on(event, listener))
    }

    /// `true` if the RPC capability slot is callable.
    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }

    /// `true` if the event-registration capability slot is callable.
    pub fn has_on(&self) -> bool {
        self.on.is_some()
    }

    /// Split into both capabilities, or `None` if either is missing.
    pub fn into_capabilities(self) -> Option<(RequestFn, SubscribeFn)> {
        Some((self.request?, self.on?))
    }
}

impl std::fmt::Debug for ClientCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCandidate")
            .field("request", &self.has_request())
            .field("on", &self.has_on())
            .finish()
    }
}

// Callable members have no JSON representation, so a candidate serializes to
// an empty object. This matches what the structured error report embeds for
// a rejected candidate.
impl Serialize for ClientCandidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}
