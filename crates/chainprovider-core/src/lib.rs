//! chainprovider-core — foundation types for ChainProvider.
//!
//! # Overview
//!
//! ChainProvider wraps an arbitrary object claiming to implement the
//! EIP-1193 provider contract, validates its shape, and normalizes its
//! event delivery. The core crate defines:
//!
//! - [`Eip1193Client`] — the typed client trait
//! - [`ClientCandidate`] — the duck-typed capability record validation runs on
//! - [`RequestArguments`] / [`JsonRpcResponse`] — wire types
//! - [`ProviderEvent`] — the closed event taxonomy
//! - [`ClientEmitter`] — emission table for concrete clients
//! - [`ErrorReport`] — structured error reporting
//! - [`ClientError`] / [`ProviderError`] — error types

pub mod client;
pub mod error;
pub mod event;
pub mod report;
pub mod request;

pub use client::{ClientCandidate, Eip1193Client, RequestFn, RequestFuture, SubscribeFn};
pub use error::{ClientError, ProviderError};
pub use event::{ClientEmitter, EventListener, ProviderEvent, RawListener};
pub use report::{ErrorReport, LOGGER_VERSION};
pub use request::{JsonRpcError, JsonRpcResponse, RequestArguments, RpcId, RpcParam};
