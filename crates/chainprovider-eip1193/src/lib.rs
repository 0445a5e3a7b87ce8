//! chainprovider-eip1193 — validating adapter over EIP-1193 clients.
//!
//! # Features
//! - Structural (duck-typed) capability validation at construction and
//!   reconfiguration, failing loudly with a structured report
//! - Transparent request passthrough to the installed client
//! - Normalized event delivery: every listener receives the full emitted
//!   payload as one ordered sequence
//!
//! # Quick start
//! ```rust,no_run
//! use chainprovider_core::{ClientCandidate, ProviderEvent, RequestArguments};
//! use chainprovider_eip1193::Eip1193Adapter;
//!
//! # async fn run(candidate: ClientCandidate) -> Result<(), Box<dyn std::error::Error>> {
//! let adapter = Eip1193Adapter::new(candidate)?;
//! adapter.on(ProviderEvent::ChainChanged, |payload| {
//!     println!("chain changed: {payload:?}");
//! });
//! let resp = adapter.request(RequestArguments::method_only("eth_chainId")).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod validate;

pub use adapter::Eip1193Adapter;
pub use validate::{is_valid_client, validate, InstalledClient};
