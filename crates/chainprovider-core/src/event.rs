//! Provider event taxonomy and emission plumbing.
//!
//! EIP-1193 defines a closed set of provider events. The enum below is that
//! set — event names outside it are not representable, which is what keeps
//! the adapter's forwarding table finite.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of EIP-1193 provider events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderEvent {
    /// Provider became connected to a chain.
    Connect,
    /// Provider became disconnected from all chains.
    Disconnect,
    /// Provider received a notification (e.g. a subscription update).
    Message,
    /// The active chain changed.
    ChainChanged,
    /// The set of exposed accounts changed.
    AccountsChanged,
}

impl ProviderEvent {
    /// Every recognized event, in a fixed order. Forwarding setup iterates
    /// this so coverage is complete by construction.
    pub const ALL: [ProviderEvent; 5] = [
        Self::Connect,
        Self::Disconnect,
        Self::Message,
        Self::ChainChanged,
        Self::AccountsChanged,
    ];

    /// The wire name of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::Message => "message",
            Self::ChainChanged => "chainChanged",
            Self::AccountsChanged => "accountsChanged",
        }
    }
}

impl std::fmt::Display for ProviderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listener shape a wrapped client invokes natively: the emitted payload
/// values arrive as separate positional values (a borrowed slice).
pub type RawListener = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Normalized listener shape the adapter exposes: exactly one argument, the
/// full ordered payload.
pub type EventListener = Arc<dyn Fn(Vec<Value>) + Send + Sync>;

/// A minimal event-emitter table for concrete clients.
///
/// Clients that push events (stubs, in-memory providers, transports) keep
/// their listener registrations here and call [`ClientEmitter::emit`] when
/// something happens. The adapter does not use this type for its own
/// bookkeeping — it only ever registers listeners through a client's `on`
/// capability.
#[derive(Clone, Default)]
pub struct ClientEmitter {
    listeners: Arc<Mutex<HashMap<ProviderEvent, Vec<RawListener>>>>,
}

impl ClientEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event`.
    pub fn on(&self, event: ProviderEvent, listener: RawListener) {
        self.listeners
            .lock()
            .unwrap()
            .entry(event)
            .or_default()
            .push(listener);
    }

    /// Emit `event` with positional payload values.
    ///
    /// Returns `true` if at least one listener was invoked. Listeners are
    /// called in registration order, outside the table lock.
    pub fn emit(&self, event: ProviderEvent, payload: &[Value]) -> bool {
        let registered: Vec<RawListener> = self
            .listeners
            .lock()
            .unwrap()
            .get(&event)
            .cloned()
            .unwrap_or_default();
        for listener in &registered {
            listener(payload);
        }
        !registered.is_empty()
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: ProviderEvent) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&event)
            .map_or(0, Vec::len)
    }
}
