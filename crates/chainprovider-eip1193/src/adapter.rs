//! The validating EIP-1193 adapter.
//!
//! Owns exactly one installed client at a time. Requests pass through to it
//! untouched; its native event emission is re-exposed through a normalized
//! listener surface where every listener receives the full emitted payload
//! as a single ordered sequence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use chainprovider_core::{
    ClientCandidate, ClientError, EventListener, JsonRpcResponse, ProviderError, ProviderEvent,
    RawListener, RequestArguments,
};

use crate::validate::{validate, InstalledClient};

type ListenerTable = Arc<Mutex<HashMap<ProviderEvent, Vec<EventListener>>>>;

/// Validating adapter over an EIP-1193 client.
///
/// Construction and reconfiguration both run shape validation first; a
/// rejected candidate never causes any observable state change, so the
/// adapter is never half-configured.
pub struct Eip1193Adapter {
    client: InstalledClient,
    listeners: ListenerTable,
}

impl std::fmt::Debug for Eip1193Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eip1193Adapter").finish_non_exhaustive()
    }
}

impl Eip1193Adapter {
    /// Validate `candidate` and build an adapter around it.
    ///
    /// Fails with [`ProviderError::InvalidClient`] if the candidate lacks
    /// either capability; no adapter is produced in that case.
    pub fn new(candidate: ClientCandidate) -> Result<Self, ProviderError> {
        let client = validate(candidate)?;
        let adapter = Self {
            client,
            listeners: Arc::new(Mutex::new(HashMap::new())),
        };
        adapter.attach_forwarding();
        Ok(adapter)
    }

    /// Replace the installed client with `candidate`.
    ///
    /// Validation runs before any state change: on failure the previous
    /// client, its forwarding hooks and every registered listener stay fully
    /// intact. On success the client reference is swapped wholesale and
    /// forwarding hooks are registered fresh on the new client — a
    /// re-subscription, not a migration of hook objects.
    pub fn set_client(&mut self, candidate: ClientCandidate) -> Result<(), ProviderError> {
        let client = validate(candidate)?;
        self.client = client;
        self.attach_forwarding();
        tracing::debug!("installed new EIP-1193 client");
        Ok(())
    }

    /// Forward `args` to the installed client and return its response.
    ///
    /// The arguments, the response and any client failure all pass through
    /// unmodified. The future is created from the client installed at call
    /// time; a later [`set_client`](Self::set_client) does not redirect it.
    pub async fn request(&self, args: RequestArguments) -> Result<JsonRpcResponse, ClientError> {
        (self.client.request)(args).await
    }

    /// Register a normalized listener for `event`.
    ///
    /// When the installed client emits `event` with payload values
    /// `v1, v2, ...`, `listener` is invoked with exactly one argument: the
    /// ordered sequence `[v1, v2, ...]`.
    pub fn on<F>(&self, event: ProviderEvent, listener: F)
    where
        F: Fn(Vec<Value>) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap()
            .entry(event)
            .or_default()
            .push(Arc::new(listener));
    }

    /// Number of normalized listeners registered for `event`.
    pub fn listener_count(&self, event: ProviderEvent) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&event)
            .map_or(0, Vec::len)
    }

    /// Register one forwarding hook per recognized event on the installed
    /// client. Hooks capture the shared listener table, so listeners added
    /// before or after this call are reached the same way.
    fn attach_forwarding(&self) {
        for event in ProviderEvent::ALL {
            let listeners = Arc::clone(&self.listeners);
            let hook: RawListener = Arc::new(move |payload: &[Value]| {
                // Snapshot under the lock, invoke outside it — a listener
                // may re-enter the adapter.
                let registered: Vec<EventListener> = listeners
                    .lock()
                    .unwrap()
                    .get(&event)
                    .cloned()
                    .unwrap_or_default();
                if registered.is_empty() {
                    return;
                }
                tracing::debug!(event = %event, payload_len = payload.len(), "forwarding provider event");
                let normalized = payload.to_vec();
                for listener in &registered {
                    listener(normalized.clone());
                }
            });
            (self.client.on)(event, hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chainprovider_core::{ClientEmitter, Eip1193Client};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EmitterClient {
        emitter: ClientEmitter,
        response_id: u64,
    }

    #[async_trait]
    impl Eip1193Client for EmitterClient {
        async fn request(&self, _args: RequestArguments) -> Result<JsonRpcResponse, ClientError> {
            Ok(JsonRpcResponse::result(self.response_id, json!([])))
        }

        fn on(&self, event: ProviderEvent, listener: RawListener) {
            self.emitter.on(event, listener);
        }
    }

    fn emitter_client(response_id: u64) -> (Arc<EmitterClient>, ClientCandidate) {
        let client = Arc::new(EmitterClient {
            emitter: ClientEmitter::new(),
            response_id,
        });
        let candidate = ClientCandidate::from_client(Arc::clone(&client) as Arc<dyn Eip1193Client>);
        (client, candidate)
    }

    #[tokio::test]
    async fn request_passes_through() {
        let (_, candidate) = emitter_client(1);
        let adapter = Eip1193Adapter::new(candidate).unwrap();
        let resp = adapter
            .request(RequestArguments::method_only("foo"))
            .await
            .unwrap();
        assert_eq!(resp, JsonRpcResponse::result(1, json!([])));
    }

    #[tokio::test]
    async fn client_error_passes_through() {
        let candidate = ClientCandidate::new()
            .with_request(|_| {
                Box::pin(async { Err(ClientError::Disconnected("gone".into())) })
            })
            .with_on(|_, _| {});
        let adapter = Eip1193Adapter::new(candidate).unwrap();
        let err = adapter
            .request(RequestArguments::method_only("foo"))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Disconnected("gone".into()));
    }

    #[tokio::test]
    async fn reconfigure_routes_to_new_client() {
        let (_, first) = emitter_client(1);
        let (_, second) = emitter_client(42);
        let mut adapter = Eip1193Adapter::new(first).unwrap();
        adapter.set_client(second).unwrap();

        let resp = adapter
            .request(RequestArguments::method_only("foo"))
            .await
            .unwrap();
        assert_eq!(resp, JsonRpcResponse::result(42, json!([])));
    }

    #[tokio::test]
    async fn failed_reconfigure_keeps_old_client() {
        let (client, candidate) = emitter_client(7);
        let mut adapter = Eip1193Adapter::new(candidate).unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        adapter.on(ProviderEvent::Disconnect, move |_| {
            hits_clone.fetch_add(1, Ordering::Relaxed);
        });

        assert!(adapter.set_client(ClientCandidate::new()).is_err());

        // Old client still serves requests and still forwards events.
        let resp = adapter
            .request(RequestArguments::method_only("foo"))
            .await
            .unwrap();
        assert_eq!(resp, JsonRpcResponse::result(7, json!([])));

        client.emitter.emit(ProviderEvent::Disconnect, &[json!("bye")]);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn multi_value_emission_collapses_to_one_sequence() {
        let (client, candidate) = emitter_client(1);
        let adapter = Eip1193Adapter::new(candidate).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        adapter.on(ProviderEvent::ChainChanged, move |payload| {
            seen_clone.lock().unwrap().push(payload);
        });

        client
            .emitter
            .emit(ProviderEvent::ChainChanged, &[json!("0x1"), json!("0x2"), json!(3)]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "one invocation per emission");
        assert_eq!(seen[0], vec![json!("0x1"), json!("0x2"), json!(3)]);
    }

    #[test]
    fn listener_registered_before_reconfigure_survives() {
        let (_, first) = emitter_client(1);
        let (second_client, second) = emitter_client(2);
        let mut adapter = Eip1193Adapter::new(first).unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        adapter.on(ProviderEvent::AccountsChanged, move |payload| {
            assert_eq!(payload, vec![json!(["0xabc"])]);
            hits_clone.fetch_add(1, Ordering::Relaxed);
        });

        adapter.set_client(second).unwrap();
        second_client
            .emitter
            .emit(ProviderEvent::AccountsChanged, &[json!(["0xabc"])]);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn events_do_not_cross_names() {
        let (client, candidate) = emitter_client(1);
        let adapter = Eip1193Adapter::new(candidate).unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        adapter.on(ProviderEvent::Connect, move |_| {
            hits_clone.fetch_add(1, Ordering::Relaxed);
        });

        client.emitter.emit(ProviderEvent::Disconnect, &[json!("x")]);
        assert_eq!(hits.load(Ordering::Relaxed), 0);
        client.emitter.emit(ProviderEvent::Connect, &[json!("x")]);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn listener_count_tracks_registrations() {
        let (_, candidate) = emitter_client(1);
        let adapter = Eip1193Adapter::new(candidate).unwrap();
        assert_eq!(adapter.listener_count(ProviderEvent::Message), 0);
        adapter.on(ProviderEvent::Message, |_| {});
        adapter.on(ProviderEvent::Message, |_| {});
        assert_eq!(adapter.listener_count(ProviderEvent::Message), 2);
    }
}
