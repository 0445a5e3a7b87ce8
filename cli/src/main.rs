//! chainprovider CLI — exercise the validating EIP-1193 adapter from
//! the terminal.
//!
//! Usage:
//! ```bash
//! # Run the adapter against an in-memory provider and show normalized events
//! chainprovider demo
//!
//! # Show what an invalid candidate is rejected with
//! chainprovider reject
//!
//! # List the recognized provider events
//! chainprovider events
//! ```

use std::env;
use std::process;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use chainprovider_core::{
    ClientCandidate, ClientEmitter, ClientError, Eip1193Client, JsonRpcResponse, ProviderEvent,
    RawListener, RequestArguments,
};
use chainprovider_eip1193::Eip1193Adapter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "demo" => cmd_demo().await,
        "reject" => cmd_reject(),
        "events" => {
            cmd_events();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("chainprovider {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("chainprovider {}", env!("CARGO_PKG_VERSION"));
    println!("Exercise the validating EIP-1193 provider adapter\n");
    println!("USAGE:");
    println!("    chainprovider <COMMAND>\n");
    println!("COMMANDS:");
    println!("    demo       Run the adapter against an in-memory provider");
    println!("    reject     Show the structured error for an invalid candidate");
    println!("    events     List the recognized provider events");
    println!("    version    Print version");
    println!("    help       Print this help");
}

/// In-memory provider used by the demo: answers every request with a canned
/// response and lets the demo emit events by hand.
struct DemoProvider {
    emitter: ClientEmitter,
}

#[async_trait]
impl Eip1193Client for DemoProvider {
    async fn request(&self, args: RequestArguments) -> Result<JsonRpcResponse, ClientError> {
        let result = match args.method.as_str() {
            "eth_chainId" => json!("0x1"),
            "eth_blockNumber" => json!("0x12d4f1c"),
            _ => json!([]),
        };
        Ok(JsonRpcResponse::result(1, result))
    }

    fn on(&self, event: ProviderEvent, listener: RawListener) {
        self.emitter.on(event, listener);
    }
}

async fn cmd_demo() -> Result<(), String> {
    let provider = Arc::new(DemoProvider {
        emitter: ClientEmitter::new(),
    });
    let adapter = Eip1193Adapter::new(ClientCandidate::from_client(Arc::clone(&provider) as Arc<dyn Eip1193Client>))
        .map_err(|e| e.to_string())?;

    println!("Adapter constructed over in-memory provider\n");

    for method in ["eth_chainId", "eth_blockNumber"] {
        let resp = adapter
            .request(RequestArguments::method_only(method))
            .await
            .map_err(|e| e.to_string())?;
        println!("  {method:<16} -> {}", serde_json::to_string(&resp).unwrap_or_default());
    }

    println!("\nNormalized event delivery (one sequence argument per emission):");
    for event in ProviderEvent::ALL {
        adapter.on(event, move |payload| {
            println!("  {event:<16} -> {}", json!(payload));
        });
    }

    provider.emitter.emit(ProviderEvent::Connect, &[json!({"chainId": "0x1"})]);
    provider.emitter.emit(ProviderEvent::ChainChanged, &[json!("0x89")]);
    provider
        .emitter
        .emit(ProviderEvent::AccountsChanged, &[json!(["0xabc"]), json!(["0xdef"])]);
    provider.emitter.emit(
        ProviderEvent::Message,
        &[json!({"type": "eth_subscription", "data": {}})],
    );
    provider.emitter.emit(ProviderEvent::Disconnect, &[json!({"code": 4900})]);

    Ok(())
}

fn cmd_reject() -> Result<(), String> {
    match Eip1193Adapter::new(ClientCandidate::new()) {
        Ok(_) => Err("empty candidate was unexpectedly accepted".into()),
        Err(e) => {
            println!("Empty candidate rejected with:\n");
            println!("{e}");
            Ok(())
        }
    }
}

fn cmd_events() {
    println!("Recognized provider events:\n");
    for event in ProviderEvent::ALL {
        println!("  {event}");
    }
}
