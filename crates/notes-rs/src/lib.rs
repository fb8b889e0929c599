//! Notes service SDK surface.
//!
//! Re-exports the building blocks used by the `notes-rs` binary so that
//! embedders can assemble the same server with their own repository or config.

/// Re-export for convenience.
pub use notes_rs_config as config;
pub use notes_rs_core as core;
/// Re-export for convenience.
pub use notes_rs_server as server;

use serde_json::{Map, Value, json};
use std::net::IpAddr;

/// Initialize `env_logger` with millisecond timestamps, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}

/// Runtime config layer built from listener flags; `None` when no flag is set.
pub fn listener_overrides(address: Option<IpAddr>, port: Option<u16>) -> Option<Value> {
    let mut server = Map::new();
    if let Some(address) = address {
        server.insert("address".to_string(), json!(address.to_string()));
    }
    if let Some(port) = port {
        server.insert("port".to_string(), json!(port));
    }
    if server.is_empty() {
        None
    } else {
        Some(json!({ "server": server }))
    }
}
