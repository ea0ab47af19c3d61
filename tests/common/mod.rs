//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod scripted_source;

use std::net::TcpListener;
use std::time::Duration;

use phonelist::config::SourceConfig;
use phonelist::fetch::FetchError;
use phonelist::model::{Dataset, Record};

pub use scripted_source::{ScriptedSource, Step};

/// Two-record list used throughout the scenarios.
pub fn phones() -> Dataset {
    vec![
        Record::new(1, "A", "555-0100"),
        Record::new(2, "B", "555-0200"),
    ]
}

/// A slightly larger list with mixed-case phones and an index.
pub fn directory() -> Dataset {
    vec![
        Record::new(1, "Alice", "+1 (555) 010-0001").with_index(0),
        Record::new(2, "Bob", "EXT-4410").with_index(1),
        Record::new("c3", "Carol", "ext-9910").with_index(2),
        Record::new(4, "Dave", "555-0200").with_index(3),
        Record::new(5, "Eve", "").with_index(4),
    ]
}

pub fn network_error() -> FetchError {
    FetchError::Network {
        reason: "connection refused".to_string(),
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Source config pointing at `endpoint` with short timeouts.
pub fn source_config(endpoint: &str) -> SourceConfig {
    SourceConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

/// Let spawned tasks make progress.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}
