// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP Inventory Source Tests
//!
//! Serves canned responses from a throwaway local listener and checks that
//! every failure mode surfaces as `BackingStoreUnavailable`.

mod fixtures;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cim_infrastructure_cassandra::config::InventoryConfig;
use cim_infrastructure_cassandra::inventory::{HttpInventorySource, InventorySource};
use cim_infrastructure_cassandra::TopologyError;

use fixtures::*;

/// Serve a single HTTP response on a fresh port and return the base URL
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

fn source(base_url: String, timeout_secs: u64) -> HttpInventorySource {
    HttpInventorySource::new(InventoryConfig {
        base_url,
        path: "/hosts".to_string(),
        timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_manifest() {
    let source = source(serve_once("200 OK", MANIFEST).await, 5);

    let hosts: HashSet<_> = source.hosts().await.unwrap().into_iter().collect();
    let expected: HashSet<_> = manifest_hosts().into_iter().collect();
    assert_eq!(hosts, expected);
}

#[tokio::test]
async fn test_fetch_empty_manifest() {
    let source = source(serve_once("200 OK", EMPTY_MANIFEST).await, 5);
    assert!(source.hosts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_bad_manifest() {
    let source = source(serve_once("200 OK", BAD_MANIFEST).await, 5);

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, TopologyError::BackingStoreUnavailable(_)));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let source = source(serve_once("503 Service Unavailable", "").await, 5);

    let err = source.fetch().await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = source(format!("http://{}", addr), 5);
    let err = source.fetch().await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_fetch_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and never answer
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let source = source(format!("http://{}", addr), 1);
    let started = Instant::now();
    let err = source.fetch().await.unwrap_err();

    assert!(err.is_unavailable());
    assert!(started.elapsed() < Duration::from_secs(10));
}
