//! Tests for the suggestion worker thread

use super::*;
use crate::suggest::source::{ResponseFormat, SourceDescriptor};
use crate::suggest::transport::{FetchError, Transport};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Echoes the requested query back as a single OpenSearch suggestion,
/// sleeping longer for shorter queries so completions arrive out of order
struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let query = url.rsplit("q=").next().unwrap_or_default().to_string();
        let delay = 200u64.saturating_sub(query.len() as u64 * 40);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(json!([query.clone(), [format!("{} result", query)]]))
    }
}

fn echo_chain() -> SourceChain {
    SourceChain::with_sources(
        vec![SourceDescriptor::new(
            "echo",
            "mock://echo?q={q}",
            ResponseFormat::OpenSearch,
        )],
        Arc::new(EchoTransport),
    )
}

fn wait_for_responses(handle: &FetchHandle, count: usize, timeout_ms: u64) -> Vec<FetchResponse> {
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);
    let mut responses = Vec::new();

    while responses.len() < count && start.elapsed() < timeout {
        match handle.try_recv() {
            Some(response) => responses.push(response),
            None => std::thread::sleep(Duration::from_millis(10)),
        }
    }

    responses
}

#[test]
fn test_worker_returns_tagged_response() {
    let handle = spawn_worker(echo_chain()).unwrap();

    assert!(handle.dispatch("weat".to_string()));
    let responses = wait_for_responses(&handle, 1, 2000);

    assert_eq!(
        responses,
        vec![FetchResponse {
            query: "weat".to_string(),
            suggestions: vec!["weat result".to_string()],
        }]
    );
}

#[test]
fn test_worker_short_query_returns_empty_list() {
    let handle = spawn_worker(echo_chain()).unwrap();

    handle.dispatch("w".to_string());
    let responses = wait_for_responses(&handle, 1, 2000);

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].query, "w");
    assert!(responses[0].suggestions.is_empty());
}

#[test]
fn test_slow_request_does_not_block_newer_one() {
    let handle = spawn_worker(echo_chain()).unwrap();

    // "ab" sleeps 120ms, "abcd" sleeps 40ms
    handle.dispatch("ab".to_string());
    handle.dispatch("abcd".to_string());
    let responses = wait_for_responses(&handle, 2, 2000);

    let order: Vec<&str> = responses.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(order, vec!["abcd", "ab"]);
}

#[test]
fn test_from_channels_round_trip() {
    let (request_tx, mut request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let handle = FetchHandle::from_channels(request_tx, response_rx);

    assert!(handle.dispatch("weather".to_string()));
    assert_eq!(request_rx.try_recv().unwrap(), "weather");

    assert!(handle.try_recv().is_none());
    response_tx
        .send(FetchResponse {
            query: "weather".to_string(),
            suggestions: vec!["weather today".to_string()],
        })
        .unwrap();
    assert_eq!(handle.try_recv().unwrap().suggestions, vec!["weather today"]);
}

#[test]
fn test_dispatch_fails_after_worker_side_dropped() {
    let (request_tx, request_rx) = unbounded_channel::<String>();
    let (_response_tx, response_rx) = mpsc::channel();
    let handle = FetchHandle::from_channels(request_tx, response_rx);

    drop(request_rx);

    assert!(!handle.dispatch("weather".to_string()));
}
