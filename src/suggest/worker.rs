//! Suggestion worker thread
//!
//! Runs the source chain on a dedicated tokio runtime so the UI thread
//! never blocks on the network. Each query becomes its own task; results
//! come back tagged with the query that produced them so the UI thread can
//! discard stale ones.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::chain::SourceChain;
use crate::error::NewtabError;

/// A finished fetch, tagged with the query that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// UI-side ends of the worker channels
#[derive(Debug)]
pub struct FetchHandle {
    request_tx: UnboundedSender<String>,
    response_rx: Receiver<FetchResponse>,
}

impl FetchHandle {
    /// Wrap existing channel ends
    pub fn from_channels(
        request_tx: UnboundedSender<String>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
        }
    }

    /// Queue a fetch; returns false if the worker has shut down
    pub fn dispatch(&self, query: String) -> bool {
        self.request_tx.send(query).is_ok()
    }

    /// Next finished fetch, if one is waiting
    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.response_rx.try_recv().ok()
    }
}

/// Spawn the suggestion worker thread
///
/// The worker exits once the returned handle is dropped.
pub fn spawn_worker(chain: SourceChain) -> Result<FetchHandle, NewtabError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| NewtabError::Worker(e.to_string()))?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || runtime.block_on(worker_loop(chain, request_rx, response_tx)))?;

    Ok(FetchHandle::from_channels(request_tx, response_rx))
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    chain: SourceChain,
    mut request_rx: UnboundedReceiver<String>,
    response_tx: Sender<FetchResponse>,
) {
    while let Some(query) = request_rx.recv().await {
        log::debug!("Dispatching suggestion fetch for {:?}", query);
        let chain = chain.clone();
        let response_tx = response_tx.clone();

        // In-flight fetches are not cancelled; the UI thread filters stale results
        tokio::spawn(async move {
            let suggestions = chain.fetch(&query).await;
            if response_tx
                .send(FetchResponse { query, suggestions })
                .is_err()
            {
                log::debug!("UI side gone, dropping suggestion result");
            }
        });
    }

    log::debug!("Suggestion worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
