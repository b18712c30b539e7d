//! Toggle Worker Thread
//!
//! Sends toggle requests from a background thread so the UI never blocks.
//! Each request runs as its own task, so overlapping toggles settle
//! independently; every request produces exactly one response.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::client::SubscriptionClient;
use super::toggle_types::{ToggleError, ToggleRequest, ToggleResponse};
use crate::config::Config;

/// Main-thread side of the worker; dropping it stops the worker
#[derive(Debug)]
pub struct WorkerHandle {
    request_tx: UnboundedSender<ToggleRequest>,
    shutdown: CancellationToken,
}

impl WorkerHandle {
    /// Queue a request; returns false if the worker has gone away
    pub fn send(&self, request: ToggleRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Handle with no thread behind it; requests land in the returned receiver
    #[cfg(test)]
    pub fn detached() -> (Self, UnboundedReceiver<ToggleRequest>) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let handle = Self {
            request_tx,
            shutdown: CancellationToken::new(),
        };
        (handle, request_rx)
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the toggle worker thread
///
/// # Arguments
/// * `config` - configuration used to build the HTTP client
/// * `response_tx` - channel settled requests are reported on
pub fn spawn_worker(config: &Config, response_tx: Sender<ToggleResponse>) -> WorkerHandle {
    let client_result = SubscriptionClient::from_config(config);
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();
    let worker_shutdown = shutdown.clone();

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx, worker_shutdown);
    });

    WorkerHandle {
        request_tx,
        shutdown,
    }
}

/// Main worker loop - processes requests until shutdown or the channel closes
fn worker_loop(
    client_result: Result<SubscriptionClient, ToggleError>,
    mut request_rx: UnboundedReceiver<ToggleRequest>,
    response_tx: Sender<ToggleResponse>,
    shutdown: CancellationToken,
) {
    if let Err(e) = &client_result {
        // Not fatal until a toggle is attempted
        log::warn!("Toggle client not configured: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start toggle runtime: {}", e);
            let error = ToggleError::NotConfigured(e.to_string());
            while let Some(request) = request_rx.blocking_recv() {
                let _ = response_tx.send(settled(&request, Err(error.clone())));
            }
            return;
        }
    };

    runtime.block_on(async move {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                request = request_rx.recv() => {
                    let Some(request) = request else { break };
                    dispatch(&client_result, request, &response_tx);
                }
            }
        }
    });

    log::debug!("Toggle worker thread shutting down");
}

fn dispatch(
    client_result: &Result<SubscriptionClient, ToggleError>,
    request: ToggleRequest,
    response_tx: &Sender<ToggleResponse>,
) {
    let client = match client_result {
        Ok(client) => client.clone(),
        Err(e) => {
            let _ = response_tx.send(settled(&request, Err(e.clone())));
            return;
        }
    };
    let response_tx = response_tx.clone();

    tokio::spawn(async move {
        let outcome = client.toggle(&request.url, &request.body).await;
        match &outcome {
            Ok(reply) => log::debug!(
                "Toggle {} settled with status {:?}",
                request.request_id,
                reply.status
            ),
            Err(e) => log::warn!("Toggle {} failed: {}", request.request_id, e),
        }
        // Main thread may have quit; nothing left to update
        let _ = response_tx.send(settled(&request, outcome));
    });
}

fn settled(request: &ToggleRequest, outcome: super::ToggleOutcome) -> ToggleResponse {
    ToggleResponse {
        form_id: request.form_id,
        request_id: request.request_id,
        outcome,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
