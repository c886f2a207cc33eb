//! Background fetch execution.
//!
//! Each submitted request runs on its own thread and reports back over a channel,
//! so the UI loop never blocks on the network. There is no cancellation: a
//! superseded request still completes and the controller discards its result.

use crate::model::{ContentFetchError, FetchCompletion, FetchRequest};
use crate::source::LineRangeClient;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Runs line-range fetches off the UI thread.
pub struct FetchWorker {
    client: Arc<dyn LineRangeClient>,
    tx: Sender<FetchCompletion>,
    rx: Receiver<FetchCompletion>,
}

impl FetchWorker {
    pub fn new(client: Arc<dyn LineRangeClient>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { client, tx, rx }
    }

    /// Start a fetch in the background.
    pub fn submit(&self, request: FetchRequest) {
        debug!(
            log_id = %request.log_id,
            start_line = %request.start_line,
            count = request.count,
            generation = %request.generation,
            "Submitting fetch"
        );

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let job_request = request.clone();

        let spawned = thread::Builder::new()
            .name("rlv-fetch".to_string())
            .spawn(move || {
                let completion = fetch_blocking(client.as_ref(), job_request);
                // Receiver is gone only when the app is shutting down
                let _ = tx.send(completion);
            });

        if let Err(e) = spawned {
            error!(error = %e, "Failed to spawn fetch thread");
            let _ = self.tx.send(FetchCompletion {
                request,
                result: Err(ContentFetchError::Io(e.to_string())),
            });
        }
    }

    /// Collect every completion that has arrived. Non-blocking.
    pub fn drain(&self) -> Vec<FetchCompletion> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next completion.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchCompletion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Run one fetch on the calling thread.
pub fn fetch_blocking(client: &dyn LineRangeClient, request: FetchRequest) -> FetchCompletion {
    let result = client.fetch_lines(&request.log_id, request.start_line, request.count);
    FetchCompletion { request, result }
}
