mod error;

pub use error::{DispatchAction, DispatchError, DispatchResult};

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Reserved control payload for the inject action.
pub const INJECT_SENTINEL: &str = "inject";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    data: &'a str,
}

#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Clears the busy flag on drop, so every exit path releases it: early
/// rejection, timeout, panic unwinding included.
struct BusyGuard(Arc<AtomicBool>);

impl BusyGuard {
    fn engage(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(Arc::clone(flag))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Client for the remote execution endpoint. Each call posts one JSON body
/// `{"data": payload}` under a hard deadline; elapsing the deadline cancels
/// the in-flight request and classifies the outcome as a timeout.
pub struct DispatchClient {
    client: reqwest::Client,
    config: DispatchConfig,
    executing: Arc<AtomicBool>,
    injecting: Arc<AtomicBool>,
}

impl DispatchClient {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            executing: Arc::new(AtomicBool::new(false)),
            injecting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while an execute dispatch is in flight. The UI disables the
    /// execute control on this flag; the client itself does not queue.
    pub fn is_executing(&self) -> bool {
        self.executing.load(Ordering::SeqCst)
    }

    pub fn is_injecting(&self) -> bool {
        self.injecting.load(Ordering::SeqCst)
    }

    /// Send a script to the endpoint. Blank scripts are a caller error and are
    /// rejected before any network activity.
    pub async fn execute(&self, script: &str) -> DispatchResult<String> {
        let _busy = BusyGuard::engage(&self.executing);
        if script.trim().is_empty() {
            return Err(DispatchError::EmptyScript);
        }
        self.send(script).await
    }

    /// Send the fixed inject control payload.
    pub async fn inject(&self) -> DispatchResult<String> {
        let _busy = BusyGuard::engage(&self.injecting);
        self.send(INJECT_SENTINEL).await
    }

    async fn send(&self, payload: &str) -> DispatchResult<String> {
        let deadline = self.config.timeout;
        let request = async {
            let response = self
                .client
                .post(&self.config.endpoint)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .json(&DispatchRequest { data: payload })
                .send()
                .await
                .map_err(classify_send_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(DispatchError::Http {
                    status: status.as_u16(),
                });
            }

            response
                .text()
                .await
                .map_err(|err| DispatchError::Unknown(err.to_string()))
        };

        // The deadline covers connect, send and body read; on expiry the
        // request future is dropped, cancelling the connection.
        match tokio::time::timeout(deadline, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::Timeout(deadline.as_secs())),
        }
    }
}

fn classify_send_error(err: reqwest::Error) -> DispatchError {
    if err.is_connect() {
        DispatchError::Network(err.to_string())
    } else {
        DispatchError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(endpoint: &str, timeout: Duration) -> DispatchClient {
        DispatchClient::new(DispatchConfig {
            endpoint: endpoint.to_string(),
            timeout,
        })
    }

    #[tokio::test]
    async fn empty_script_rejected_before_any_network_call() {
        // Unroutable endpoint: reaching it would error as Network, not
        // EmptyScript, so the variant proves nothing was sent.
        let client = client_with("http://127.0.0.1:1", DEFAULT_TIMEOUT);
        let result = client.execute("   \n\t ").await;
        assert!(matches!(result, Err(DispatchError::EmptyScript)));
        assert!(!client.is_executing());
    }

    #[tokio::test]
    async fn connection_failure_classified_as_network() {
        let client = client_with("http://127.0.0.1:1", DEFAULT_TIMEOUT);
        let result = client.execute("print(1)").await;
        assert!(matches!(result, Err(DispatchError::Network(_))));
        assert!(!client.is_executing());
    }

    #[tokio::test]
    async fn inject_busy_flag_is_independent_of_execute() {
        let client = client_with("http://127.0.0.1:1", DEFAULT_TIMEOUT);
        let _ = client.inject().await;
        assert!(!client.is_injecting());
        assert!(!client.is_executing());
    }
}
