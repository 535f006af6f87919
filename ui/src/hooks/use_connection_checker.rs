use api::ApiError;
use dioxus::prelude::*;

/// Reachability of the backend services (signer bridge and indexer), as
/// inferred from API call outcomes.
#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum ConnectionStatus {
    Connected,
    Disconnected(String),
}

#[derive(Clone, Copy)]
pub struct ConnectionChecker {
    status: Signal<ConnectionStatus>,
}

impl ConnectionChecker {
    pub fn new(status: Signal<ConnectionStatus>) -> Self {
        Self { status }
    }

    /// Inspects a Result from an API call.
    /// - If `Ok`: updates status to Connected (if previously disconnected)
    ///   and returns the value.
    /// - If `Err`: logs it, flips status to Disconnected when it looks like a
    ///   transport failure, and returns None.
    pub fn check<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(val) => {
                if matches!(*self.status.peek(), ConnectionStatus::Disconnected(_)) {
                    self.status.set(ConnectionStatus::Connected);
                }
                Some(val)
            }
            Err(e) => {
                let error_msg = e.to_string();
                dioxus_logger::tracing::warn!("API error: {}", error_msg);

                if is_connection_error(&error_msg) {
                    self.status.set(ConnectionStatus::Disconnected(error_msg));
                }
                None
            }
        }
    }

}

/// Heuristic: does this error message describe a dropped connection rather
/// than a logic failure?
fn is_connection_error(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("connection refused")
        || msg.contains("broken pipe")
        || msg.contains("network unreachable")
        || msg.contains("connection reset")
        || msg.contains("failed to connect")
        || msg.contains("timed out")
        // Dioxus/Hyper specific transport errors
        || msg.contains("error running server function")
        || msg.contains("connection to the server was already shutdown")
        || msg.contains("channel closed")
}

pub fn use_connection_checker() -> ConnectionChecker {
    let status = use_context::<Signal<ConnectionStatus>>();
    ConnectionChecker { status }
}
