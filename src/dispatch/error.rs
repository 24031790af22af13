use thiserror::Error;

/// Which dispatch entry point produced an outcome. Drives the prefix of the
/// user-visible failure message and which busy flag the call holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchAction {
    Execute,
    Inject,
}

impl DispatchAction {
    pub fn label(&self) -> &'static str {
        match self {
            DispatchAction::Execute => "Execution",
            DispatchAction::Inject => "Injection",
        }
    }
}

/// Classified dispatch failures. Every variant renders to a message suitable
/// for direct display; none is fatal to the editing surface.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Cannot execute empty code")]
    EmptyScript,

    #[error("Request timed out after {0} seconds. The server might be unavailable.")]
    Timeout(u64),

    #[error("Unable to connect to the server. Please check your network connection or try again later.")]
    Network(String),

    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Unknown(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DispatchError::Timeout(_))
    }

    /// Display message prefixed with the failing action, matching what the
    /// response panel shows. The empty-script rejection is a caller error and
    /// keeps its bare message.
    pub fn user_message(&self, action: DispatchAction) -> String {
        match self {
            DispatchError::EmptyScript => self.to_string(),
            other => format!("{} failed: {}", action.label(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_distinguishable_from_network_failure() {
        let timeout = DispatchError::Timeout(10);
        let network = DispatchError::Network("connection refused".to_string());
        assert!(timeout.is_timeout());
        assert!(!network.is_timeout());
        assert_ne!(timeout.to_string(), network.to_string());
    }

    #[test]
    fn http_error_message_includes_status() {
        let error = DispatchError::Http { status: 503 };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn user_message_names_the_action() {
        let error = DispatchError::Http { status: 500 };
        assert!(error
            .user_message(DispatchAction::Inject)
            .starts_with("Injection failed:"));
        assert!(error
            .user_message(DispatchAction::Execute)
            .starts_with("Execution failed:"));
    }

    #[test]
    fn empty_script_keeps_bare_message() {
        let message = DispatchError::EmptyScript.user_message(DispatchAction::Execute);
        assert_eq!(message, "Cannot execute empty code");
    }
}
