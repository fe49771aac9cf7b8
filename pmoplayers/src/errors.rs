use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayersError {
    #[error("Player '{0}' is gone")]
    PlayerGone(String),
    #[error("Backend operation '{0}' failed for '{1}': {2}")]
    BackendOperation(String, String, String),
    #[error("Backend operation '{0}' is not supported by '{1}'")]
    OperationNotSupported(String, String),
}

impl PlayersError {
    pub fn backend_operation(operation: &str, identity: &str, reason: &str) -> Self {
        PlayersError::BackendOperation(
            operation.to_string(),
            identity.to_string(),
            reason.to_string(),
        )
    }

    pub fn operation_not_supported(operation: &str, identity: &str) -> Self {
        PlayersError::OperationNotSupported(operation.to_string(), identity.to_string())
    }
}
