use crate::telemetry::TelemetryError;

/// Top-level error for the binary; module errors convert into it. Roster
/// failures are deliberately absent: an unreadable roster degrades to zero
/// users loaded rather than aborting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("workflow error: {0}")]
    Workflow(Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    /// Wrap a domain-rule error from a scripted workflow step.
    pub fn workflow(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Workflow(Box::new(err))
    }
}
