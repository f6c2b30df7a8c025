//! Error types for the timer scheduler.

use thiserror::Error;

/// Errors raised while setting up the fallback timer runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// [`configure`](super::configure) was called after the configuration
    /// was fixed, either by an earlier call or by the first scheduled timer.
    #[error("scheduler is already configured or in use")]
    AlreadyInitialized,

    /// The fallback runtime could not be built.
    #[error("failed to build fallback timer runtime: {0}")]
    RuntimeBuild(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_build_display_includes_cause() {
        let error = SchedulerError::RuntimeBuild("no threads".to_string());
        assert_eq!(
            error.to_string(),
            "failed to build fallback timer runtime: no threads"
        );
    }

    #[test]
    fn test_already_initialized_display() {
        assert_eq!(
            SchedulerError::AlreadyInitialized.to_string(),
            "scheduler is already configured or in use"
        );
    }
}
