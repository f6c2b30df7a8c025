//! Configuration of the fallback timer runtime.

/// Settings for the runtime that runs timers scheduled outside any tokio
/// runtime.
///
/// # Examples
///
/// ```rust
/// use underbar::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default()
///     .with_worker_threads(2)
///     .with_thread_name("app-timers");
///
/// assert_eq!(config.worker_threads, 2);
/// assert_eq!(config.thread_name, "app-timers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Number of worker threads. Timer callbacks are short, so one is
    /// usually enough.
    pub worker_threads: usize,
    /// Name given to the worker threads.
    pub thread_name: String,
}

impl SchedulerConfig {
    /// Sets the number of worker threads. Zero is raised to one.
    #[must_use]
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads.max(1);
        self
    }

    /// Sets the worker thread name.
    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            worker_threads: 1,
            thread_name: "underbar-timer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_config() {
        let config = SchedulerConfig::default();
        assert_eq!(config.worker_threads, 1);
        assert_eq!(config.thread_name, "underbar-timer");
    }

    #[rstest]
    fn test_zero_worker_threads_is_raised_to_one() {
        assert_eq!(
            SchedulerConfig::default()
                .with_worker_threads(0)
                .worker_threads,
            1
        );
    }
}
