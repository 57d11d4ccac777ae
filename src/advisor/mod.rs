//! Category advisor
//!
//! Suggests a category for an expense description using a remote generative
//! model. Suggestions are advisory: every failure leaves the user to pick a
//! category by hand.

pub mod gemini;
pub mod prompt;

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::settings::AdvisorSettings;

pub use gemini::GeminiAdvisor;
pub use prompt::{build_prompt, normalize_category, truncate_description};

/// A suggested category for one description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Category suggestions are not configured: {0}")]
    NotConfigured(String),

    #[error("Cannot suggest a category for an empty description")]
    EmptyDescription,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AdvisorError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Anything that can turn a description into a category
pub trait CategoryAdvisor: Send + Sync {
    fn suggest(&self, description: &str) -> Result<CategorySuggestion, AdvisorError>;
}

/// Build the configured advisor
pub fn from_settings(settings: &AdvisorSettings) -> Result<Arc<dyn CategoryAdvisor>, AdvisorError> {
    Ok(Arc::new(GeminiAdvisor::from_settings(settings)?))
}

/// A suggestion running on a background thread
///
/// The caller prompts the user while the request is in flight. Either the
/// user types a category and the request is discarded, or the caller
/// `wait`s for the result. A result that arrives after the receiver is gone
/// is dropped by the worker.
pub struct PendingSuggestion {
    receiver: mpsc::Receiver<Result<CategorySuggestion, AdvisorError>>,
    started: Instant,
}

impl PendingSuggestion {
    pub fn spawn(advisor: Arc<dyn CategoryAdvisor>, description: impl Into<String>) -> Self {
        let description = description.into();
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            // The receiver may be gone if the caller stopped waiting
            let _ = sender.send(advisor.suggest(&description));
        });

        Self {
            receiver,
            started: Instant::now(),
        }
    }

    /// Wait for the suggestion until `timeout` has passed since `spawn`
    ///
    /// Time the user spent at a prompt counts against the timeout. Failures
    /// are logged and reported as no suggestion.
    pub fn wait(self, timeout: Duration) -> Option<CategorySuggestion> {
        let remaining = timeout.saturating_sub(self.started.elapsed());
        match self.receiver.recv_timeout(remaining) {
            Ok(Ok(suggestion)) => {
                tracing::debug!(category = %suggestion.category, "category suggested");
                Some(suggestion)
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "category suggestion failed");
                None
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(?timeout, "category suggestion timed out");
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("category suggestion worker exited without a result");
                None
            }
        }
    }

    /// Stop listening; the worker's late result goes nowhere
    pub fn discard(self) {
        tracing::debug!(
            elapsed = ?self.started.elapsed(),
            "discarding in-flight category suggestion"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdvisor {
        delay: Duration,
        result: Result<&'static str, ()>,
    }

    impl CategoryAdvisor for FixedAdvisor {
        fn suggest(&self, _description: &str) -> Result<CategorySuggestion, AdvisorError> {
            thread::sleep(self.delay);
            match self.result {
                Ok(category) => Ok(CategorySuggestion {
                    category: category.to_string(),
                }),
                Err(()) => Err(AdvisorError::MalformedResponse("stub".into())),
            }
        }
    }

    #[test]
    fn test_pending_returns_result() {
        let advisor = Arc::new(FixedAdvisor {
            delay: Duration::ZERO,
            result: Ok("Food"),
        });

        let suggestion = PendingSuggestion::spawn(advisor, "lunch").wait(Duration::from_secs(5));
        assert_eq!(suggestion.unwrap().category, "Food");
    }

    #[test]
    fn test_pending_times_out() {
        let advisor = Arc::new(FixedAdvisor {
            delay: Duration::from_millis(500),
            result: Ok("Food"),
        });

        let suggestion = PendingSuggestion::spawn(advisor, "lunch").wait(Duration::from_millis(20));
        assert!(suggestion.is_none());
    }

    #[test]
    fn test_wait_counts_time_since_spawn() {
        let advisor = Arc::new(FixedAdvisor {
            delay: Duration::from_millis(300),
            result: Ok("Food"),
        });

        let pending = PendingSuggestion::spawn(advisor, "lunch");
        thread::sleep(Duration::from_millis(100));
        assert!(pending.wait(Duration::from_millis(100)).is_none());
    }

    struct SignallingAdvisor {
        done: std::sync::Mutex<mpsc::Sender<()>>,
    }

    impl CategoryAdvisor for SignallingAdvisor {
        fn suggest(&self, _description: &str) -> Result<CategorySuggestion, AdvisorError> {
            thread::sleep(Duration::from_millis(50));
            if let Ok(done) = self.done.lock() {
                let _ = done.send(());
            }
            Ok(CategorySuggestion {
                category: "Food".into(),
            })
        }
    }

    #[test]
    fn test_discard_lets_worker_finish() {
        let (done, finished) = mpsc::channel();
        let advisor = Arc::new(SignallingAdvisor {
            done: std::sync::Mutex::new(done),
        });

        PendingSuggestion::spawn(advisor, "lunch").discard();

        // The worker still completes; its result is simply not delivered
        finished.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn test_pending_failure_is_none() {
        let advisor = Arc::new(FixedAdvisor {
            delay: Duration::ZERO,
            result: Err(()),
        });

        assert!(PendingSuggestion::spawn(advisor, "lunch")
            .wait(Duration::from_secs(5))
            .is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AdvisorError::Timeout.to_string(), "Request timed out");
        let err = AdvisorError::Status {
            status: 429,
            body: "quota".into(),
        };
        assert_eq!(err.to_string(), "Service returned HTTP 429: quota");
    }
}
