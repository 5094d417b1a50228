//! Loader events
//!
//! Observers for loader state transitions.

use super::state::{ContentKey, LoadError};

/// Transitions reported by a `Loader`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderEvent {
    /// A request started for `key`.
    Loading {
        /// The requested key.
        key: ContentKey,
    },

    /// The latest request committed its data.
    Loaded {
        /// The requested key.
        key: ContentKey,
    },

    /// The latest request committed an error.
    Failed {
        /// The requested key.
        key: ContentKey,
        /// What went wrong.
        error: LoadError,
    },

    /// A superseded request completed and was dropped.
    Discarded {
        /// The stale key.
        key: ContentKey,
    },

    /// The key was empty; no request was made.
    Skipped,
}

/// Event handler trait.
///
/// Implement this trait to observe loader transitions.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: LoaderEvent);
}

/// Simple callback-based event handler.
pub struct CallbackHandler<F>
where
    F: Fn(LoaderEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(LoaderEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(LoaderEvent) + Send + Sync,
{
    fn on_event(&self, event: LoaderEvent) {
        (self.callback)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_callback_handler_receives_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handler = CallbackHandler::new(move |event| {
            if event == LoaderEvent::Skipped {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        handler.on_event(LoaderEvent::Skipped);
        handler.on_event(LoaderEvent::Skipped);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
