//! Deferred work returned by update handlers.
//!
//! Handlers never await. They return a [`Task`] that the runtime resolves and
//! whose output message is fed back into the next update.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

/// A pending unit of async work that yields exactly one message, or nothing.
#[must_use = "tasks do nothing unless handed to the runtime"]
pub struct Task<M>(Option<BoxFuture<'static, M>>);

impl<M: Send + 'static> Task<M> {
    pub fn none() -> Self {
        Self(None)
    }

    /// Run `future` and turn its output into a message with `f`.
    pub fn perform<F, T>(future: F, f: impl FnOnce(T) -> M + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: 'static,
    {
        Self(Some(future.map(f).boxed()))
    }

    /// Yield `message` without doing any work.
    pub fn done(message: M) -> Self {
        Self(Some(futures::future::ready(message).boxed()))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn map<N: Send + 'static>(self, f: impl FnOnce(M) -> N + Send + 'static) -> Task<N> {
        match self.0 {
            Some(future) => Task(Some(future.map(f).boxed())),
            None => Task(None),
        }
    }

    /// Await the task. `None` means there was nothing to run.
    pub async fn resolve(self) -> Option<M> {
        match self.0 {
            Some(future) => Some(future.await),
            None => None,
        }
    }
}

impl<M> std::fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Task")
            .field(&if self.0.is_some() { "pending" } else { "none" })
            .finish()
    }
}
