//! Static page entry: an explicit "do nothing" or a delegated handler.

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by a [`StaticHandler`].
pub type StaticHandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A handler that takes over the whole request and writes its own response.
pub type StaticHandler = Arc<dyn Fn(Request) -> StaticHandlerFuture + Send + Sync>;

/// Behavior attached to a recognized static key.
#[derive(Clone)]
pub enum StaticEntry {
    /// Recognized key with default handling: an empty `200 OK`.
    NoOp,
    /// The handler is fully responsible for the response.
    Delegate(StaticHandler),
}

impl StaticEntry {
    /// Wraps an async function as a [`StaticEntry::Delegate`].
    ///
    /// ```rust,ignore
    /// let robots = StaticEntry::delegate(|_req| async { "User-agent: *\nDisallow:\n" });
    /// ```
    pub fn delegate<F, Fut, R>(handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        Self::Delegate(Arc::new(move |request| -> StaticHandlerFuture {
            let fut = handler(request);
            Box::pin(async move { fut.await.into_response() })
        }))
    }

    pub fn is_delegate(&self) -> bool {
        matches!(self, Self::Delegate(_))
    }

    /// Short label for logs and the admin CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoOp => "noop",
            Self::Delegate(_) => "delegate",
        }
    }
}

impl fmt::Debug for StaticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("NoOp"),
            Self::Delegate(_) => f.write_str("Delegate(..)"),
        }
    }
}
