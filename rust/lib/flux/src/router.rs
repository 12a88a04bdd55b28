use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::store::StateStore;
use crate::topic;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = Propagation> + Send>>;

type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// What a handler tells the router after it has run.
///
/// `Stop` is an explicit "no further dispatch" directive: remaining
/// handlers for the same path are skipped and a bubbling event does not
/// reach ancestor paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

impl From<()> for Propagation {
    fn from(_: ()) -> Self {
        Propagation::Continue
    }
}

/// Request router. Maps path patterns to async handlers.
///
/// Handlers run sequentially in registration order. A handler may return
/// `()` (continue) or a [`Propagation`].
pub struct Router {
    routes: RwLock<Vec<Route>>,
}

struct Route {
    pattern: String,
    handler: ErasedHandler,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Register an async handler for a path pattern (`+` and `#` allowed).
    pub fn on<F, Fut, R>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Propagation> + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                let fut = handler(path, payload, store);
                Box::pin(async move { fut.await.into() })
            },
        );
        let mut routes = self.routes.write().unwrap();
        routes.push(Route {
            pattern: pattern.to_string(),
            handler,
        });
    }

    fn handlers_for(&self, path: &str) -> Vec<ErasedHandler> {
        let routes = self.routes.read().unwrap();
        routes
            .iter()
            .filter(|r| topic::matches(&r.pattern, path))
            .map(|r| Arc::clone(&r.handler))
            .collect()
    }

    /// Run every handler matching `path`, stopping early on `Stop`.
    ///
    /// No matching handler is a no-op that returns `Continue`.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) -> Propagation {
        let handlers = self.handlers_for(path);
        debug!(path, handlers = handlers.len(), "dispatch");
        for handler in handlers {
            let outcome = handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
            if outcome == Propagation::Stop {
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }

    /// Dispatch at `path`, then at each ancestor path, until a handler stops
    /// the event or the root level has been handled.
    pub async fn bubble(&self, path: &str, payload: Payload, store: Arc<StateStore>) -> Propagation {
        let mut current = Some(path);
        while let Some(target) = current {
            if self.dispatch(target, Arc::clone(&payload), Arc::clone(&store)).await == Propagation::Stop {
                debug!(path, stopped_at = target, "bubble stopped");
                return Propagation::Stop;
            }
            current = topic::parent(target);
        }
        Propagation::Continue
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
