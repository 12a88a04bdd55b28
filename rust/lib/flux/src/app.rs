use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::{Payload, Propagation, Router};
use crate::store::{State, StateStore};
use crate::value::StateValue;

/// The view state engine.
///
/// Owns one [`StateStore`] and one [`Router`]. Front ends emit requests,
/// handlers write state, subscribers redraw.
///
/// ```ignore
/// let flux = Flux::new();
/// flux.on("catalog/search", |_, payload, store| async move {
///     let req = payload.downcast_ref::<SearchReq>().unwrap();
///     store.put(SearchState { query: req.query.clone() });
/// });
/// flux.subscribe("catalog/#", |path, _| println!("{} changed", path));
/// flux.emit("catalog/search", SearchReq { query: "lap".into() }).await;
/// ```
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State
    // ====================================================================

    /// Read a typed state (cloned out of the store).
    pub fn read<S: State>(&self) -> Option<S> {
        self.store.read::<S>()
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request to the handlers registered for `path`.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) -> Propagation {
        self.router.dispatch(path, Arc::new(payload), Arc::clone(&self.store)).await
    }

    /// Emit an event at `path` and let it bubble to ancestor paths until a
    /// handler returns [`Propagation::Stop`].
    pub async fn bubble<T: Any + Send + Sync>(&self, path: &str, payload: T) -> Propagation {
        self.router.bubble(path, Arc::new(payload), Arc::clone(&self.store)).await
    }

    /// Register an async request handler for a path pattern.
    pub fn on<F, Fut, R>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Propagation> + 'static,
    {
        self.router.on(pattern, handler);
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Observe state changes on paths matching `pattern`.
    ///
    /// The handler runs synchronously inside the writing handler.
    pub fn subscribe<F>(&self, pattern: &str, handler: F)
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler);
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Preview {
        key: Option<String>,
    }

    impl State for Preview {
        const PATH: &'static str = "label/preview";
    }

    #[derive(Debug)]
    struct SelectReq {
        key: String,
    }

    #[test]
    fn new_flux_is_empty() {
        let flux = Flux::default();
        assert!(flux.read::<Preview>().is_none());
    }

    #[tokio::test]
    async fn emit_handler_writes_typed_state() {
        let flux = Flux::new();
        flux.on("catalog/select", |_, payload, store: Arc<StateStore>| async move {
            let req = payload.downcast_ref::<SelectReq>().unwrap();
            store.put(Preview { key: Some(req.key.clone()) });
        });

        flux.emit("catalog/select", SelectReq { key: "A1".into() }).await;
        assert_eq!(flux.read::<Preview>(), Some(Preview { key: Some("A1".into()) }));

        flux.emit("catalog/select", SelectReq { key: "B2".into() }).await;
        assert_eq!(flux.read::<Preview>(), Some(Preview { key: Some("B2".into()) }));
    }

    #[tokio::test]
    async fn subscribers_observe_handler_writes() {
        let flux = Flux::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let s = seen.clone();
        flux.subscribe("label/#", move |path, _| {
            s.lock().unwrap().push(path.to_string());
        });
        flux.on("catalog/select", |_, _, store: Arc<StateStore>| async move {
            store.put(Preview { key: None });
            store.set("catalog/selected", true);
        });

        flux.emit("catalog/select", ()).await;
        flux.emit("catalog/select", ()).await;

        assert_eq!(*seen.lock().unwrap(), vec!["label/preview", "label/preview"]);
    }

    #[tokio::test]
    async fn bubble_stop_keeps_row_select_from_running() {
        let flux = Flux::new();
        flux.on("catalog/rows/+/delete", |_, _, store: Arc<StateStore>| async move {
            store.put(Preview { key: None });
            Propagation::Stop
        });
        flux.on("catalog/rows/+", |_, _, store: Arc<StateStore>| async move {
            store.put(Preview { key: Some("row".into()) });
        });

        let outcome = flux.bubble("catalog/rows/1/delete", ()).await;
        assert_eq!(outcome, Propagation::Stop);
        assert_eq!(flux.read::<Preview>(), Some(Preview { key: None }));

        assert_eq!(flux.bubble("catalog/rows/1", ()).await, Propagation::Continue);
        assert_eq!(flux.read::<Preview>(), Some(Preview { key: Some("row".into()) }));
    }

    fn _assert_flux_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Flux>();
        assert_sync::<Flux>();
    }
}
