use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::topic;
use crate::value::StateValue;

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// A view state type stored at a well-known path.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct PrintState { pub enabled: bool }
///
/// impl State for PrintState {
///     const PATH: &'static str = "print/state";
/// }
/// ```
pub trait State: Any + Clone + Send + Sync {
    const PATH: &'static str;
}

/// Path-keyed view state with pattern subscriptions.
///
/// Every write replaces the value at its path wholesale; there is no
/// partial patching of a stored value. Subscribers run synchronously
/// after the write is visible to readers.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

struct Subscriber {
    pattern: String,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Store a typed state at its own path.
    pub fn put<S: State>(&self, state: S) {
        self.set(S::PATH, state);
    }

    /// Read a typed state from its own path.
    pub fn read<S: State>(&self) -> Option<S> {
        self.get(S::PATH).and_then(|v| v.cloned::<S>())
    }

    /// Read-modify-write a typed state, starting from `init` if unset.
    pub fn update<S, I, F>(&self, init: I, f: F)
    where
        S: State,
        I: FnOnce() -> S,
        F: FnOnce(&mut S),
    {
        let mut state = self.read::<S>().unwrap_or_else(init);
        f(&mut state);
        self.put(state);
    }

    /// Set a value at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        let value = StateValue::new(value);
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        // Snapshot the handlers so a subscriber may itself subscribe.
        let matching: Vec<ChangeHandler> = {
            let subscribers = self.subscribers.read().unwrap();
            subscribers
                .iter()
                .filter(|s| topic::matches(&s.pattern, path))
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };
        for handler in matching {
            handler(path, &value);
        }
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Subscribe to changes on paths matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F)
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.push(Subscriber {
            pattern: pattern.to_string(),
            handler: Arc::new(handler),
        });
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
