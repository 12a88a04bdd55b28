//! Flux: view state engine for labeldesk front ends.
//!
//! Rust owns the view state; a front end (terminal, web, desktop) only
//! renders what the store holds and emits requests back into the engine.
//!
//! # Primitives
//!
//! - `read::<S>()`: read the state stored at a type's path
//! - `emit(path, payload)`: run the handlers registered for a path
//! - `bubble(path, payload)`: like `emit`, then walk up to each ancestor
//!   path until a handler returns [`Propagation::Stop`]
//! - `subscribe(pattern)`: observe state changes
//!
//! # Paths
//!
//! State and requests share one `/`-separated namespace:
//! - State: `catalog/view`, `label/preview`, `print/state`
//! - Requests: `catalog/load`, `catalog/search`
//! - Row events: `catalog/rows/{index}`, `catalog/rows/{index}/delete`
//!
//! Patterns use MQTT-style wildcards: `+` matches one level, `#` matches
//! any number of trailing levels (including none).
//!
//! # Example
//!
//! ```ignore
//! use labeldesk_flux::{Flux, Propagation};
//!
//! let flux = Flux::new();
//! flux.on("catalog/rows/+/delete", |_, _, _| async { Propagation::Stop });
//! flux.on("catalog/rows/+", |_, _, store| async move {
//!     store.set("label/preview", "selected".to_string());
//! });
//!
//! // The delete handler stops the event before it reaches the row.
//! flux.bubble("catalog/rows/0/delete", ()).await;
//! ```

pub mod app;
pub mod router;
pub mod store;
pub mod topic;
pub mod value;

pub use app::Flux;
pub use router::{BoxFuture, Payload, Propagation, Router};
pub use store::{ChangeHandler, State, StateStore};
pub use value::StateValue;
