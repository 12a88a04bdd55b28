//! Requests the front end emits.

mod app;
mod catalog;
mod form;
mod print;

pub use app::*;
pub use catalog::*;
pub use form::*;
pub use print::*;
