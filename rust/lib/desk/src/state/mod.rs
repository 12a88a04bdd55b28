//! View states, each stored at its own path.

mod catalog;
mod form;
mod label;
mod print;

pub use catalog::*;
pub use form::*;
pub use label::*;
pub use print::*;
