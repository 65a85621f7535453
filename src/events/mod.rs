//! Events emitted to external collaborators.

pub mod event;

pub use event::{GameEvent, Outcome};
