//! Host-facing match driver.
//!
//! `Session` ties the rules, one match state and the clock together and is
//! the only thing a host needs: it takes `Command`s and elapsed time and
//! hands back `Outcome`s and `MatchSnapshot`s.

pub mod driver;
pub mod snapshot;

pub use driver::{Command, Session};
pub use snapshot::{EdgeView, MatchSnapshot, NodeView};
