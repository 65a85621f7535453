//! Game rules.
//!
//! `RulesEngine` is the seam the session drives; `TitanRules` is the one
//! implementation. The remaining modules are the individual rule steps it
//! sequences:
//! - `unlock`: circuits open as the previous one fills
//! - `control`: edge ownership and scores
//! - `capture`: removal of surrounded titans
//! - `victory`: elimination, saturation and score decisions
//! - `turn`: passing the turn

pub mod capture;
pub mod control;
pub mod engine;
pub mod titans;
mod turn;
pub mod unlock;
pub mod victory;

pub use engine::{GameResult, RulesEngine};
pub use titans::TitanRules;
pub use victory::{EndReason, MatchResult};
