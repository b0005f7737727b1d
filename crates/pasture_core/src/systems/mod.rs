//! The per-tick simulation systems, in the order the orchestrator runs them:
//! steering, movement, collision, economy, rank.

pub mod collision;
pub mod economy;
pub mod movement;
pub mod rank;
pub mod steering;
