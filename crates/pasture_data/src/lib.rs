//! Core data structures for the Pasture arena simulation.

pub mod data;

pub use data::entity::{Creature, Rgb, Vec2};
pub use data::food::Food;
