pub mod entity;
pub mod food;
