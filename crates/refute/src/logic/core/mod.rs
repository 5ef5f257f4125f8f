//! Literal and clause value types

pub mod clause;
pub mod literal;
