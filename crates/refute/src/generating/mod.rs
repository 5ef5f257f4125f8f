//! Generating inference rules.

pub mod resolution;

pub use resolution::{resolution, ResolutionRule, Resolvents};
