//! Ground propositional logic over grid positions
//!
//! This module provides the fundamental types for representing clauses:
//! labels, positions, literals and clauses.

pub mod core;

// Re-export commonly used types
pub use self::core::clause::{Clause, ClauseRole, ClauseSet};
pub use self::core::literal::{Label, Literal, LiteralKey, Position};
