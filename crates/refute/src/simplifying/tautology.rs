//! Tautology deletion rule.
//!
//! Deletes clauses that can never help a refutation because they contain a
//! complementary pair of literals.

use crate::config::ComplementMode;
use crate::logic::Clause;

/// Tautology deletion rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct TautologyRule {
    mode: ComplementMode,
}

impl TautologyRule {
    pub fn new(mode: ComplementMode) -> Self {
        TautologyRule { mode }
    }

    pub fn name(&self) -> &str {
        "Tautology"
    }

    pub fn mode(&self) -> ComplementMode {
        self.mode
    }

    /// Check if a clause is a tautology under the configured mode
    pub fn is_tautology(&self, clause: &Clause) -> bool {
        match self.mode {
            ComplementMode::Literal => clause.is_complementary(),
            ComplementMode::Position => clause.is_tautological(),
        }
    }
}
