//! Prover configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for the refutation loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverConfig {
    /// Maximum number of simplify/expand rounds (0 means no limit)
    pub max_rounds: usize,
    /// Maximum size of the working clause set (0 means no limit)
    pub max_clauses: usize,
    /// Which resolvents are discarded as tautologies
    pub complement: ComplementMode,
}

/// How a resolvent is recognised as tautological.
///
/// - `Literal`: a literal and its exact negation (same label and position)
/// - `Position`: any two literals at the same position with opposite polarity,
///   regardless of label. Prunes harder, but can discard clauses a proof needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComplementMode {
    #[default]
    Literal,
    Position,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_rounds: 0,  // 0 means no limit
            max_clauses: 0, // 0 means no limit
            complement: ComplementMode::Literal,
        }
    }
}

impl ProverConfig {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = max_clauses;
        self
    }

    pub fn with_complement(mut self, complement: ComplementMode) -> Self {
        self.complement = complement;
        self
    }
}
