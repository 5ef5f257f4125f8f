//! Refute: set-of-support refutation resolution over ground grid literals
//!
//! This library decides whether a knowledge base of ground clauses entails a
//! goal clause. The goal is negated into a set of support and resolved against
//! the knowledge base until the empty clause appears or nothing new can be
//! derived.

pub mod axioms;
pub mod config;
pub mod error;
pub mod generating;
pub mod json;
pub mod knowledge;
pub mod logic;
pub mod prover;
pub mod selection;
pub mod simplifying;
pub mod state;

// Re-export commonly used types from logic
pub use logic::{Clause, ClauseRole, ClauseSet, Label, Literal, Position};

pub use config::{ComplementMode, ProverConfig};
pub use error::{Error, Result};

// Re-export inference and selection types
pub use generating::{resolution, ResolutionRule};
pub use selection::{ClausePair, PairSelector, SetOfSupport};
pub use simplifying::{eliminate_redundant, SubsumptionRule, TautologyRule};

// Re-export prover types
pub use knowledge::KnowledgeBase;
pub use prover::profile::RefutationProfile;
pub use prover::{entails, Prover};
pub use state::{Derivation, Proof, ProofResult, ProofStep, RefutationState};

pub use json::{ClauseJson, ProofJson, ProofResultJson};
