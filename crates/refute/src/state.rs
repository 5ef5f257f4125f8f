//! Core state types for refutation resolution.
//!
//! This module holds the clause sets of one refutation run, the derivation
//! record used to rebuild proofs, and the proof/result types.

use crate::logic::{Clause, ClauseRole, ClauseSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Derivation
// =============================================================================

/// How a clause entered the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub role: ClauseRole,
    /// Parent clauses (empty for axioms and negated goal clauses)
    pub premises: Vec<Clause>,
}

impl Derivation {
    pub fn input(role: ClauseRole) -> Self {
        Derivation {
            role,
            premises: vec![],
        }
    }

    pub fn resolution(first: &Clause, second: &Clause) -> Self {
        Derivation {
            role: ClauseRole::Derived,
            premises: vec![first.clone(), second.clone()],
        }
    }
}

// =============================================================================
// Proof
// =============================================================================

/// A single step in a proof. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub conclusion: Clause,
    pub derivation: Derivation,
}

/// A refutation: premises always precede their conclusions and the last step
/// derives the empty clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Input clauses (axioms and negated goal) used by the proof
    pub fn inputs(&self) -> impl Iterator<Item = &Clause> {
        self.steps
            .iter()
            .filter(|step| step.derivation.role != ClauseRole::Derived)
            .map(|step| &step.conclusion)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// =============================================================================
// ProofResult
// =============================================================================

/// Result of a refutation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofResult {
    /// Empty clause derived: the knowledge base entails the goal
    Proof(Proof),
    /// Fixpoint reached without the empty clause
    Saturated,
}

impl ProofResult {
    pub fn is_proof(&self) -> bool {
        matches!(self, ProofResult::Proof(_))
    }
}

// =============================================================================
// RefutationState
// =============================================================================

/// Clause sets of one refutation run.
///
/// Built from private copies of the caller's knowledge base and goal.
#[derive(Debug, Clone, Default)]
pub struct RefutationState {
    /// Working set: knowledge base, negated goal and merged resolvents
    pub working: ClauseSet,
    /// Set of support: negated goal and every resolvent
    pub support: ClauseSet,
    /// First derivation of every clause seen in this run
    derivations: HashMap<Clause, Derivation>,
    /// Completed simplify/expand rounds
    pub round: usize,
}

impl RefutationState {
    pub fn new(knowledge_base: &ClauseSet, goal: &Clause) -> Self {
        let mut derivations = HashMap::new();
        for clause in knowledge_base {
            derivations.insert(clause.clone(), Derivation::input(ClauseRole::Axiom));
        }

        let support = goal.negate_all();
        let mut working = knowledge_base.clone();
        for clause in &support {
            derivations
                .entry(clause.clone())
                .or_insert_with(|| Derivation::input(ClauseRole::NegatedGoal));
            working.insert(clause.clone());
        }

        RefutationState {
            working,
            support,
            derivations,
            round: 0,
        }
    }

    /// Remember how `conclusion` was derived, unless it is already known
    pub fn record_derivation(&mut self, conclusion: &Clause, first: &Clause, second: &Clause) {
        if !self.derivations.contains_key(conclusion) {
            self.derivations
                .insert(conclusion.clone(), Derivation::resolution(first, second));
        }
    }

    pub fn derivation(&self, clause: &Clause) -> Option<&Derivation> {
        self.derivations.get(clause)
    }

    pub fn role(&self, clause: &Clause) -> Option<ClauseRole> {
        self.derivations.get(clause).map(|d| d.role)
    }

    /// Walk back from `conclusion` through recorded derivations
    pub fn extract_proof(&self, conclusion: &Clause) -> Proof {
        let mut steps = Vec::new();
        let mut visited = HashSet::new();
        self.collect_steps(conclusion, &mut visited, &mut steps);
        Proof { steps }
    }

    fn collect_steps(
        &self,
        clause: &Clause,
        visited: &mut HashSet<Clause>,
        steps: &mut Vec<ProofStep>,
    ) {
        if !visited.insert(clause.clone()) {
            return;
        }
        let derivation = self
            .derivations
            .get(clause)
            .cloned()
            .unwrap_or_else(|| Derivation::input(ClauseRole::Axiom));
        for premise in &derivation.premises {
            self.collect_steps(premise, visited, steps);
        }
        steps.push(ProofStep {
            conclusion: clause.clone(),
            derivation,
        });
    }
}
