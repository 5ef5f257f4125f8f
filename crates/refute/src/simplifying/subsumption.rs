//! Subsumption-based redundancy elimination
//!
//! A clause C subsumes clause D if C ⊆ D: whenever C holds D holds too, so D
//! adds nothing to a refutation and can be dropped. For ground clauses the
//! check is a plain subset test.
//!
//! Every pass decides against a snapshot of the collection taken before any
//! removal. Removing against the snapshot keeps exactly the subsumption-minimal
//! clauses: strict subset is a strict partial order, so each removed clause has
//! a minimal subsumer that survives.

use crate::logic::ClauseSet;
use log::trace;

/// Subsumption rule over clause sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsumptionRule;

impl SubsumptionRule {
    pub fn new() -> Self {
        SubsumptionRule
    }

    pub fn name(&self) -> &str {
        "Subsumption"
    }

    /// Remove every clause strictly subsumed by another clause of the same set.
    ///
    /// Returns the number of removed clauses.
    pub fn reduce(&self, clauses: &mut ClauseSet) -> usize {
        let snapshot = clauses.clone();
        let before = clauses.len();
        clauses.retain(|clause| {
            let redundant = clause.is_redundant(&snapshot);
            if redundant {
                trace!("subsumed: {}", clause);
            }
            !redundant
        });
        before - clauses.len()
    }

    /// Remove from `candidates` every clause strictly subsumed by another
    /// candidate or by a clause of any `against` collection.
    ///
    /// Returns the number of removed clauses.
    pub fn forward(&self, candidates: &mut ClauseSet, against: &[&ClauseSet]) -> usize {
        let removed = self.reduce(candidates);
        let before = candidates.len();
        candidates.retain(|clause| {
            let redundant = against.iter().any(|set| clause.is_redundant(set.iter()));
            if redundant {
                trace!("forward subsumed: {}", clause);
            }
            !redundant
        });
        removed + before - candidates.len()
    }
}

/// Apply redundancy elimination to the working set and the set of support.
///
/// Each collection is reduced on its own: a support clause is only removed
/// for a subsumer inside the support. A working-set subsumer that is not in
/// the support never pairs with anything by itself, so dropping the support
/// clause for it would lose refutations. Returns the number of removed clauses.
pub fn eliminate_redundant(working: &mut ClauseSet, support: &mut ClauseSet) -> usize {
    let rule = SubsumptionRule::new();
    rule.reduce(working) + rule.reduce(support)
}
