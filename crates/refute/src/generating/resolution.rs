//! Binary resolution inference rule

use crate::logic::Clause;
use crate::simplifying::TautologyRule;
use log::trace;

/// Resolve two ground clauses on their first complementary pair.
///
/// Literals of `first` are scanned in canonical order, and for each of them
/// the literals of `second`. Returns `None` when the clauses share no
/// complementary pair. Only one resolvent is produced per call: a second
/// complementary pair would survive into the resolvent and make it
/// tautological anyway.
pub fn resolution(first: &Clause, second: &Clause) -> Option<Clause> {
    if !first.is_resolvable_with(second) {
        return None;
    }

    for (i, lit1) in first.literals().iter().enumerate() {
        for (j, lit2) in second.literals().iter().enumerate() {
            if lit1.is_complement_of(lit2) {
                // Collect side literals from both clauses
                let side1 = first
                    .literals()
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i)
                    .map(|(_, lit)| *lit);
                let side2 = second
                    .literals()
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != j)
                    .map(|(_, lit)| *lit);
                return Some(side1.chain(side2).collect());
            }
        }
    }

    None
}

/// Resolvents of one clause pair after tautology deletion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolvents {
    pub clauses: Vec<Clause>,
    /// Number of resolvents discarded as tautologies
    pub discarded: usize,
}

impl Resolvents {
    pub fn contains_empty(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Resolution inference rule.
///
/// Resolves a clause pair and drops tautological resolvents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionRule {
    tautology: TautologyRule,
}

impl ResolutionRule {
    pub fn new(tautology: TautologyRule) -> Self {
        ResolutionRule { tautology }
    }

    pub fn name(&self) -> &str {
        "Resolution"
    }

    pub fn resolve_pair(&self, first: &Clause, second: &Clause) -> Resolvents {
        let mut resolvents = Resolvents::default();
        if let Some(resolvent) = resolution(first, second) {
            if self.tautology.is_tautology(&resolvent) {
                trace!("{} dropped: {}", self.tautology.name(), resolvent);
                resolvents.discarded += 1;
            } else {
                trace!("resolved {} with {}: {}", first, second, resolvent);
                resolvents.clauses.push(resolvent);
            }
        }
        resolvents
    }
}
