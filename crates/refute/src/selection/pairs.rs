//! Pair selection for the refutation loop
//!
//! The `PairSelector` trait decides which clause pairs are resolved in a
//! round. Selectors remember what they have handed out: a pair returned once
//! is never returned again, which is what lets the loop reach a fixpoint.

use crate::logic::{Clause, ClauseSet};
use indexmap::IndexSet;

/// An unordered pair of distinct clauses.
///
/// The clauses are stored in canonical order, so `{a, b}` and `{b, a}` are the
/// same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClausePair {
    first: Clause,
    second: Clause,
}

impl ClausePair {
    pub fn new(a: Clause, b: Clause) -> Self {
        if a <= b {
            ClausePair { first: a, second: b }
        } else {
            ClausePair { first: b, second: a }
        }
    }

    pub fn first(&self) -> &Clause {
        &self.first
    }

    pub fn second(&self) -> &Clause {
        &self.second
    }
}

/// Strategy choosing the clause pairs to resolve next.
pub trait PairSelector {
    /// Selector name for profiling and logs.
    fn name(&self) -> &str;

    /// Return the pairs not selected before. Every returned pair is
    /// remembered and excluded from later calls.
    fn select(&mut self, working: &ClauseSet, support: &ClauseSet) -> Vec<ClausePair>;

    /// Forget every pair selected so far.
    fn reset(&mut self);

    /// Number of pairs selected since the last reset.
    fn selected(&self) -> usize;
}

/// Set-of-support selection.
///
/// A pair is eligible when at least one of its clauses belongs to the set of
/// support; the partner may come from the working set or the support itself.
#[derive(Debug, Clone, Default)]
pub struct SetOfSupport {
    resolved: IndexSet<ClausePair>,
}

impl SetOfSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_selected(&self, pair: &ClausePair) -> bool {
        self.resolved.contains(pair)
    }
}

impl PairSelector for SetOfSupport {
    fn name(&self) -> &str {
        "SetOfSupport"
    }

    fn select(&mut self, working: &ClauseSet, support: &ClauseSet) -> Vec<ClausePair> {
        let mut pairs = Vec::new();
        for supported in support {
            for partner in working.iter().chain(support.iter()) {
                if partner == supported {
                    continue;
                }
                let pair = ClausePair::new(supported.clone(), partner.clone());
                if !self.resolved.contains(&pair) {
                    self.resolved.insert(pair.clone());
                    pairs.push(pair);
                }
            }
        }
        pairs
    }

    fn reset(&mut self) {
        self.resolved.clear();
    }

    fn selected(&self) -> usize {
        self.resolved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Label, Literal};

    fn unit(label: Label, polarity: bool) -> Clause {
        Clause::from(Literal::with_polarity(label, (0, 0), polarity))
    }

    fn set(clauses: Vec<Clause>) -> ClauseSet {
        clauses.into_iter().collect()
    }

    #[test]
    fn test_pair_is_unordered() {
        let a = unit(Label::Wumpus, true);
        let b = unit(Label::Poison, false);
        assert_eq!(ClausePair::new(a.clone(), b.clone()), ClausePair::new(b, a));
    }

    #[test]
    fn test_select_requires_support_member() {
        let kb1 = unit(Label::Wumpus, true);
        let kb2 = unit(Label::Poison, true);
        let goal = unit(Label::Safe, false);
        let support = set(vec![goal.clone()]);
        let working = set(vec![kb1.clone(), kb2.clone(), goal.clone()]);

        let mut selector = SetOfSupport::new();
        let pairs = selector.select(&working, &support);

        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&ClausePair::new(goal.clone(), kb1.clone())));
        assert!(pairs.contains(&ClausePair::new(goal, kb2.clone())));
        assert!(!pairs.contains(&ClausePair::new(kb1, kb2)));
    }

    #[test]
    fn test_select_never_repeats() {
        let kb = unit(Label::Wumpus, true);
        let goal = unit(Label::Wumpus, false);
        let working = set(vec![kb.clone(), goal.clone()]);
        let support = set(vec![goal.clone()]);

        let mut selector = SetOfSupport::new();
        assert_eq!(selector.select(&working, &support).len(), 1);
        assert!(selector.select(&working, &support).is_empty());
        assert!(selector.was_selected(&ClausePair::new(kb, goal)));
        assert_eq!(selector.selected(), 1);

        selector.reset();
        assert_eq!(selector.select(&working, &support).len(), 1);
    }

    #[test]
    fn test_support_pairs_counted_once() {
        // Two support clauses pair with each other exactly once
        let s1 = unit(Label::Wumpus, false);
        let s2 = unit(Label::Poison, false);
        let support = set(vec![s1.clone(), s2.clone()]);
        let working = support.clone();

        let mut selector = SetOfSupport::new();
        let pairs = selector.select(&working, &support);
        assert_eq!(pairs, vec![ClausePair::new(s1, s2)]);
    }

    #[test]
    fn test_new_partner_yields_new_pair() {
        let goal = unit(Label::Safe, false);
        let support = set(vec![goal.clone()]);
        let mut working = set(vec![goal.clone()]);
        let mut selector = SetOfSupport::new();
        assert!(selector.select(&working, &support).is_empty());

        let added = unit(Label::Safe, true);
        working.insert(added.clone());
        assert_eq!(
            selector.select(&working, &support),
            vec![ClausePair::new(goal, added)]
        );
    }
}
