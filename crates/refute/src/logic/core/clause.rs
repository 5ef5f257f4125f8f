//! Clauses and clause sets

use super::literal::Literal;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deduplicated set of clauses, iterated in insertion order
pub type ClauseSet = IndexSet<Clause>;

/// Role of a clause in a refutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClauseRole {
    /// Member of the knowledge base
    #[default]
    Axiom,
    /// Unit clause obtained by negating the goal
    NegatedGoal,
    /// Resolvent
    Derived,
}

/// A clause (disjunction of unique literals).
///
/// Literals are kept sorted by [`Literal::ordering_key`] and deduplicated, so
/// two clauses over the same literal set are equal and hash identically no
/// matter in which order their literals were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Literal>", into = "Vec<Literal>")]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals: Vec<Literal> = literals.into_iter().collect();
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause { literals: vec![] }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Literals in canonical order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Every literal of `self` also occurs in `other`
    pub fn is_subset_of(&self, other: &Clause) -> bool {
        if self.literals.len() > other.literals.len() {
            return false;
        }
        // Both sides are sorted: a single merge pass suffices
        let mut rest = other.literals.iter();
        self.literals
            .iter()
            .all(|lit| rest.by_ref().any(|candidate| candidate == lit))
    }

    /// Some literal of this clause occurs negated in `other`
    pub fn is_resolvable_with(&self, other: &Clause) -> bool {
        self.literals
            .iter()
            .any(|lit| other.contains(&lit.negate()))
    }

    /// Some other clause of `clauses` is a subset of this clause
    pub fn is_redundant<'a>(&self, clauses: impl IntoIterator<Item = &'a Clause>) -> bool {
        clauses
            .into_iter()
            .any(|other| other != self && other.is_subset_of(self))
    }

    /// Two literals share a position with opposite polarity, whatever their labels
    pub fn is_tautological(&self) -> bool {
        self.has_pair(Literal::opposes_position)
    }

    /// The clause contains a literal together with its negation
    pub fn is_complementary(&self) -> bool {
        self.has_pair(Literal::is_complement_of)
    }

    fn has_pair(&self, related: impl Fn(&Literal, &Literal) -> bool) -> bool {
        for i in 0..self.literals.len() {
            for j in (i + 1)..self.literals.len() {
                if related(&self.literals[i], &self.literals[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// One unit clause per negated literal (the set of support of a goal)
    pub fn negate_all(&self) -> ClauseSet {
        self.literals
            .iter()
            .map(|lit| Clause::unit(lit.negate()))
            .collect()
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::unit(literal)
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(clause: Clause) -> Self {
        clause.literals
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Label, Position};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    const AT: Position = Position { x: 0, y: 0 };

    fn pos(label: Label) -> Literal {
        Literal::new(label, AT)
    }

    fn neg(label: Label) -> Literal {
        Literal::negative(label, AT)
    }

    fn hash_of(clause: &Clause) -> u64 {
        let mut hasher = DefaultHasher::new();
        clause.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = Clause::new(vec![pos(Label::Wumpus), neg(Label::Poison), pos(Label::Safe)]);
        let b = Clause::new(vec![pos(Label::Safe), pos(Label::Wumpus), neg(Label::Poison)]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_duplicate_literals_collapse() {
        let clause = Clause::new(vec![neg(Label::Glow), neg(Label::Glow)]);
        assert!(clause.is_unit());
        assert_eq!(clause, Clause::from(neg(Label::Glow)));
    }

    #[test]
    fn test_subset() {
        let small = Clause::new(vec![pos(Label::Wumpus)]);
        let big = Clause::new(vec![pos(Label::Wumpus), pos(Label::Poison)]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(Clause::empty().is_subset_of(&small));
        assert!(big.is_subset_of(&big));
        let other = Clause::new(vec![pos(Label::Safe), pos(Label::Poison)]);
        assert!(!big.is_subset_of(&other));
    }

    #[test]
    fn test_resolvable_with() {
        let c1 = Clause::new(vec![neg(Label::Wumpus), pos(Label::Poison)]);
        let c2 = Clause::from(pos(Label::Wumpus));
        let c3 = Clause::from(pos(Label::Safe));
        assert!(c1.is_resolvable_with(&c2));
        assert!(c2.is_resolvable_with(&c1));
        assert!(!c1.is_resolvable_with(&c3));
        // Same label at a different position is a different proposition
        let elsewhere = Clause::from(Literal::new(Label::Wumpus, (1, 0)));
        assert!(!c1.is_resolvable_with(&elsewhere));
    }

    #[test]
    fn test_redundant_excludes_self() {
        let unit = Clause::from(pos(Label::Wumpus));
        let wide = Clause::new(vec![pos(Label::Wumpus), pos(Label::Poison)]);
        let clauses = vec![unit.clone(), wide.clone()];
        assert!(wide.is_redundant(&clauses));
        assert!(!unit.is_redundant(&clauses));
    }

    #[test]
    fn test_tautological_ignores_label() {
        // ~w ∨ p at the same position counts as tautological under the positional check
        let mixed = Clause::new(vec![neg(Label::Wumpus), pos(Label::Poison)]);
        assert!(mixed.is_tautological());
        assert!(!mixed.is_complementary());

        let classic = Clause::new(vec![neg(Label::Wumpus), pos(Label::Wumpus)]);
        assert!(classic.is_tautological());
        assert!(classic.is_complementary());

        let apart = Clause::new(vec![
            Literal::negative(Label::Wumpus, (0, 0)),
            Literal::new(Label::Wumpus, (0, 1)),
        ]);
        assert!(!apart.is_tautological());
        assert!(!apart.is_complementary());
    }

    #[test]
    fn test_negate_all() {
        let goal = Clause::new(vec![pos(Label::Wumpus), neg(Label::Poison)]);
        let support = goal.negate_all();
        assert_eq!(support.len(), 2);
        assert!(support.contains(&Clause::from(neg(Label::Wumpus))));
        assert!(support.contains(&Clause::from(pos(Label::Poison))));
        assert!(Clause::empty().negate_all().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Clause::empty().to_string(), "⊥");
        let clause = Clause::new(vec![pos(Label::Poison), neg(Label::Wumpus)]);
        assert_eq!(clause.to_string(), "~w(0,0) ∨ p(0,0)");
    }

    #[test]
    fn test_serde_keeps_canonical_form() {
        let clause = Clause::new(vec![pos(Label::Safe), neg(Label::Wumpus)]);
        let json = serde_json::to_string(&clause).unwrap();
        let back: Clause = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clause);
    }
}
