//! Incremental knowledge base over board cells
//!
//! Clauses are told once and kept; every question runs a fresh refutation
//! against the current clause set. Proved unit conclusions are told back so
//! later questions can build on them.

use crate::axioms::{observation, position_axioms, SENSED_LABELS};
use crate::config::ProverConfig;
use crate::error::Result;
use crate::logic::{Clause, ClauseSet, Label, Literal, Position};
use crate::prover::Prover;
use log::debug;
use std::collections::HashSet;

/// Labels surveyed for every cell, in the order they are concluded
const SURVEY_LABELS: [Label; 4] = [Label::Wumpus, Label::Teleporter, Label::Poison, Label::Safe];

/// A growing set of clauses together with the cells whose axioms it holds.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: ClauseSet,
    explored: HashSet<Position>,
    config: ProverConfig,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProverConfig) -> Self {
        KnowledgeBase {
            config,
            ..Self::default()
        }
    }

    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Add a clause. Returns false if it was already known.
    pub fn tell(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    /// Add several clauses. Returns how many were new.
    pub fn tell_all(&mut self, clauses: impl IntoIterator<Item = Clause>) -> usize {
        clauses
            .into_iter()
            .filter(|clause| self.clauses.insert(clause.clone()))
            .count()
    }

    /// Whether the current clauses entail `goal`
    pub fn ask(&self, goal: &Clause) -> Result<bool> {
        let mut prover = Prover::new(self.config.clone());
        let result = prover.prove(&self.clauses, goal)?;
        Ok(result.is_proof())
    }

    /// Ask for a single literal and remember it when it is entailed.
    pub fn conclude(&mut self, literal: Literal) -> Result<bool> {
        let goal = Clause::unit(literal);
        if self.clauses.contains(&goal) {
            return Ok(true);
        }
        let proved = self.ask(&goal)?;
        if proved {
            debug!("concluded {}", literal);
            self.tell(goal);
        }
        Ok(proved)
    }

    /// Try to conclude the presence and absence of every occupant of
    /// `position`. Returns the literals that were proved.
    pub fn survey(&mut self, position: Position) -> Result<Vec<Literal>> {
        let mut proved = Vec::new();
        for label in SURVEY_LABELS {
            for polarity in [true, false] {
                let literal = Literal::with_polarity(label, position, polarity);
                if self.conclude(literal)? {
                    proved.push(literal);
                }
            }
        }
        Ok(proved)
    }

    /// Add the axioms of a newly discovered cell.
    ///
    /// Returns false, and adds nothing, if the cell was explored before.
    pub fn explore(&mut self, position: Position, neighbours: &[Position]) -> bool {
        if !self.explored.insert(position) {
            return false;
        }
        let added = self.tell_all(position_axioms(position, neighbours));
        debug!("explored {}: {} new axioms", position, added);
        true
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.contains(&position)
    }

    /// Record the indicator readings taken at `position`.
    ///
    /// `sensed` lists the indicators perceived there; every other indicator
    /// is recorded as absent.
    pub fn observe(&mut self, position: Position, sensed: &[Label]) {
        let readings = SENSED_LABELS
            .iter()
            .filter_map(|label| label.indicator())
            .map(|indicator| observation(indicator, position, sensed.contains(&indicator)));
        self.tell_all(readings);
    }
}
