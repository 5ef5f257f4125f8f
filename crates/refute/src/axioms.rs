//! Board axioms and sensor observations as clauses
//!
//! A hazard (or the teleporter) is sensed on every cell next to it through its
//! indicator label: stench for the wumpus, fumes for poison, glow for the
//! teleporter. For a cell `c` with neighbours `n1..nk` and a label `h` with
//! indicator `i`:
//!
//! - `~i(c) ∨ h(n1) ∨ … ∨ h(nk)`: a sensed indicator has a source next door
//! - `i(c) ∨ ~h(n)` for each neighbour: a source is always sensed
//!
//! Every cell holds a hazard or is safe, and a safe cell holds no hazard.

use crate::logic::{Clause, Label, Literal, Position};

/// Labels whose presence is sensed on neighbouring cells
pub const SENSED_LABELS: [Label; 3] = [Label::Wumpus, Label::Poison, Label::Teleporter];

/// Indicator clauses for `label` sensed from `position`.
///
/// Returns no clauses when `label` has no indicator.
pub fn indicator_axioms(label: Label, position: Position, neighbours: &[Position]) -> Vec<Clause> {
    let indicator = match label.indicator() {
        Some(indicator) => indicator,
        None => return Vec::new(),
    };
    let sensed = Literal::new(indicator, position);

    let mut clauses = Vec::with_capacity(neighbours.len() + 1);
    clauses.push(Clause::new(
        std::iter::once(sensed.negate()).chain(neighbours.iter().map(|&n| Literal::new(label, n))),
    ));
    for &neighbour in neighbours {
        clauses.push(Clause::new(vec![sensed, Literal::negative(label, neighbour)]));
    }
    clauses
}

/// Occupancy clauses for one cell: `w ∨ p ∨ o`, `~o ∨ ~w`, `~o ∨ ~p`
pub fn safety_axioms(position: Position) -> Vec<Clause> {
    let safe = Literal::new(Label::Safe, position);
    let wumpus = Literal::new(Label::Wumpus, position);
    let poison = Literal::new(Label::Poison, position);
    vec![
        Clause::new(vec![wumpus, poison, safe]),
        Clause::new(vec![safe.negate(), wumpus.negate()]),
        Clause::new(vec![safe.negate(), poison.negate()]),
    ]
}

/// All axioms contributed by discovering `position`
pub fn position_axioms(position: Position, neighbours: &[Position]) -> Vec<Clause> {
    let mut clauses = safety_axioms(position);
    for label in SENSED_LABELS {
        clauses.extend(indicator_axioms(label, position, neighbours));
    }
    clauses
}

/// Unit clause recording whether `indicator` was sensed at `position`
pub fn observation(indicator: Label, position: Position, sensed: bool) -> Clause {
    Clause::unit(Literal::with_polarity(indicator, position, sensed))
}
