//! Knowledge base tests on a small board
//!
//! An agent walks a 3x3 board, visiting only cells proved safe, and must
//! locate the teleporter without ever concluding anything false.

use refute::{Clause, KnowledgeBase, Label, Literal, Position};
use std::collections::{HashSet, VecDeque};

struct World {
    size: i32,
    wumpus: Position,
    poison: Position,
    teleporter: Position,
}

impl World {
    fn neighbours(&self, cell: Position) -> Vec<Position> {
        cell.adjacent()
            .into_iter()
            .filter(|p| (0..self.size).contains(&p.x) && (0..self.size).contains(&p.y))
            .collect()
    }

    fn sensed(&self, cell: Position) -> Vec<Label> {
        let around = self.neighbours(cell);
        [
            (Label::Stench, self.wumpus),
            (Label::Fumes, self.poison),
            (Label::Glow, self.teleporter),
        ]
        .into_iter()
        .filter(|(_, source)| around.contains(source))
        .map(|(indicator, _)| indicator)
        .collect()
    }

    fn holds(&self, literal: &Literal) -> bool {
        let cell = literal.position;
        let truth = match literal.label {
            Label::Wumpus => cell == self.wumpus,
            Label::Poison => cell == self.poison,
            Label::Teleporter => cell == self.teleporter,
            Label::Safe => cell != self.wumpus && cell != self.poison,
            other => self.sensed(cell).contains(&other),
        };
        truth == literal.polarity
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_agent_finds_teleporter() {
    init_logging();
    let world = World {
        size: 3,
        wumpus: Position::new(2, 0),
        poison: Position::new(0, 2),
        teleporter: Position::new(2, 2),
    };

    let mut kb = KnowledgeBase::new();
    let mut frontier = VecDeque::from([Position::new(0, 0)]);
    let mut visited = HashSet::new();
    let mut found = None;

    while let Some(cell) = frontier.pop_front() {
        if !visited.insert(cell) {
            continue;
        }
        let around = world.neighbours(cell);
        kb.explore(cell, &around);
        for &next in &around {
            kb.explore(next, &world.neighbours(next));
        }
        kb.observe(cell, &world.sensed(cell));

        for &next in &around {
            let proved = kb.survey(next).unwrap();
            for literal in &proved {
                assert!(world.holds(literal), "concluded false literal {}", literal);
            }
            if proved.contains(&Literal::new(Label::Teleporter, next)) {
                found = Some(next);
            }
            if proved.contains(&Literal::new(Label::Safe, next)) && !visited.contains(&next) {
                frontier.push_back(next);
            }
        }
        if found.is_some() {
            break;
        }
    }

    assert_eq!(found, Some(Position::new(2, 2)));
    assert!(!visited.contains(&world.wumpus));
    assert!(!visited.contains(&world.poison));
    let wumpus = Clause::from(Literal::new(Label::Wumpus, (2, 0)));
    assert!(kb.clauses().contains(&wumpus));
}

#[test]
fn test_conclusions_are_remembered() {
    init_logging();
    let mut kb = KnowledgeBase::new();
    let here = Position::new(0, 0);
    let east = Position::new(1, 0);
    kb.explore(here, &[east]);
    kb.explore(east, &[here]);
    kb.observe(here, &[Label::Fumes]);

    assert!(kb.conclude(Literal::new(Label::Poison, east)).unwrap());
    let size = kb.len();
    assert!(kb.conclude(Literal::new(Label::Poison, east)).unwrap());
    assert_eq!(kb.len(), size);
    assert!(kb.conclude(Literal::negative(Label::Safe, east)).unwrap());
}
