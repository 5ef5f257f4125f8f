//! Ground literals over grid positions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Predicate tag of a literal.
///
/// The first four labels describe what occupies a position; the last three
/// are the sensory indicators an agent perceives next to a hazard or the
/// teleporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Wumpus,
    Poison,
    Teleporter,
    Safe,
    Stench,
    Fumes,
    Glow,
}

impl Label {
    pub const ALL: [Label; 7] = [
        Label::Wumpus,
        Label::Poison,
        Label::Teleporter,
        Label::Safe,
        Label::Stench,
        Label::Fumes,
        Label::Glow,
    ];

    /// One-character symbol used when displaying literals
    pub fn symbol(self) -> char {
        match self {
            Label::Wumpus => 'w',
            Label::Poison => 'p',
            Label::Teleporter => 't',
            Label::Safe => 'o',
            Label::Stench => 's',
            Label::Fumes => 'b',
            Label::Glow => 'g',
        }
    }

    /// The indicator sensed on positions adjacent to this label, if any
    pub fn indicator(self) -> Option<Label> {
        match self {
            Label::Wumpus => Some(Label::Stench),
            Label::Poison => Some(Label::Fumes),
            Label::Teleporter => Some(Label::Glow),
            _ => None,
        }
    }

    /// Inverse of [`Label::indicator`]
    pub fn source(self) -> Option<Label> {
        match self {
            Label::Stench => Some(Label::Wumpus),
            Label::Fumes => Some(Label::Poison),
            Label::Glow => Some(Label::Teleporter),
            _ => None,
        }
    }

    pub fn is_indicator(self) -> bool {
        self.source().is_some()
    }
}

impl TryFrom<char> for Label {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Label::ALL
            .into_iter()
            .find(|label| label.symbol() == symbol)
            .ok_or(Error::UnknownLabel(symbol))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Linear weight `20x + y`. Injective only on boards smaller than 20x20.
    pub fn weight(&self) -> i64 {
        20 * i64::from(self.x) + i64::from(self.y)
    }

    /// The orthogonal neighbours representable as `i32` coordinates; the
    /// caller filters them against its board
    pub fn adjacent(&self) -> Vec<Position> {
        [
            self.x.checked_add(1).map(|x| Position::new(x, self.y)),
            self.y.checked_add(1).map(|y| Position::new(self.x, y)),
            self.x.checked_sub(1).map(|x| Position::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Position::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Sort key for canonical clause ordering.
///
/// Sorting order: position weight, then the position itself, then label,
/// then polarity (negative first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralKey {
    weight: i64,
    position: Position,
    label: Label,
    polarity: bool,
}

/// A literal (a label at a position, or its negation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub label: Label,
    pub position: Position,
    pub polarity: bool, // true = positive, false = negated
}

impl Literal {
    /// Create a new positive literal
    pub fn new(label: Label, position: impl Into<Position>) -> Self {
        Literal::with_polarity(label, position, true)
    }

    /// Create a new negative literal
    pub fn negative(label: Label, position: impl Into<Position>) -> Self {
        Literal::with_polarity(label, position, false)
    }

    pub fn with_polarity(label: Label, position: impl Into<Position>, polarity: bool) -> Self {
        Literal {
            label,
            position: position.into(),
            polarity,
        }
    }

    pub fn is_negated(&self) -> bool {
        !self.polarity
    }

    /// Get the literal with flipped polarity
    pub fn negate(&self) -> Literal {
        Literal {
            polarity: !self.polarity,
            ..*self
        }
    }

    /// Same label and position, opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.label == other.label && self.opposes_position(other)
    }

    /// Same position, opposite polarity; the label is not compared
    pub fn opposes_position(&self, other: &Literal) -> bool {
        self.position == other.position && self.polarity != other.polarity
    }

    pub fn is_hazard(&self) -> bool {
        matches!(self.label, Label::Wumpus | Label::Poison)
    }

    /// Labels that occur at most once per board
    pub fn is_unique_per_board(&self) -> bool {
        matches!(
            self.label,
            Label::Wumpus | Label::Poison | Label::Teleporter | Label::Safe
        )
    }

    pub fn is_safe(&self) -> bool {
        self.label == Label::Safe
    }

    pub fn is_goal_marker(&self) -> bool {
        self.label == Label::Teleporter
    }

    pub fn is_indicator(&self) -> bool {
        self.label.is_indicator()
    }

    pub fn ordering_key(&self) -> LiteralKey {
        LiteralKey {
            weight: self.position.weight(),
            position: self.position,
            label: self.label,
            polarity: self.polarity,
        }
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}{}", self.label, self.position)
    }
}

/// Parses the display form, e.g. `~w(1,2)` or `o(0,0)`
impl FromStr for Literal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedLiteral(s.to_string());
        let text = s.trim();
        let (polarity, text) = match text.strip_prefix('~') {
            Some(rest) => (false, rest),
            None => (true, text),
        };
        let mut chars = text.chars();
        let label = Label::try_from(chars.next().ok_or_else(malformed)?)?;
        let coords = chars
            .as_str()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
        let x: i32 = x.trim().parse().map_err(|_| malformed())?;
        let y: i32 = y.trim().parse().map_err(|_| malformed())?;
        Ok(Literal::with_polarity(label, (x, y), polarity))
    }
}
