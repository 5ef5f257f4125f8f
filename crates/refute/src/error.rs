//! Error types for refute

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown label symbol: {0:?}")]
    UnknownLabel(char),

    #[error("Malformed literal: {0:?}")]
    MalformedLiteral(String),

    #[error("Round limit exceeded after {rounds} rounds")]
    RoundLimit { rounds: usize },

    #[error("Clause limit exceeded: {clauses} clauses in the working set")]
    ClauseLimit { clauses: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
