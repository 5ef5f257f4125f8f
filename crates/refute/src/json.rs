//! JSON serialization types for refutation results

use crate::error::{Error, Result};
use crate::logic::{Clause, ClauseRole, ClauseSet, Literal};
use crate::prover::profile::RefutationProfile;
use crate::state::{Proof, ProofResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON representation of a clause: literals in display form, e.g. `"~w(1,2)"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseJson {
    pub literals: Vec<String>,
}

impl ClauseJson {
    pub fn from_clause(clause: &Clause) -> Self {
        ClauseJson {
            literals: clause.literals().iter().map(Literal::to_string).collect(),
        }
    }

    pub fn to_clause(&self) -> Result<Clause> {
        self.literals
            .iter()
            .map(|text| text.parse::<Literal>())
            .collect()
    }
}

/// Parse a knowledge base given as JSON clauses
pub fn clauses_from_json(clauses: &[ClauseJson]) -> Result<ClauseSet> {
    clauses.iter().map(ClauseJson::to_clause).collect()
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub clause_idx: usize,
    pub clause: ClauseJson,
    pub role: ClauseRole,
    /// Indices of earlier steps
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub premises: Vec<usize>,
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub steps: Vec<ProofStepJson>,
    pub empty_clause_idx: usize,
}

impl ProofJson {
    pub fn from_proof(proof: &Proof) -> Self {
        let mut index: HashMap<&Clause, usize> = HashMap::new();
        let mut steps = Vec::with_capacity(proof.len());
        for (idx, step) in proof.steps.iter().enumerate() {
            let premises = step
                .derivation
                .premises
                .iter()
                .filter_map(|premise| index.get(premise).copied())
                .collect();
            index.insert(&step.conclusion, idx);
            steps.push(ProofStepJson {
                clause_idx: idx,
                clause: ClauseJson::from_clause(&step.conclusion),
                role: step.derivation.role,
                premises,
            });
        }
        ProofJson {
            empty_clause_idx: steps.len().saturating_sub(1),
            steps,
        }
    }
}

/// JSON representation of a refutation outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum ProofResultJson {
    Proof {
        proof: ProofJson,
        time_seconds: f64,
        profile: serde_json::Value,
    },
    Saturated {
        rounds: usize,
        time_seconds: f64,
        profile: serde_json::Value,
    },
    ResourceLimit {
        reason: String,
        time_seconds: f64,
        profile: serde_json::Value,
    },
}

impl ProofResultJson {
    pub fn from_outcome(outcome: &Result<ProofResult>, profile: &RefutationProfile) -> Self {
        let time_seconds = profile.total_time.as_secs_f64();
        let profile_json = serde_json::to_value(profile).unwrap_or_default();
        match outcome {
            Ok(ProofResult::Proof(proof)) => ProofResultJson::Proof {
                proof: ProofJson::from_proof(proof),
                time_seconds,
                profile: profile_json,
            },
            Ok(ProofResult::Saturated) => ProofResultJson::Saturated {
                rounds: profile.rounds,
                time_seconds,
                profile: profile_json,
            },
            Err(e) => ProofResultJson::ResourceLimit {
                reason: limit_reason(e),
                time_seconds,
                profile: profile_json,
            },
        }
    }

    pub fn is_proof(&self) -> bool {
        matches!(self, ProofResultJson::Proof { .. })
    }
}

fn limit_reason(error: &Error) -> String {
    match error {
        Error::RoundLimit { .. } => "round_limit".to_string(),
        Error::ClauseLimit { .. } => "clause_limit".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProverConfig;
    use crate::logic::Label;
    use crate::prover::Prover;

    fn chain() -> ClauseSet {
        let clauses = vec![
            ClauseJson {
                literals: vec!["~w(0,0)".to_string(), "p(0,0)".to_string()],
            },
            ClauseJson {
                literals: vec!["~p(0,0)".to_string(), "o(0,0)".to_string()],
            },
            ClauseJson {
                literals: vec!["w(0,0)".to_string()],
            },
        ];
        clauses_from_json(&clauses).unwrap()
    }

    #[test]
    fn test_clause_json_round_trip() {
        let clause = Clause::new(vec![
            Literal::new(Label::Safe, (1, 1)),
            Literal::negative(Label::Wumpus, (0, 1)),
        ]);
        let json = ClauseJson::from_clause(&clause);
        assert_eq!(json.literals, vec!["~w(0,1)", "o(1,1)"]);
        assert_eq!(json.to_clause().unwrap(), clause);
    }

    #[test]
    fn test_bad_literal_is_rejected() {
        let json = ClauseJson {
            literals: vec!["q(0,0)".to_string()],
        };
        assert_eq!(json.to_clause(), Err(Error::UnknownLabel('q')));
    }

    #[test]
    fn test_proof_json_indices_refer_to_earlier_steps() {
        let mut prover = Prover::new(ProverConfig::default());
        let goal = Clause::from(Literal::new(Label::Safe, (0, 0)));
        let outcome = prover.prove(&chain(), &goal);
        let json = ProofResultJson::from_outcome(&outcome, prover.profile());

        let proof = match &json {
            ProofResultJson::Proof { proof, .. } => proof,
            other => panic!("Expected proof, got {:?}", other),
        };
        assert_eq!(proof.empty_clause_idx, proof.steps.len() - 1);
        assert!(proof.steps[proof.empty_clause_idx].clause.literals.is_empty());
        for step in &proof.steps {
            assert!(step.premises.iter().all(|&p| p < step.clause_idx));
            match step.role {
                ClauseRole::Derived => assert_eq!(step.premises.len(), 2),
                _ => assert!(step.premises.is_empty()),
            }
        }
    }

    #[test]
    fn test_result_json_is_tagged() {
        let mut prover = Prover::new(ProverConfig::default());
        let goal = Clause::from(Literal::negative(Label::Safe, (0, 0)));
        let outcome = prover.prove(&chain(), &goal);
        let json = ProofResultJson::from_outcome(&outcome, prover.profile());
        assert!(!json.is_proof());

        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["result"], "Saturated");
        assert_eq!(value["rounds"], prover.profile().rounds);
        assert_eq!(value["profile"]["selector_name"], "SetOfSupport");
    }

    #[test]
    fn test_limit_json() {
        let mut prover = Prover::new(ProverConfig::default().with_max_rounds(1));
        let goal = Clause::from(Literal::new(Label::Safe, (0, 0)));
        let outcome = prover.prove(&chain(), &goal);
        let json = ProofResultJson::from_outcome(&outcome, prover.profile());

        let text = serde_json::to_string(&json).unwrap();
        let back: ProofResultJson = serde_json::from_str(&text).unwrap();
        match back {
            ProofResultJson::ResourceLimit { reason, .. } => assert_eq!(reason, "round_limit"),
            other => panic!("Expected resource limit, got {:?}", other),
        }
    }
}
