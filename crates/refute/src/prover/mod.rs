//! Prover: orchestrates set-of-support refutation resolution.
//!
//! The goal is negated into unit clauses that seed the set of support. Each
//! round simplifies the working set and the support by subsumption, resolves
//! every fresh support-connected pair, and merges the surviving resolvents.
//! The run ends with the empty clause (the goal is entailed) or at a fixpoint
//! where a round adds nothing new (it is not).

pub mod profile;

use self::profile::RefutationProfile;
use crate::config::ProverConfig;
use crate::error::{Error, Result};
use crate::generating::ResolutionRule;
use crate::logic::{Clause, ClauseSet};
use crate::selection::{PairSelector, SetOfSupport};
use crate::simplifying::{eliminate_redundant, SubsumptionRule, TautologyRule};
use crate::state::{ProofResult, RefutationState};
use log::debug;
use std::time::Instant;

/// Decide whether `knowledge_base` entails `goal` with the default configuration.
///
/// The knowledge base must be in CNF and consistent; neither is checked.
pub fn entails(knowledge_base: &ClauseSet, goal: &Clause) -> bool {
    matches!(
        Prover::new(ProverConfig::default()).prove(knowledge_base, goal),
        Ok(ProofResult::Proof(_))
    )
}

/// Refutation engine.
///
/// A prover can be reused: every call to [`Prover::prove`] starts from fresh
/// state, a cleared selector and a new profile.
pub struct Prover {
    /// Prover configuration (limits, tautology mode)
    pub config: ProverConfig,
    /// Pair selection strategy
    selector: Box<dyn PairSelector>,
    resolution: ResolutionRule,
    tautology: TautologyRule,
    subsumption: SubsumptionRule,
    /// Profiling data of the last run
    profile: RefutationProfile,
}

impl Prover {
    pub fn new(config: ProverConfig) -> Self {
        Self::with_selector(config, Box::new(SetOfSupport::new()))
    }

    pub fn with_selector(config: ProverConfig, selector: Box<dyn PairSelector>) -> Self {
        let tautology = TautologyRule::new(config.complement);
        Prover {
            config,
            selector,
            resolution: ResolutionRule::new(tautology),
            tautology,
            subsumption: SubsumptionRule::new(),
            profile: RefutationProfile::default(),
        }
    }

    pub fn profile(&self) -> &RefutationProfile {
        &self.profile
    }

    /// Run the refutation loop to completion.
    ///
    /// The caller's knowledge base and goal are only read. Returns
    /// `Error::RoundLimit` or `Error::ClauseLimit` when a configured limit is
    /// reached before the loop settles.
    pub fn prove(&mut self, knowledge_base: &ClauseSet, goal: &Clause) -> Result<ProofResult> {
        let start_time = Instant::now();
        self.selector.reset();
        self.profile = RefutationProfile {
            selector_name: self.selector.name().to_string(),
            ..RefutationProfile::default()
        };

        debug!("proving {} from {} clauses", goal, knowledge_base.len());
        let mut state = RefutationState::new(knowledge_base, goal);
        let result = self.run(&mut state);

        self.profile.rounds = state.round;
        self.profile.total_time = start_time.elapsed();
        match &result {
            Ok(ProofResult::Proof(proof)) => {
                debug!("proved {} in {} rounds ({} steps)", goal, state.round, proof.len())
            }
            Ok(ProofResult::Saturated) => {
                debug!("saturated after {} rounds, {} not entailed", state.round, goal)
            }
            Err(e) => debug!("gave up on {}: {}", goal, e),
        }
        result
    }

    fn run(&mut self, state: &mut RefutationState) -> Result<ProofResult> {
        let empty = Clause::empty();
        if state.working.contains(&empty) {
            return Ok(ProofResult::Proof(state.extract_proof(&empty)));
        }

        loop {
            self.check_limits(state)?;
            state.round += 1;

            // Simplify
            let t = Instant::now();
            let removed = eliminate_redundant(&mut state.working, &mut state.support);
            let elapsed = t.elapsed();
            self.profile.record_rule(self.subsumption.name(), removed, elapsed);
            self.profile.simplify_time += elapsed;
            self.profile.observe_sizes(state.working.len(), state.support.len());

            // Select
            let t = Instant::now();
            let pairs = self.selector.select(&state.working, &state.support);
            self.profile.select_time += t.elapsed();
            self.profile.pairs_selected += pairs.len();
            debug!(
                "round {}: {} working, {} support, {} fresh pairs",
                state.round,
                state.working.len(),
                state.support.len(),
                pairs.len()
            );

            // Expand
            let t = Instant::now();
            let mut new = ClauseSet::new();
            let mut support_grew = false;
            let mut generated = 0;
            let mut discarded = 0;
            for pair in &pairs {
                let resolvents = self.resolution.resolve_pair(pair.first(), pair.second());
                discarded += resolvents.discarded;
                for resolvent in resolvents.clauses {
                    generated += 1;
                    state.record_derivation(&resolvent, pair.first(), pair.second());
                    if resolvent.is_empty() {
                        self.profile.resolvents += generated;
                        self.profile
                            .record_rule(self.resolution.name(), generated, t.elapsed());
                        return Ok(ProofResult::Proof(state.extract_proof(&resolvent)));
                    }
                    support_grew |= state.support.insert(resolvent.clone());
                    new.insert(resolvent);
                }
            }
            let elapsed = t.elapsed();
            self.profile.resolve_time += elapsed;
            self.profile.resolvents += generated;
            self.profile.record_rule(self.resolution.name(), generated, elapsed);
            self.profile.record_rule(self.tautology.name(), discarded, elapsed);

            // Forward subsumption of the candidates
            let t = Instant::now();
            let removed = self
                .subsumption
                .forward(&mut new, &[&state.support, &state.working]);
            let elapsed = t.elapsed();
            self.profile.record_rule(self.subsumption.name(), removed, elapsed);
            self.profile.simplify_time += elapsed;

            // Fixpoint: nothing new in the working set and no fresh support
            if !support_grew && new.is_subset(&state.working) {
                return Ok(ProofResult::Saturated);
            }
            state.working.extend(new);
        }
    }

    fn check_limits(&self, state: &RefutationState) -> Result<()> {
        if self.config.max_rounds > 0 && state.round >= self.config.max_rounds {
            return Err(Error::RoundLimit {
                rounds: state.round,
            });
        }
        if self.config.max_clauses > 0 && state.working.len() > self.config.max_clauses {
            return Err(Error::ClauseLimit {
                clauses: state.working.len(),
            });
        }
        Ok(())
    }
}
