//! Structured profiling for the refutation loop
//!
//! Counters and phase timings collected on every run. All `Duration` fields
//! are serialized as `f64` seconds.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;

fn secs(d: &Duration) -> f64 {
    d.as_secs_f64()
}

/// Statistics for one inference or simplification rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleStats {
    pub count: usize,
    pub time: Duration,
}

impl Serialize for RuleStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RuleStats", 2)?;
        s.serialize_field("count", &self.count)?;
        s.serialize_field("time", &secs(&self.time))?;
        s.end()
    }
}

/// Profiling data collected during one refutation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefutationProfile {
    // Top-level phase timings
    pub total_time: Duration,
    pub simplify_time: Duration,
    pub select_time: Duration,
    pub resolve_time: Duration,

    // Aggregate counters
    pub rounds: usize,
    pub pairs_selected: usize,
    pub resolvents: usize,
    pub max_working_size: usize,
    pub max_support_size: usize,

    // Per-rule stats, keyed by rule name
    pub rules: BTreeMap<String, RuleStats>,

    pub selector_name: String,
}

impl RefutationProfile {
    /// Record `count` applications of a rule.
    pub fn record_rule(&mut self, name: &str, count: usize, time: Duration) {
        let stats = self.rules.entry(name.to_string()).or_default();
        stats.count += count;
        stats.time += time;
    }

    /// Number of recorded applications of a rule (0 if never recorded).
    pub fn rule_count(&self, name: &str) -> usize {
        self.rules.get(name).map_or(0, |stats| stats.count)
    }

    pub fn observe_sizes(&mut self, working: usize, support: usize) {
        self.max_working_size = self.max_working_size.max(working);
        self.max_support_size = self.max_support_size.max(support);
    }
}

impl Serialize for RefutationProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RefutationProfile", 11)?;

        s.serialize_field("total_time", &secs(&self.total_time))?;
        s.serialize_field("simplify_time", &secs(&self.simplify_time))?;
        s.serialize_field("select_time", &secs(&self.select_time))?;
        s.serialize_field("resolve_time", &secs(&self.resolve_time))?;

        s.serialize_field("rounds", &self.rounds)?;
        s.serialize_field("pairs_selected", &self.pairs_selected)?;
        s.serialize_field("resolvents", &self.resolvents)?;
        s.serialize_field("max_working_size", &self.max_working_size)?;
        s.serialize_field("max_support_size", &self.max_support_size)?;

        s.serialize_field("rules", &self.rules)?;
        s.serialize_field("selector_name", &self.selector_name)?;

        s.end()
    }
}
