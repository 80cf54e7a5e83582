//! Two-round majority rule for the presidential race.

use crate::config::Rules;
use crate::error::{ElectionError, Result};
use serde::Serialize;

/// How the presidential first round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RunoffDecision {
    /// The leader cleared the outright share.
    Outright,
    /// The leader cleared the lower share with a wide enough lead.
    MarginVictory,
    /// A second round is required.
    Runoff,
}

impl RunoffDecision {
    pub fn requires_runoff(&self) -> bool {
        matches!(self, RunoffDecision::Runoff)
    }
}

impl std::fmt::Display for RunoffDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunoffDecision::Outright => write!(f, "won outright"),
            RunoffDecision::MarginVictory => write!(f, "won by margin"),
            RunoffDecision::Runoff => write!(f, "runoff required"),
        }
    }
}

/// Apply the rule to the top two presidential totals.
///
/// Percentages are compared exactly: `100 * first > 45 * total` stands in
/// for `pct1 > 45`, and likewise for the floor and the gap.
pub fn decide(first: u64, second: u64, grand_total: u64, rules: &Rules) -> Result<RunoffDecision> {
    if grand_total == 0 {
        return Err(ElectionError::NoVotesRecorded);
    }

    let total = grand_total as u128;
    let first = first as u128;
    let second = second as u128;

    if first * 100 > rules.outright_percent as u128 * total {
        return Ok(RunoffDecision::Outright);
    }

    let above_floor = first * 100 > rules.margin_floor_percent as u128 * total;
    let wide_gap = first.saturating_sub(second) * 100 > rules.margin_gap_percent as u128 * total;
    if above_floor && wide_gap {
        return Ok(RunoffDecision::MarginVictory);
    }

    Ok(RunoffDecision::Runoff)
}

pub fn requires_runoff(first: u64, second: u64, grand_total: u64, rules: &Rules) -> Result<bool> {
    decide(first, second, grand_total, rules).map(|decision| decision.requires_runoff())
}
