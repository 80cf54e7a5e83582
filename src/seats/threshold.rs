use crate::config::Rules;
use crate::error::Result;
use crate::model::{DistrictId, PartyId};
use crate::tally::TallyStore;

/// Parties whose legislative share of `district` reaches the threshold.
///
/// `votes * 100 >= threshold * total` is the exact form of
/// `votes * 100 / total >= threshold`, so a party on exactly 3% qualifies.
/// A district with no votes has no eligible party. When the last party is
/// the blank vote it stays in the denominator but is never eligible.
pub fn eligible_parties(
    tally: &TallyStore,
    district: DistrictId,
    rules: &Rules,
) -> Result<Vec<PartyId>> {
    let total = tally.district_total(district)? as u128;
    if total == 0 {
        return Ok(Vec::new());
    }

    let row = tally.legislative_row(district)?;
    let contenders = if rules.last_party_is_blank {
        &row[..row.len().saturating_sub(1)]
    } else {
        row
    };

    let threshold = rules.threshold_percent as u128;
    let eligible = contenders
        .iter()
        .enumerate()
        .filter(|(_, &votes)| votes as u128 * 100 >= threshold * total)
        .map(|(party, _)| party)
        .collect();

    Ok(eligible)
}
