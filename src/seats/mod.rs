//! Per-district legislative seat allocation.

pub mod allocator;
pub mod threshold;

use crate::config::Rules;
use crate::error::{ElectionError, Result};
use crate::model::{District, DistrictId, PartyId};
use crate::tally::TallyStore;
pub use allocator::{PriorityAllocator, Quotient};
use serde::Serialize;
pub use threshold::eligible_parties;
use tracing::{info, trace, warn};

/// Seats won by each party in one district, in party order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictSeats {
    seats: Vec<u64>,
}

impl DistrictSeats {
    fn empty(num_parties: usize) -> Self {
        Self {
            seats: vec![0; num_parties],
        }
    }

    pub fn seats_of(&self, party: PartyId) -> Option<u64> {
        self.seats.get(party).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.seats
    }

    pub fn total(&self) -> u64 {
        self.seats.iter().sum()
    }
}

/// Computes each district's seats once and caches the result.
///
/// Later reports change the tally but never a cached distribution.
#[derive(Debug, Clone)]
pub struct SeatAllocationEngine {
    results: Vec<Option<DistrictSeats>>,
}

impl SeatAllocationEngine {
    pub fn new(num_districts: usize) -> Self {
        Self {
            results: vec![None; num_districts],
        }
    }

    pub fn is_finalized(&self, district: DistrictId) -> bool {
        matches!(self.results.get(district), Some(Some(_)))
    }

    pub fn seats_for(
        &mut self,
        district: &District,
        tally: &TallyStore,
        rules: &Rules,
    ) -> Result<&DistrictSeats> {
        let slot = self
            .results
            .get_mut(district.id)
            .ok_or(ElectionError::UnknownDistrict(district.id))?;

        let seats = match slot.take() {
            Some(cached) => cached,
            None => allocate(district, tally, rules)?,
        };
        Ok(slot.insert(seats))
    }
}

fn allocate(district: &District, tally: &TallyStore, rules: &Rules) -> Result<DistrictSeats> {
    if district.seats < 0 {
        return Err(ElectionError::InvalidQuota {
            district: district.id,
            quota: district.seats,
        });
    }

    let mut result = DistrictSeats::empty(tally.num_parties());
    if district.seats == 0 {
        return Ok(result);
    }

    let votes = tally.legislative_row(district.id)?;
    let eligible = eligible_parties(tally, district.id, rules)?;

    let mut allocator = PriorityAllocator::new();
    allocator.seed(eligible.iter().map(|&party| (votes[party], party)));

    for _ in 0..district.seats {
        let (quotient, party) = match allocator.peek_max() {
            Ok(max) => max,
            Err(ElectionError::EmptyAllocator) => {
                warn!(
                    district = %district.name,
                    "no party reached the threshold, seats left unallocated"
                );
                break;
            }
            Err(e) => return Err(e),
        };

        result.seats[party] += 1;
        trace!(
            district = %district.name,
            party,
            quotient = quotient.value(),
            "seat awarded"
        );
        allocator.award_and_requote(party, votes[party], result.seats[party])?;
    }

    info!(
        district = %district.name,
        seats = district.seats,
        eligible = eligible.len(),
        "district finalized"
    );

    Ok(result)
}
