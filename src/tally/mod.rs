//! Aggregate vote state, mutated one reported table at a time.

pub mod range_index;
pub mod top_two;

use crate::error::{ElectionError, Result};
use crate::model::{DistrictId, PartyId, PartyVotes, TableId};
pub use range_index::RangeIndex;
pub use top_two::TopTwo;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TallyStore {
    ranges: RangeIndex,
    presidential: Vec<u64>,
    /// `legislative[district][party]`
    legislative: Vec<Vec<u64>>,
    district_totals: Vec<u64>,
    top_two: TopTwo,
    grand_total: u64,
    tables_reported: u64,
}

impl TallyStore {
    pub fn new(ranges: RangeIndex, num_parties: usize) -> Self {
        let num_districts = ranges.len();
        Self {
            ranges,
            presidential: vec![0; num_parties],
            legislative: vec![vec![0; num_parties]; num_districts],
            district_totals: vec![0; num_districts],
            top_two: TopTwo::default(),
            grand_total: 0,
            tables_reported: 0,
        }
    }

    pub fn ranges(&self) -> &RangeIndex {
        &self.ranges
    }

    pub fn num_parties(&self) -> usize {
        self.presidential.len()
    }

    /// Add one table's sheet to the running totals.
    ///
    /// The sheet is validated and every new total is checked for overflow
    /// before anything is touched, so a rejected report leaves the store
    /// unchanged. Returns the owning district.
    pub fn report_table(&mut self, table: TableId, votes: &[PartyVotes]) -> Result<DistrictId> {
        let district = self
            .ranges
            .district_of(table)
            .map_err(|_| ElectionError::UnknownTable { table })?;

        if votes.len() != self.presidential.len() {
            return Err(ElectionError::BallotLength {
                table,
                got: votes.len(),
                expected: self.presidential.len(),
            });
        }

        // Every addition is checked before any total is committed.
        let overflow = || ElectionError::TallyOverflow { table };
        let mut district_total = self.district_totals[district];
        let mut grand_total = self.grand_total;
        for (party, cast) in votes.iter().enumerate() {
            self.legislative[district][party]
                .checked_add(cast.legislative)
                .ok_or_else(overflow)?;
            self.presidential[party]
                .checked_add(cast.presidential)
                .ok_or_else(overflow)?;
            district_total = district_total
                .checked_add(cast.legislative)
                .ok_or_else(overflow)?;
            grand_total = grand_total
                .checked_add(cast.presidential)
                .ok_or_else(overflow)?;
        }

        for (party, cast) in votes.iter().enumerate() {
            self.legislative[district][party] += cast.legislative;
            self.district_totals[district] += cast.legislative;

            self.presidential[party] += cast.presidential;
            self.grand_total += cast.presidential;

            self.top_two.observe(party, self.presidential[party]);
        }
        self.tables_reported += 1;

        debug!(
            table,
            district,
            grand_total = self.grand_total,
            first = self.top_two.first(),
            second = self.top_two.second(),
            "table reported"
        );

        Ok(district)
    }

    pub fn presidential(&self, party: PartyId) -> Result<u64> {
        self.presidential
            .get(party)
            .copied()
            .ok_or(ElectionError::UnknownParty(party))
    }

    pub fn presidential_totals(&self) -> &[u64] {
        &self.presidential
    }

    pub fn legislative(&self, district: DistrictId, party: PartyId) -> Result<u64> {
        let row = self.legislative_row(district)?;
        row.get(party)
            .copied()
            .ok_or(ElectionError::UnknownParty(party))
    }

    /// Legislative totals of every party in `district`, in party order.
    pub fn legislative_row(&self, district: DistrictId) -> Result<&[u64]> {
        self.legislative
            .get(district)
            .map(Vec::as_slice)
            .ok_or(ElectionError::UnknownDistrict(district))
    }

    pub fn district_total(&self, district: DistrictId) -> Result<u64> {
        self.district_totals
            .get(district)
            .copied()
            .ok_or(ElectionError::UnknownDistrict(district))
    }

    pub fn first(&self) -> u64 {
        self.top_two.first()
    }

    pub fn second(&self) -> u64 {
        self.top_two.second()
    }

    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    pub fn tables_reported(&self) -> u64 {
        self.tables_reported
    }
}
