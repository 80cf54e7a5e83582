use crate::config::{ensure_distinct, ElectionConfig, Rules};
use crate::error::{ElectionError, Result};
use crate::model::{District, DistrictId, Party, PartyId, PartyVotes, TableId};
use crate::runoff::{self, RunoffDecision};
use crate::seats::{DistrictSeats, SeatAllocationEngine};
use crate::tally::{RangeIndex, TallyStore};

/// Vote counting for a simultaneous presidential and legislative election.
///
/// Tables are reported one at a time; legislative seats of a district are
/// allocated the first time they are requested and never recomputed.
#[derive(Debug, Clone)]
pub struct Election {
    parties: Vec<Party>,
    districts: Vec<District>,
    rules: Rules,
    tally: TallyStore,
    engine: SeatAllocationEngine,
}

impl Election {
    /// Build an election from parallel per-district arrays.
    ///
    /// `table_upper_bounds[i]` is the exclusive end of district `i`'s table
    /// range; district 0 starts at table 0.
    pub fn new<S, T>(
        district_names: &[S],
        seats_per_district: &[i64],
        party_names: &[T],
        table_upper_bounds: &[TableId],
    ) -> Result<Self>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let num_districts = district_names.len();
        if seats_per_district.len() != num_districts || table_upper_bounds.len() != num_districts {
            return Err(ElectionError::LengthMismatch(format!(
                "{} district names, {} seat quotas, {} table bounds",
                num_districts,
                seats_per_district.len(),
                table_upper_bounds.len()
            )));
        }

        ensure_distinct(party_names.iter().map(T::as_ref))?;
        ensure_distinct(district_names.iter().map(S::as_ref))?;
        let ranges = RangeIndex::from_upper_bounds(table_upper_bounds.to_vec())?;

        let parties: Vec<Party> = party_names
            .iter()
            .enumerate()
            .map(|(id, name)| Party {
                id,
                name: name.as_ref().to_string(),
            })
            .collect();

        let districts = district_names
            .iter()
            .zip(seats_per_district)
            .enumerate()
            .map(|(id, (name, &seats))| -> Result<District> {
                let tables = ranges
                    .range_of(id)
                    .ok_or(ElectionError::UnknownDistrict(id))?;
                Ok(District {
                    id,
                    name: name.as_ref().to_string(),
                    seats,
                    tables,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tally: TallyStore::new(ranges, parties.len()),
            engine: SeatAllocationEngine::new(districts.len()),
            parties,
            districts,
            rules: Rules::default(),
        })
    }

    pub fn from_config(config: &ElectionConfig) -> Result<Self> {
        config.validate()?;

        let names: Vec<&str> = config.districts.iter().map(|d| d.name.as_str()).collect();
        let seats: Vec<i64> = config.districts.iter().map(|d| d.seats).collect();
        let bounds: Vec<TableId> = config.districts.iter().map(|d| d.last_table).collect();

        Ok(Self::new(&names, &seats, &config.parties, &bounds)?.with_rules(config.rules))
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn tally(&self) -> &TallyStore {
        &self.tally
    }

    fn party(&self, party: PartyId) -> Result<&Party> {
        self.parties
            .get(party)
            .ok_or(ElectionError::UnknownParty(party))
    }

    fn district(&self, district: DistrictId) -> Result<&District> {
        self.districts
            .get(district)
            .ok_or(ElectionError::UnknownDistrict(district))
    }

    pub fn party_name(&self, party: PartyId) -> Result<&str> {
        Ok(&self.party(party)?.name)
    }

    pub fn district_name(&self, district: DistrictId) -> Result<&str> {
        Ok(&self.district(district)?.name)
    }

    pub fn seats_in_dispute(&self, district: DistrictId) -> Result<i64> {
        Ok(self.district(district)?.seats)
    }

    pub fn district_of_table(&self, table: TableId) -> Result<DistrictId> {
        self.tally.ranges().district_of(table)
    }

    pub fn district_name_of_table(&self, table: TableId) -> Result<&str> {
        let district = self.district_of_table(table)?;
        self.district_name(district)
    }

    /// Add a table's sheet. Accepted even after the district's seats were
    /// finalized; the cached seats stay as they were.
    pub fn report_table(&mut self, table: TableId, votes: &[PartyVotes]) -> Result<()> {
        self.tally.report_table(table, votes)?;
        Ok(())
    }

    pub fn presidential_votes(&self, party: PartyId) -> Result<u64> {
        self.tally.presidential(party)
    }

    pub fn legislative_votes(&self, party: PartyId, district: DistrictId) -> Result<u64> {
        self.tally.legislative(district, party)
    }

    pub fn is_finalized(&self, district: DistrictId) -> bool {
        self.engine.is_finalized(district)
    }

    pub fn seats_for(&mut self, district: DistrictId) -> Result<&DistrictSeats> {
        let district = self
            .districts
            .get(district)
            .ok_or(ElectionError::UnknownDistrict(district))?;
        self.engine.seats_for(district, &self.tally, &self.rules)
    }

    pub fn runoff_decision(&self) -> Result<RunoffDecision> {
        runoff::decide(
            self.tally.first(),
            self.tally.second(),
            self.tally.grand_total(),
            &self.rules,
        )
    }

    pub fn requires_runoff(&self) -> Result<bool> {
        runoff::requires_runoff(
            self.tally.first(),
            self.tally.second(),
            self.tally.grand_total(),
            &self.rules,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election() -> Election {
        Election::new(
            &["Capital", "North", "South"],
            &[3, 2, 4],
            &["Green", "Blue", "Red"],
            &[10, 15, 30],
        )
        .unwrap()
    }

    #[test]
    fn test_static_queries() {
        let election = election();
        assert_eq!(election.party_name(1).unwrap(), "Blue");
        assert_eq!(election.district_name(2).unwrap(), "South");
        assert_eq!(election.seats_in_dispute(0).unwrap(), 3);
        assert_eq!(election.district_of_table(14).unwrap(), 1);
        assert_eq!(election.district_name_of_table(15).unwrap(), "South");
        assert_eq!(election.districts()[1].tables, 10..15);
    }

    #[test]
    fn test_unknown_ids() {
        let election = election();
        assert!(matches!(election.party_name(3), Err(ElectionError::UnknownParty(3))));
        assert!(matches!(
            election.district_name(3),
            Err(ElectionError::UnknownDistrict(3))
        ));
        assert!(matches!(
            election.district_of_table(30),
            Err(ElectionError::OutOfRange { table: 30 })
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let err = Election::new(&["A", "B"], &[1], &["P"], &[5, 10]);
        assert!(matches!(err, Err(ElectionError::LengthMismatch(_))));
    }

    #[test]
    fn test_duplicate_names() {
        let err = Election::new(&["A", "B"], &[1, 1], &["P", "Q", "P"], &[5, 10]);
        assert!(matches!(err, Err(ElectionError::DuplicateName(name)) if name == "P"));
        let err = Election::new(&["A", "A"], &[1, 1], &["P"], &[5, 10]);
        assert!(matches!(err, Err(ElectionError::DuplicateName(_))));
    }

    #[test]
    fn test_blank_last_party() {
        let mut election = Election::new(&["Capital"], &[3], &["Green", "Blue", "Blank"], &[10])
            .unwrap()
            .with_rules(Rules {
                last_party_is_blank: true,
                ..Rules::default()
            });
        let sheet = [
            PartyVotes::new(0, 50),
            PartyVotes::new(0, 20),
            PartyVotes::new(0, 40),
        ];
        election.report_table(4, &sheet).unwrap();
        assert_eq!(election.seats_for(0).unwrap().as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn test_report_and_query() {
        let mut election = election();
        let sheet = [
            PartyVotes::new(10, 100),
            PartyVotes::new(5, 60),
            PartyVotes::new(1, 1),
        ];
        election.report_table(3, &sheet).unwrap();

        assert_eq!(election.presidential_votes(0).unwrap(), 10);
        assert_eq!(election.legislative_votes(1, 0).unwrap(), 60);
        assert_eq!(election.legislative_votes(1, 1).unwrap(), 0);
        assert_eq!(election.seats_for(0).unwrap().as_slice(), &[2, 1, 0]);
        assert!(election.is_finalized(0));
        assert!(!election.is_finalized(1));
    }

    #[test]
    fn test_report_unknown_table() {
        let mut election = election();
        let err = election.report_table(99, &[PartyVotes::default(); 3]);
        assert!(matches!(err, Err(ElectionError::UnknownTable { table: 99 })));
    }

    #[test]
    fn test_runoff_needs_votes() {
        let mut election = election();
        assert!(matches!(
            election.requires_runoff(),
            Err(ElectionError::NoVotesRecorded)
        ));

        let sheet = [
            PartyVotes::new(42, 0),
            PartyVotes::new(35, 0),
            PartyVotes::new(23, 0),
        ];
        election.report_table(0, &sheet).unwrap();
        assert!(election.requires_runoff().unwrap());
        assert_eq!(election.runoff_decision().unwrap(), RunoffDecision::Runoff);
    }
}
