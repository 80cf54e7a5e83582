use crate::model::PartyId;

/// Running largest and second-largest presidential totals.
///
/// Totals only grow, so each update compares the changed party against the
/// current pair without rescanning. Ties are resolved by value: two parties
/// sharing the maximum leave `second == first`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopTwo {
    first: u64,
    second: u64,
    leader: Option<PartyId>,
}

impl TopTwo {
    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn second(&self) -> u64 {
        self.second
    }

    /// Record that `party`'s total is now `total`.
    pub fn observe(&mut self, party: PartyId, total: u64) {
        if self.leader == Some(party) {
            self.first = total;
        } else if total > self.first {
            self.second = self.first;
            self.first = total;
            self.leader = Some(party);
        } else if total > self.second {
            self.second = total;
        }
    }
}
