use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Position of a party in the ballot order, `0..P`.
pub type PartyId = usize;

/// Position of a district in configuration order, `0..D`.
pub type DistrictId = usize;

/// Polling table ("mesa") identifier.
pub type TableId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
    /// Legislative seats in dispute. Kept signed so a bad configuration
    /// can be reported when seats are requested.
    pub seats: i64,
    pub tables: Range<TableId>,
}

/// Votes one party received at one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyVotes {
    pub presidential: u64,
    pub legislative: u64,
}

impl PartyVotes {
    pub fn new(presidential: u64, legislative: u64) -> Self {
        Self {
            presidential,
            legislative,
        }
    }
}

/// A table's tally sheet: one entry per party, in party order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    pub table: TableId,
    pub votes: Vec<PartyVotes>,
}
