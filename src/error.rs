use crate::model::{DistrictId, PartyId, TableId};

#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    #[error("Table {table} is outside every district range")]
    OutOfRange { table: TableId },
    #[error("Cannot report unknown table {table}")]
    UnknownTable { table: TableId },
    #[error("Table {table} would overflow a vote total")]
    TallyOverflow { table: TableId },
    #[error("No eligible parties left in the allocator")]
    EmptyAllocator,
    #[error("District {district} has invalid seat quota {quota}")]
    InvalidQuota { district: DistrictId, quota: i64 },
    #[error("No presidential votes recorded yet")]
    NoVotesRecorded,
    #[error("Configuration mismatch: {0}")]
    LengthMismatch(String),
    #[error("Table ranges must be strictly increasing (district {district} ends at {bound})")]
    UnsortedRanges { district: DistrictId, bound: TableId },
    #[error("Duplicate name: {0}")]
    DuplicateName(String),
    #[error("Unknown party: {0}")]
    UnknownParty(PartyId),
    #[error("Unknown district: {0}")]
    UnknownDistrict(DistrictId),
    #[error("Table {table} reported {got} party entries, expected {expected}")]
    BallotLength {
        table: TableId,
        got: usize,
        expected: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ElectionError>;
