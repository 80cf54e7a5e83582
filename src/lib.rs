//! Table-by-table vote counting for simultaneous presidential and
//! legislative races: D'Hondt seat allocation per district and the
//! presidential runoff rule.

pub mod config;
pub mod election;
pub mod error;
pub mod model;
pub mod reports;
pub mod runoff;
pub mod seats;
pub mod tally;

pub use config::{ElectionConfig, Rules};
pub use election::Election;
pub use error::{ElectionError, Result};
pub use model::{District, DistrictId, Party, PartyId, PartyVotes, TableId, TableReport};
pub use runoff::RunoffDecision;
pub use seats::DistrictSeats;
