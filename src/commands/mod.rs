mod info;
mod tally;

pub use info::info;
pub use tally::tally;
