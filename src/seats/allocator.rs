use crate::error::{ElectionError, Result};
use crate::model::PartyId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Highest-averages quotient `votes / divisor`, kept as an exact fraction.
#[derive(Debug, Clone, Copy)]
pub struct Quotient {
    pub votes: u64,
    pub divisor: u64,
}

impl Quotient {
    /// Quotient of a party that has already won `seats_won` seats.
    pub fn after(votes: u64, seats_won: u64) -> Self {
        Self {
            votes,
            divisor: seats_won + 1,
        }
    }

    pub fn value(&self) -> f64 {
        self.votes as f64 / self.divisor as f64
    }
}

impl PartialEq for Quotient {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quotient {}

impl PartialOrd for Quotient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quotient {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.votes as u128 * other.divisor as u128;
        let rhs = other.votes as u128 * self.divisor as u128;
        lhs.cmp(&rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    quotient: Quotient,
    party: PartyId,
}

impl Ord for Entry {
    // Equal quotients rank the lower party index higher.
    fn cmp(&self, other: &Self) -> Ordering {
        self.quotient
            .cmp(&other.quotient)
            .then_with(|| other.party.cmp(&self.party))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap of `(quotient, party)` for one district's seat allocation.
#[derive(Debug, Default)]
pub struct PriorityAllocator {
    heap: BinaryHeap<Entry>,
}

impl PriorityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-insert `(votes, party)` pairs with no seats won yet. O(k).
    pub fn seed<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u64, PartyId)>,
    {
        let mut seeded = std::mem::take(&mut self.heap).into_vec();
        seeded.extend(entries.into_iter().map(|(votes, party)| Entry {
            quotient: Quotient::after(votes, 0),
            party,
        }));
        self.heap = BinaryHeap::from(seeded);
    }

    pub fn peek_max(&self) -> Result<(Quotient, PartyId)> {
        self.heap
            .peek()
            .map(|entry| (entry.quotient, entry.party))
            .ok_or(ElectionError::EmptyAllocator)
    }

    /// Replace the root's quotient with `votes / (seats_won + 1)` and sift it
    /// down. `party` must be the party currently at the root.
    pub fn award_and_requote(&mut self, party: PartyId, votes: u64, seats_won: u64) -> Result<()> {
        let mut root = self.heap.peek_mut().ok_or(ElectionError::EmptyAllocator)?;
        debug_assert_eq!(root.party, party);
        root.quotient = Quotient::after(votes, seats_won);
        // Releasing the guard sifts the root down in O(log k).
        drop(root);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
