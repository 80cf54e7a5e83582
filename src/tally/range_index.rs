use crate::error::{ElectionError, Result};
use crate::model::{DistrictId, TableId};
use std::ops::Range;

/// Maps polling tables to districts through contiguous half-open ranges.
///
/// District `i` owns `[bounds[i - 1], bounds[i])`, with district 0 starting
/// at table 0.
#[derive(Debug, Clone)]
pub struct RangeIndex {
    upper_bounds: Vec<TableId>,
}

impl RangeIndex {
    pub fn from_upper_bounds(upper_bounds: Vec<TableId>) -> Result<Self> {
        let mut previous = 0;
        for (district, &bound) in upper_bounds.iter().enumerate() {
            if bound <= previous {
                return Err(ElectionError::UnsortedRanges { district, bound });
            }
            previous = bound;
        }

        Ok(Self { upper_bounds })
    }

    /// Binary search for the district owning `table`. O(log D).
    pub fn district_of(&self, table: TableId) -> Result<DistrictId> {
        // First range whose exclusive upper bound lies past the table.
        let district = self.upper_bounds.partition_point(|&upper| upper <= table);
        if district == self.upper_bounds.len() {
            return Err(ElectionError::OutOfRange { table });
        }
        Ok(district)
    }

    pub fn range_of(&self, district: DistrictId) -> Option<Range<TableId>> {
        let end = *self.upper_bounds.get(district)?;
        let start = match district {
            0 => 0,
            _ => self.upper_bounds[district - 1],
        };
        Some(start..end)
    }

    /// Number of valid table ids, i.e. the exclusive upper bound of the last range.
    pub fn table_count(&self) -> TableId {
        self.upper_bounds.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.upper_bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper_bounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> RangeIndex {
        RangeIndex::from_upper_bounds(vec![10, 25, 26, 40]).unwrap()
    }

    #[test]
    fn test_bounds_are_half_open() {
        let index = index();
        assert_eq!(index.district_of(0).unwrap(), 0);
        assert_eq!(index.district_of(9).unwrap(), 0);
        assert_eq!(index.district_of(10).unwrap(), 1);
        assert_eq!(index.district_of(24).unwrap(), 1);
        assert_eq!(index.district_of(25).unwrap(), 2);
        assert_eq!(index.district_of(26).unwrap(), 3);
        assert_eq!(index.district_of(39).unwrap(), 3);
    }

    #[test]
    fn test_out_of_range() {
        let index = index();
        assert!(matches!(
            index.district_of(40),
            Err(ElectionError::OutOfRange { table: 40 })
        ));
        assert!(matches!(
            index.district_of(u32::MAX),
            Err(ElectionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_every_table_has_one_district() {
        let index = index();
        for table in 0..index.table_count() {
            let district = index.district_of(table).unwrap();
            assert!(index.range_of(district).unwrap().contains(&table));
        }
    }

    #[test]
    fn test_range_of() {
        let index = index();
        assert_eq!(index.range_of(0), Some(0..10));
        assert_eq!(index.range_of(2), Some(25..26));
        assert_eq!(index.range_of(4), None);
        assert_eq!(index.table_count(), 40);
    }

    #[test]
    fn test_rejects_unsorted_bounds() {
        assert!(matches!(
            RangeIndex::from_upper_bounds(vec![10, 10]),
            Err(ElectionError::UnsortedRanges { district: 1, bound: 10 })
        ));
        assert!(matches!(
            RangeIndex::from_upper_bounds(vec![0]),
            Err(ElectionError::UnsortedRanges { district: 0, .. })
        ));
    }

    #[test]
    fn test_empty_index_resolves_nothing() {
        let index = RangeIndex::from_upper_bounds(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.district_of(0).is_err());
    }
}
