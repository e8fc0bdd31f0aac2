use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{RegionId, StatRecord};

/// Observed value range of a statistics payload.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Min and max over the finite values; `None` when there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(match acc {
                None => Extent { min: v, max: v },
                Some(e) => Extent { min: e.min.min(v), max: e.max.max(v) },
            }))
    }

    #[inline] pub fn is_degenerate(&self) -> bool { self.min == self.max }

    #[inline] pub fn span(&self) -> f64 { self.max - self.min }
}

/// Read-only lookup from region id to its statistic record.
#[derive(Clone, Debug, Default)]
pub struct StatisticIndex {
    records: AHashMap<RegionId, StatRecord>,
}

impl StatisticIndex {
    /// Index `records` by id (later duplicates replace earlier ones) and
    /// compute the value extent over every input record.
    pub fn build(records: impl IntoIterator<Item = StatRecord>) -> (Self, Option<Extent>) {
        let mut index = AHashMap::new();
        let mut values = Vec::new();
        for record in records {
            values.push(record.value);
            index.insert(record.id.clone(), record);
        }

        let extent = Extent::of(values.iter().copied());
        debug!(records = values.len(), unique = index.len(), ?extent, "built statistic index");

        (Self { records: index }, extent)
    }

    #[inline] pub fn get(&self, id: &RegionId) -> Option<&StatRecord> { self.records.get(id) }

    #[inline] pub fn contains(&self, id: &RegionId) -> bool { self.records.contains_key(id) }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &StatRecord> { self.records.values() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<StatRecord> {
        vec![
            StatRecord::new(1, "One County", "AA", 10.0),
            StatRecord::new(2, "Two County", "AA", 90.0),
            StatRecord::new(3, "Three County", "BB", 42.5),
        ]
    }

    #[test]
    fn build_indexes_every_record() {
        let (index, extent) = StatisticIndex::build(sample());
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&RegionId::Num(3)).map(|r| r.value), Some(42.5));
        assert!(index.get(&RegionId::Num(4)).is_none());
        assert_eq!(extent, Some(Extent { min: 10.0, max: 90.0 }));
    }

    #[test]
    fn empty_payload_has_no_extent() {
        let (index, extent) = StatisticIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(extent, None);
    }

    #[test]
    fn last_duplicate_wins() {
        let mut records = sample();
        records.push(StatRecord::new(1, "One County (revised)", "AA", 12.0));
        let (index, _) = StatisticIndex::build(records);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&RegionId::Num(1)).unwrap().display_name, "One County (revised)");
    }

    #[test]
    fn extent_ignores_non_finite_values() {
        let extent = Extent::of([f64::NAN, 5.0, f64::INFINITY, 2.0]).unwrap();
        assert_eq!(extent, Extent { min: 2.0, max: 5.0 });
        assert!(!extent.is_degenerate());
        assert!(Extent::of([7.0]).unwrap().is_degenerate());
    }
}
