use std::collections::{HashSet, VecDeque};

use rand::Rng;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DEFAULT_MEMORY_CAPACITY: usize = 7;

/// Most recent values that [`Eviction::Arbitrary`] never removes: one
/// breakfast, lunch and dinner, so a day never repeats a meal.
pub const RECENT_GUARD: usize = 3;

/// Which value leaves the memory once it grows past its capacity.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Eviction {
    /// Removes a remembered value picked at random with the caller's rng,
    /// never one of the [`RECENT_GUARD`] newest.
    #[default]
    Arbitrary,
    /// Removes the value that has been in memory the longest.
    Oldest,
}

/// Bounded set of recently assigned meal values, shared by all slots.
///
/// A value held here is not drawn again until it is evicted. With the
/// default [`Eviction::Arbitrary`] this is a soft recency heuristic, not a
/// guarantee that the last `capacity` values are distinct. Storage is
/// ordered, so the same rng seed always evicts the same values.
#[derive(Debug, Clone)]
pub struct UsedMealMemory {
    values: HashSet<String>,
    insertion_order: VecDeque<String>,
    capacity: usize,
    eviction: Eviction,
}

impl UsedMealMemory {
    pub fn new(capacity: usize, eviction: Eviction) -> Self {
        Self {
            values: HashSet::new(),
            insertion_order: VecDeque::new(),
            capacity,
            eviction,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn eviction(&self) -> Eviction {
        self.eviction
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Remembered values, oldest first.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.insertion_order.iter().map(String::as_str)
    }

    /// Records `value` as used and returns the evicted value, if any.
    pub fn insert<R: Rng + ?Sized>(
        &mut self,
        value: impl Into<String>,
        rng: &mut R,
    ) -> Option<String> {
        let value = value.into();
        if self.values.insert(value.clone()) {
            self.insertion_order.push_back(value);
        }

        if self.insertion_order.len() <= self.capacity {
            return None;
        }

        let index = match self.eviction {
            Eviction::Arbitrary => {
                let len = self.insertion_order.len();
                let candidates = len - RECENT_GUARD.min(len - 1);
                rng.random_range(0..candidates)
            }
            Eviction::Oldest => 0,
        };

        let evicted = self.insertion_order.remove(index)?;
        self.values.remove(&evicted);

        tracing::trace!(evicted = %evicted, eviction = %self.eviction, "meal evicted from memory");

        Some(evicted)
    }
}

impl Default for UsedMealMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY, Eviction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_memory() {
        let memory = UsedMealMemory::default();
        assert_eq!(memory.capacity(), 7);
        assert_eq!(memory.eviction(), Eviction::Arbitrary);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_insert_and_contains() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::default();
        assert_eq!(memory.insert("oats", &mut rng), None);
        assert_eq!(memory.insert("soup", &mut rng), None);

        assert_eq!(memory.len(), 2);
        assert!(memory.contains("oats"));
        assert!(memory.contains("soup"));
        assert!(!memory.contains("rice"));
        assert_eq!(memory.values().collect::<Vec<_>>(), vec!["oats", "soup"]);
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::default();
        memory.insert("oats", &mut rng);
        memory.insert("oats", &mut rng);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_arbitrary_eviction_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut memory = UsedMealMemory::default();
        let mut seen = Vec::new();

        for i in 0..50 {
            let value = format!("meal {i}");
            seen.push(value.clone());
            if let Some(evicted) = memory.insert(value, &mut rng) {
                assert!(seen.contains(&evicted));
                assert!(!memory.contains(&evicted));
            }
            assert!(memory.len() <= 7);
        }

        assert_eq!(memory.len(), 7);
    }

    #[test]
    fn test_arbitrary_eviction_spares_recent_values() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut memory = UsedMealMemory::default();
            let mut evicted = Vec::new();

            for i in 0usize..40 {
                let value = format!("meal {i}");
                if let Some(old) = memory.insert(value, &mut rng) {
                    evicted.push(old);
                }

                for recent in i.saturating_sub(RECENT_GUARD - 1)..=i {
                    assert!(memory.contains(&format!("meal {recent}")));
                }
            }

            assert_eq!(evicted.len(), 33);
        }
    }

    #[test]
    fn test_arbitrary_eviction_follows_seed() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut memory = UsedMealMemory::default();
            (0..30)
                .filter_map(|i| memory.insert(format!("meal {i}"), &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_oldest_eviction_is_fifo() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::new(3, Eviction::Oldest);
        memory.insert("a", &mut rng);
        memory.insert("b", &mut rng);
        memory.insert("c", &mut rng);

        assert_eq!(memory.insert("d", &mut rng), Some("a".to_owned()));
        assert_eq!(memory.insert("e", &mut rng), Some("b".to_owned()));

        assert_eq!(memory.values().collect::<Vec<_>>(), vec!["c", "d", "e"]);
    }

    #[test]
    fn test_single_slot_memory_forgets_previous_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::new(1, Eviction::Arbitrary);
        memory.insert("a", &mut rng);

        assert_eq!(memory.insert("b", &mut rng), Some("a".to_owned()));
        assert!(memory.contains("b"));
    }

    #[test]
    fn test_eviction_parse() {
        assert_eq!("oldest".parse::<Eviction>().unwrap(), Eviction::Oldest);
        assert_eq!("Arbitrary".parse::<Eviction>().unwrap(), Eviction::Arbitrary);
    }
}
