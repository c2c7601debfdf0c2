use std::collections::BTreeSet;

use mealmix_catalog::MealCatalog;
use mealmix_shared::{DayPlan, Error, Plan, PlanKind, Result, Slot};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::UsedMealMemory;

/// Random multi-day meal assignment that avoids values held in the
/// caller's [`UsedMealMemory`].
///
/// The memory is shared by all three slots: once drawn for lunch, a value
/// is excluded for dinner too until it is evicted.
pub struct PlanGenerator;

impl PlanGenerator {
    /// Draws one value of `pool` that is not in `memory` and records it.
    ///
    /// Returns `None` when every value of the pool is currently remembered.
    pub fn draw<R: Rng + ?Sized>(
        pool: &BTreeSet<String>,
        memory: &mut UsedMealMemory,
        rng: &mut R,
    ) -> Option<String> {
        let remaining = pool
            .iter()
            .filter(|value| !memory.contains(value))
            .collect::<Vec<_>>();

        let value = remaining.choose(rng).map(|value| value.to_string())?;
        memory.insert(value.clone(), rng);

        Some(value)
    }

    /// Generates `day_count` complete days, breakfast then lunch then dinner.
    ///
    /// Fails with [`Error::InsufficientOptions`] on the first slot whose pool
    /// is exhausted; values drawn before the failure stay in `memory`.
    pub fn generate_days<R: Rng + ?Sized>(
        catalog: &MealCatalog,
        day_count: usize,
        memory: &mut UsedMealMemory,
        rng: &mut R,
    ) -> Result<Vec<DayPlan>> {
        let pools = Slot::all()
            .iter()
            .map(|slot| (*slot, catalog.distinct_values(*slot)))
            .collect::<Vec<_>>();

        let mut days = Vec::with_capacity(day_count);

        for day in 0..day_count {
            let mut meals = DayPlan::default();

            for (slot, pool) in &pools {
                let Some(value) = Self::draw(pool, memory, rng) else {
                    tracing::warn!(%slot, day = day + 1, pool = pool.len(), "meal pool exhausted");
                    return Err(Error::InsufficientOptions { slot: *slot, day });
                };

                meals.set(*slot, value);
            }

            days.push(meals);
        }

        tracing::debug!(days = days.len(), remembered = memory.len(), "meal days generated");

        Ok(days)
    }

    /// Generates a labelled weekly or monthly plan.
    pub fn generate_plan<R: Rng + ?Sized>(
        catalog: &MealCatalog,
        kind: PlanKind,
        memory: &mut UsedMealMemory,
        rng: &mut R,
    ) -> Result<Plan> {
        let days = Self::generate_days(catalog, kind.day_count(), memory, rng)?;

        Ok(Plan::from_days(kind, days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::Eviction;

    fn pool(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_draw_exhausts_two_item_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut memory = UsedMealMemory::default();
        let pool = pool(&["a", "b"]);

        let first = PlanGenerator::draw(&pool, &mut memory, &mut rng).unwrap();
        let second = PlanGenerator::draw(&pool, &mut memory, &mut rng).unwrap();

        let mut drawn = vec![first, second];
        drawn.sort();
        assert_eq!(drawn, vec!["a", "b"]);

        assert!(PlanGenerator::draw(&pool, &mut memory, &mut rng).is_none());
    }

    #[test]
    fn test_draw_skips_remembered_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::default();
        memory.insert("a", &mut rng);
        memory.insert("c", &mut rng);

        let value = PlanGenerator::draw(&pool(&["a", "b", "c"]), &mut memory, &mut rng);

        assert_eq!(value.as_deref(), Some("b"));
        assert!(memory.contains("b"));
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsedMealMemory::new(3, Eviction::Oldest);

        assert!(PlanGenerator::draw(&BTreeSet::new(), &mut memory, &mut rng).is_none());
        assert!(memory.is_empty());
    }
}
