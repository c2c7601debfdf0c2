use std::collections::BTreeSet;

use mealmix_shared::{Error, MealRow, RawRow, Result, Slot};

use crate::Selection;

/// Read-only, normalized view of the meal table.
///
/// Distinct values and compatibility joins are computed from the rows on
/// each call; tables are a few hundred rows at most.
#[derive(Clone, Debug)]
pub struct MealCatalog {
    rows: Vec<MealRow>,
}

impl MealCatalog {
    /// Builds the catalog, dropping rows with a missing or blank slot.
    pub fn build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut dropped = 0usize;
        let rows = rows
            .into_iter()
            .filter_map(|raw| {
                let row = raw.normalize();
                if row.is_none() {
                    dropped += 1;
                }
                row
            })
            .collect::<Vec<_>>();

        if rows.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        tracing::debug!(rows = rows.len(), dropped, "meal catalog built");

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[MealRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct values of `slot`, ascending.
    pub fn distinct_values(&self, slot: Slot) -> BTreeSet<String> {
        self.rows
            .iter()
            .map(|row| row.get(slot).to_owned())
            .collect()
    }

    /// Distinct `target` values among rows matching every known slot of
    /// `selection`. An empty set means no compatible option.
    pub fn compatible_options(
        &self,
        selection: &Selection,
        target: Slot,
    ) -> Result<BTreeSet<String>> {
        if selection.is_empty() || selection.len() >= Slot::all().len() {
            mealmix_shared::bail!(
                "select one or two known meals, got {}",
                selection.len()
            );
        }

        if selection.get(target).is_some() {
            mealmix_shared::bail!("{target} is already selected");
        }

        Ok(self
            .rows
            .iter()
            .filter(|row| selection.matches(row))
            .map(|row| row.get(target).to_owned())
            .collect())
    }

    /// Like [`MealCatalog::compatible_options`], but reports an empty result
    /// as [`Error::NoCompatibleOption`].
    pub fn require_compatible(
        &self,
        selection: &Selection,
        target: Slot,
    ) -> Result<BTreeSet<String>> {
        let options = self.compatible_options(selection, target)?;
        if options.is_empty() {
            return Err(Error::NoCompatibleOption(target));
        }

        Ok(options)
    }

    /// Case-insensitive substring search over the distinct values of `slot`.
    pub fn search(&self, slot: Slot, query: &str) -> BTreeSet<String> {
        let query = query.trim().to_lowercase();

        self.distinct_values(slot)
            .into_iter()
            .filter(|value| query.is_empty() || value.to_lowercase().contains(&query))
            .collect()
    }

    /// First row, in source order, served with `breakfast`.
    pub fn recommend(&self, breakfast: &str) -> Option<&MealRow> {
        let breakfast = Slot::Breakfast.normalize(breakfast);

        self.rows.iter().find(|row| row.breakfast == breakfast)
    }
}
