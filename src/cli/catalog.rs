use std::fmt::Write as _;

use anyhow::Result;
use mealmix_catalog::{MealCatalog, Selection};
use mealmix_shared::{Error, Slot};

pub fn slots(catalog: &MealCatalog, slot: Slot) -> String {
    bullet_list(catalog.distinct_values(slot))
}

pub fn search(catalog: &MealCatalog, slot: Slot, query: &str) -> String {
    let found = catalog.search(slot, query);
    if found.is_empty() {
        return format!("No {slot} matches '{}'\n", query.trim());
    }

    bullet_list(found)
}

pub fn recommend(catalog: &MealCatalog, breakfast: &str) -> String {
    match catalog.recommend(breakfast) {
        Some(row) => format!(
            "Selected breakfast: {}\nLunch: {}\nDinner: {}\n",
            row.breakfast, row.lunch, row.dinner
        ),
        None => format!(
            "Warning: no meals found for breakfast '{}'\n",
            Slot::Breakfast.normalize(breakfast)
        ),
    }
}

/// Lists `target` values compatible with `selection`. An empty join is a
/// warning, not a failure.
pub fn options(catalog: &MealCatalog, selection: &Selection, target: Slot) -> Result<String> {
    match catalog.require_compatible(selection, target) {
        Ok(found) => Ok(bullet_list(found)),
        Err(e @ Error::NoCompatibleOption(_)) => {
            tracing::warn!(%target, "{e}");
            Ok(format!("Warning: {e}, revise your selection\n"))
        }
        Err(e) => Err(e.into()),
    }
}

fn bullet_list(values: impl IntoIterator<Item = String>) -> String {
    values.into_iter().fold(String::new(), |mut out, value| {
        let _ = writeln!(out, "- {value}");
        out
    })
}
