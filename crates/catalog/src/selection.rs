use std::collections::BTreeMap;

use mealmix_shared::{MealRow, Slot};

/// Known slot values used as the key of a compatibility join.
///
/// Values are normalized with the same rules as the catalog column they
/// address, so `" Oats"` selects the `oats` breakfast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    values: BTreeMap<Slot, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakfast(value: impl AsRef<str>) -> Self {
        Self::new().with(Slot::Breakfast, value)
    }

    pub fn with(mut self, slot: Slot, value: impl AsRef<str>) -> Self {
        self.values.insert(slot, slot.normalize(value.as_ref()));
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn known(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.values.iter().map(|(slot, value)| (*slot, value.as_str()))
    }

    pub fn matches(&self, row: &MealRow) -> bool {
        self.known().all(|(slot, value)| row.get(slot) == value)
    }
}
