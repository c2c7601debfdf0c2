use mealmix_shared::{ItemCount, Plan, tally};
use serde::Serialize;

/// Items needed for one or more plans with how often each is served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    items: Vec<ItemCount>,
}

impl ShoppingList {
    /// Flattens every set slot of every day of `plans` and counts each value.
    ///
    /// Unset slots are skipped. Items are ordered most needed first; items
    /// with the same count keep the order in which they first appear.
    pub fn aggregate<'a, I>(plans: I) -> Self
    where
        I: IntoIterator<Item = &'a Plan>,
    {
        let items = tally(plans.into_iter().flat_map(|plan| plan.items()));

        tracing::debug!(items = items.len(), "shopping list aggregated");

        Self { items }
    }

    pub fn items(&self) -> &[ItemCount] {
        &self.items
    }

    pub fn count(&self, item: &str) -> usize {
        self.items
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.items.iter().map(|entry| entry.count).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
