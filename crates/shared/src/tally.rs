use std::collections::HashMap;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
}

/// Counts occurrences of each item.
///
/// Ordered by descending count; equal counts keep the order in which the
/// items were first seen.
pub fn tally<'a, I>(items: I) -> Vec<ItemCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ItemCount> = Vec::new();

    for item in items {
        match positions.get(item) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(item, counts.len());
                counts.push(ItemCount {
                    item: item.to_owned(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
