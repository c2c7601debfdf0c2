use mealmix_shared::{ItemCount, Plan, tally};

pub const DEFAULT_OVERUSE_THRESHOLD: usize = 2;

/// Values assigned more than `threshold` times across the whole plan.
///
/// Runs on the finished plan, independently of the generation memory.
/// Ordered by descending count, ties in first-seen order.
pub fn find_overused(plan: &Plan, threshold: usize) -> Vec<ItemCount> {
    tally(plan.items())
        .into_iter()
        .filter(|entry| entry.count > threshold)
        .collect()
}
