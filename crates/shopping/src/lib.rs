mod aggregation;

pub use aggregation::*;
