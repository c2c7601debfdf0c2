mod error;
mod tally;
pub mod meal;
pub mod plan;

pub use error::*;
pub use meal::*;
pub use plan::*;
pub use tally::*;
