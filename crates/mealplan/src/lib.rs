mod generate;
mod memory;
mod overuse;

pub use generate::*;
pub use memory::*;
pub use overuse::*;
