mod catalog;
mod selection;

pub use catalog::*;
pub use selection::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod source;

        pub use source::*;
    }
}
