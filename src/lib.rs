pub mod cli;
pub mod config;
pub mod export;
pub mod observability;

pub use config::Config;
