mod catalog;
mod plan;

pub use catalog::*;
pub use plan::*;

use anyhow::Result;
use mealmix_catalog::MealCatalog;

use crate::config::Config;

/// Loads the meal catalog named by the configuration.
///
/// Any failure here is fatal for the process.
pub fn load_catalog(config: &Config) -> Result<MealCatalog> {
    match mealmix_catalog::load(&config.source.path, &config.source.columns) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            tracing::error!(path = %config.source.path, "{e}");
            Err(e.into())
        }
    }
}
