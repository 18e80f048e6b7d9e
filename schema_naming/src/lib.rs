//! schema_naming: derives physical schema identifiers from logical model metadata
//!
//! When an entity, column, index or key is not named explicitly, the schema
//! generation layer asks a [`NamingStrategy`] for a name. [`DefaultNamingStrategy`]
//! is the strategy used when callers do not supply their own.
//!
//! ```
//! use schema_naming::{DefaultNamingStrategy, NamingStrategy};
//!
//! let naming = DefaultNamingStrategy::new();
//! assert_eq!(naming.table_name("UserProfile", None), "user_profile");
//! assert_eq!(naming.closure_junction_table_name("category"), "category_closure");
//! ```

pub mod config;
pub mod error;
pub mod strategy;
pub mod utils;

// Re-export main types for easier access
pub use config::{Config, LoggingConfig, NamingConfig};
pub use error::{Error, Result};
pub use strategy::{DefaultNamingStrategy, DigestAlgorithm, KeyDigest, NamingStrategy};

/// Build the strategy described by a configuration file
pub fn init(config_path: &str) -> Result<DefaultNamingStrategy> {
    let config = config::load_from_file(config_path)?;
    Ok(DefaultNamingStrategy::from_config(&config.naming))
}
