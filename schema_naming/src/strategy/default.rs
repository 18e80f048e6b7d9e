//! The naming strategy used when the caller does not provide one

use crate::config::NamingConfig;
use crate::strategy::digest::{DigestAlgorithm, KeyDigest, DEFAULT_FOREIGN_KEY_DIGEST_LENGTH};
use crate::strategy::NamingStrategy;
use crate::utils::naming::{camel_join, non_empty, snake_case, snake_join, truncate_chars};

/// Prefix of every generated index name
pub const INDEX_PREFIX: &str = "ind_";

/// Prefix of every generated foreign key name
pub const FOREIGN_KEY_PREFIX: &str = "fk_";

/// Suffix of closure tables
pub const CLOSURE_SUFFIX: &str = "_closure";

/// Naming strategy that is used by default
///
/// Tables are snake case, columns keep their property name and generated
/// index/foreign key names embed a digest of the participating names.
#[derive(Debug, Clone)]
pub struct DefaultNamingStrategy<D = DigestAlgorithm> {
    digest: D,
    foreign_key_digest_length: usize,
}

impl DefaultNamingStrategy {
    /// Create a strategy using SHA-1 digests
    pub fn new() -> Self {
        Self::with_digest(DigestAlgorithm::Sha1)
    }

    /// Create a strategy from configuration
    pub fn from_config(config: &NamingConfig) -> Self {
        Self::with_digest(config.digest).foreign_key_digest_length(config.foreign_key_digest_length)
    }
}

impl Default for DefaultNamingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: KeyDigest> DefaultNamingStrategy<D> {
    /// Create a strategy with a custom digest
    pub fn with_digest(digest: D) -> Self {
        Self {
            digest,
            foreign_key_digest_length: DEFAULT_FOREIGN_KEY_DIGEST_LENGTH,
        }
    }

    /// Set how many digest characters a foreign key name keeps
    pub fn foreign_key_digest_length(mut self, length: usize) -> Self {
        self.foreign_key_digest_length = length;
        self
    }

    /// The digest used for generated names
    pub fn digest(&self) -> &D {
        &self.digest
    }

    fn disambiguated_join_column(
        table_name: &str,
        column_name: &str,
        second_table_name: &str,
        second_column_name: &str,
        suffix: &str,
    ) -> String {
        let column1 = camel_join(&[table_name, column_name]);
        let column2 = camel_join(&[second_table_name, second_column_name]);

        if column1 == column2 {
            format!("{}{}", column1, suffix)
        } else {
            column1
        }
    }
}

impl<D: KeyDigest> NamingStrategy for DefaultNamingStrategy<D> {
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String {
        match non_empty(custom_name) {
            Some(name) => name.to_string(),
            None => snake_case(class_name),
        }
    }

    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String {
        non_empty(custom_name).unwrap_or(property_name).to_string()
    }

    fn embedded_column_name(
        &self,
        embedded_property_name: &str,
        column_property_name: &str,
        column_custom_name: Option<&str>,
    ) -> String {
        let column = non_empty(column_custom_name).unwrap_or(column_property_name);
        camel_join(&[embedded_property_name, column])
    }

    fn relation_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }

    fn index_name(&self, custom_name: Option<&str>, table_name: &str, columns: &[String]) -> String {
        if let Some(name) = non_empty(custom_name) {
            return name.to_string();
        }

        let key = format!("{}{}_{}", INDEX_PREFIX, table_name, columns.join("_"));
        tracing::trace!(key = %key, "Deriving index name");

        format!("{}{}", INDEX_PREFIX, self.digest.hex_digest(&key))
    }

    fn join_column_inverse_side_name(&self, join_column_name: Option<&str>, property_name: &str) -> String {
        non_empty(join_column_name).unwrap_or(property_name).to_string()
    }

    // Only the first side's property and the second side's column take part.
    fn join_table_name(
        &self,
        first_table_name: &str,
        second_table_name: &str,
        first_property_name: &str,
        _second_property_name: &str,
        _first_column_name: &str,
        second_column_name: &str,
    ) -> String {
        snake_join(&[first_table_name, first_property_name, second_table_name, second_column_name])
    }

    fn join_table_column_name(
        &self,
        table_name: &str,
        column_name: &str,
        second_table_name: &str,
        second_column_name: &str,
    ) -> String {
        Self::disambiguated_join_column(table_name, column_name, second_table_name, second_column_name, "_1")
    }

    fn join_table_inverse_column_name(
        &self,
        table_name: &str,
        column_name: &str,
        second_table_name: &str,
        second_column_name: &str,
    ) -> String {
        Self::disambiguated_join_column(table_name, column_name, second_table_name, second_column_name, "_2")
    }

    fn closure_junction_table_name(&self, table_name: &str) -> String {
        format!("{}{}", table_name, CLOSURE_SUFFIX)
    }

    fn foreign_key_name(
        &self,
        table_name: &str,
        column_names: &[String],
        referenced_table_name: &str,
        referenced_column_names: &[String],
    ) -> String {
        let key = format!(
            "{}_{}_{}_{}",
            table_name,
            column_names.join("_"),
            referenced_table_name,
            referenced_column_names.join("_")
        );
        tracing::trace!(key = %key, "Deriving foreign key name");

        let digest = self.digest.hex_digest(&key);
        format!("{}{}", FOREIGN_KEY_PREFIX, truncate_chars(&digest, self.foreign_key_digest_length))
    }

    fn class_table_inheritance_parent_column_name(
        &self,
        parent_table_name: &str,
        parent_table_id_property_name: &str,
    ) -> String {
        camel_join(&[parent_table_name, parent_table_id_property_name])
    }

    fn prefix_table_name(&self, prefix: &str, original_table_name: &str) -> String {
        format!("{}{}", prefix, original_table_name)
    }
}
