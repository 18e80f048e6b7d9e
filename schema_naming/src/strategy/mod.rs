//! Naming strategies
//!
//! A naming strategy turns logical model metadata (class names, property
//! names, relation descriptors) into physical schema identifiers whenever the
//! model does not name them explicitly. Schema generation code talks to
//! strategies only through the [`NamingStrategy`] trait, so callers can swap
//! in their own implementation.

pub mod default;
pub mod digest;

// Re-export key types
pub use default::DefaultNamingStrategy;
pub use digest::{DigestAlgorithm, KeyDigest, DEFAULT_FOREIGN_KEY_DIGEST_LENGTH};

/// Derives physical identifiers from logical names
///
/// Every method is pure: the same arguments always produce the same name.
/// An override of `None` or `Some("")` means "derive the name".
pub trait NamingStrategy: Send + Sync {
    /// Table name for an entity class
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String;

    /// Column name for an entity property
    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String;

    /// Column name for a property of an embedded value
    fn embedded_column_name(
        &self,
        embedded_property_name: &str,
        column_property_name: &str,
        column_custom_name: Option<&str>,
    ) -> String;

    /// Name of a relation property
    fn relation_name(&self, property_name: &str) -> String;

    /// Index name for a set of columns, in column order
    fn index_name(&self, custom_name: Option<&str>, table_name: &str, columns: &[String]) -> String;

    /// Name of the join column on the inverse side of a relation
    fn join_column_inverse_side_name(&self, join_column_name: Option<&str>, property_name: &str) -> String;

    /// Junction table name for a many-to-many relation
    fn join_table_name(
        &self,
        first_table_name: &str,
        second_table_name: &str,
        first_property_name: &str,
        second_property_name: &str,
        first_column_name: &str,
        second_column_name: &str,
    ) -> String;

    /// Owner-side column name inside a junction table
    fn join_table_column_name(
        &self,
        table_name: &str,
        column_name: &str,
        second_table_name: &str,
        second_column_name: &str,
    ) -> String;

    /// Inverse-side column name inside a junction table
    fn join_table_inverse_column_name(
        &self,
        table_name: &str,
        column_name: &str,
        second_table_name: &str,
        second_column_name: &str,
    ) -> String;

    /// Closure table name for a tree entity
    fn closure_junction_table_name(&self, table_name: &str) -> String;

    /// Foreign key constraint name
    fn foreign_key_name(
        &self,
        table_name: &str,
        column_names: &[String],
        referenced_table_name: &str,
        referenced_column_names: &[String],
    ) -> String;

    /// Column in a child table referencing its parent in class-table inheritance
    fn class_table_inheritance_parent_column_name(
        &self,
        parent_table_name: &str,
        parent_table_id_property_name: &str,
    ) -> String;

    /// Apply a prefix to a table name
    fn prefix_table_name(&self, prefix: &str, original_table_name: &str) -> String;
}
