use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use schema_naming::config::{self, Config};
use schema_naming::utils::logging::init_logging;
use schema_naming::{DefaultNamingStrategy, NamingStrategy};

#[derive(Parser)]
#[command(
    name = "schema_naming",
    about = "Derive physical schema identifiers from logical model names"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Table name for an entity class (applies the configured table prefix)
    Table {
        class_name: String,
        #[arg(long)]
        custom: Option<String>,
    },
    /// Column name for a property
    Column {
        property_name: String,
        #[arg(long)]
        custom: Option<String>,
    },
    /// Column name for a property of an embedded value
    EmbeddedColumn {
        embedded_property_name: String,
        column_property_name: String,
        #[arg(long)]
        custom: Option<String>,
    },
    /// Name of a relation property
    Relation { property_name: String },
    /// Index name for comma-separated columns (entries are used verbatim)
    Index {
        table_name: String,
        columns: String,
        #[arg(long)]
        custom: Option<String>,
    },
    /// Join column name on the inverse side of a relation
    JoinColumnInverseSide {
        property_name: String,
        #[arg(long)]
        join_column: Option<String>,
    },
    /// Junction table name for a many-to-many relation
    JoinTable {
        first_table_name: String,
        second_table_name: String,
        first_property_name: String,
        second_property_name: String,
        first_column_name: String,
        second_column_name: String,
    },
    /// Owner-side column of a junction table
    JoinTableColumn {
        table_name: String,
        column_name: String,
        second_table_name: String,
        second_column_name: String,
    },
    /// Inverse-side column of a junction table
    JoinTableInverseColumn {
        table_name: String,
        column_name: String,
        second_table_name: String,
        second_column_name: String,
    },
    /// Closure table name for a tree entity
    ClosureTable { table_name: String },
    /// Foreign key name for comma-separated column lists (entries are used verbatim)
    ForeignKey {
        table_name: String,
        column_names: String,
        referenced_table_name: String,
        referenced_column_names: String,
    },
    /// Parent reference column for class-table inheritance
    InheritanceColumn {
        parent_table_name: String,
        parent_table_id_property_name: String,
    },
    /// Prefix a table name
    PrefixTable { prefix: String, table_name: String },
}

#[derive(Serialize)]
struct NameOutput<'a> {
    kind: &'a str,
    name: String,
}

/// Split a comma-separated column list, keeping order and every entry verbatim
fn split_columns(columns: &str) -> Vec<String> {
    columns.split(',').map(str::to_string).collect()
}

fn derive_name(command: &Commands, naming: &dyn NamingStrategy, config: &Config) -> (&'static str, String) {
    match command {
        Commands::Table { class_name, custom } => {
            let name = naming.table_name(class_name, custom.as_deref());
            let name = match &config.naming.table_prefix {
                Some(prefix) => naming.prefix_table_name(prefix, &name),
                None => name,
            };
            ("table", name)
        }
        Commands::Column { property_name, custom } => {
            ("column", naming.column_name(property_name, custom.as_deref()))
        }
        Commands::EmbeddedColumn {
            embedded_property_name,
            column_property_name,
            custom,
        } => (
            "embedded_column",
            naming.embedded_column_name(embedded_property_name, column_property_name, custom.as_deref()),
        ),
        Commands::Relation { property_name } => ("relation", naming.relation_name(property_name)),
        Commands::Index {
            table_name,
            columns,
            custom,
        } => (
            "index",
            naming.index_name(custom.as_deref(), table_name, &split_columns(columns)),
        ),
        Commands::JoinColumnInverseSide {
            property_name,
            join_column,
        } => (
            "join_column_inverse_side",
            naming.join_column_inverse_side_name(join_column.as_deref(), property_name),
        ),
        Commands::JoinTable {
            first_table_name,
            second_table_name,
            first_property_name,
            second_property_name,
            first_column_name,
            second_column_name,
        } => (
            "join_table",
            naming.join_table_name(
                first_table_name,
                second_table_name,
                first_property_name,
                second_property_name,
                first_column_name,
                second_column_name,
            ),
        ),
        Commands::JoinTableColumn {
            table_name,
            column_name,
            second_table_name,
            second_column_name,
        } => (
            "join_table_column",
            naming.join_table_column_name(table_name, column_name, second_table_name, second_column_name),
        ),
        Commands::JoinTableInverseColumn {
            table_name,
            column_name,
            second_table_name,
            second_column_name,
        } => (
            "join_table_inverse_column",
            naming.join_table_inverse_column_name(table_name, column_name, second_table_name, second_column_name),
        ),
        Commands::ClosureTable { table_name } => {
            ("closure_table", naming.closure_junction_table_name(table_name))
        }
        Commands::ForeignKey {
            table_name,
            column_names,
            referenced_table_name,
            referenced_column_names,
        } => (
            "foreign_key",
            naming.foreign_key_name(
                table_name,
                &split_columns(column_names),
                referenced_table_name,
                &split_columns(referenced_column_names),
            ),
        ),
        Commands::InheritanceColumn {
            parent_table_name,
            parent_table_id_property_name,
        } => (
            "inheritance_column",
            naming.class_table_inheritance_parent_column_name(parent_table_name, parent_table_id_property_name),
        ),
        Commands::PrefixTable { prefix, table_name } => {
            ("prefix_table", naming.prefix_table_name(prefix, table_name))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => Config::default(),
    };
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let naming = DefaultNamingStrategy::from_config(&config.naming);
    let (kind, name) = derive_name(&cli.command, &naming, &config);
    tracing::debug!(kind, name = %name, "Derived name");

    if cli.json {
        println!("{}", serde_json::to_string(&NameOutput { kind, name })?);
    } else {
        println!("{}", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str], config: &Config) -> (&'static str, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        derive_name(&cli.command, &DefaultNamingStrategy::from_config(&config.naming), config)
    }

    #[test]
    fn test_table_applies_configured_prefix() {
        let mut config = Config::default();
        assert_eq!(run(&["schema_naming", "table", "UserProfile"], &config).1, "user_profile");

        config.naming.table_prefix = Some("app_".to_string());
        assert_eq!(run(&["schema_naming", "table", "UserProfile"], &config).1, "app_user_profile");
        assert_eq!(
            run(&["schema_naming", "table", "UserProfile", "--custom", "profiles"], &config).1,
            "app_profiles"
        );
    }

    #[test]
    fn test_comma_separated_columns() {
        let config = Config::default();
        let (kind, name) = run(&["schema_naming", "index", "users", "first_name,last_name"], &config);

        let expected = DefaultNamingStrategy::new().index_name(
            None,
            "users",
            &["first_name".to_string(), "last_name".to_string()],
        );
        assert_eq!(kind, "index");
        assert_eq!(name, expected);
    }

    #[test]
    fn test_foreign_key_subcommand() {
        let config = Config::default();
        let (kind, name) = run(&["schema_naming", "foreign-key", "post", "author_id", "user", "id"], &config);

        assert_eq!(kind, "foreign_key");
        assert!(name.starts_with("fk_"));
        assert_eq!(name.len(), 30);
    }

    #[test]
    fn test_split_columns_keeps_entries_verbatim() {
        assert_eq!(split_columns("b, a,,c"), vec!["b", " a", "", "c"]);
        assert_eq!(split_columns("email"), vec!["email"]);
    }

    #[test]
    fn test_cli_columns_match_library_key() {
        let config = Config::default();
        let naming = DefaultNamingStrategy::new();
        let columns = vec!["a".to_string(), String::new(), "b".to_string()];

        let (_, index) = run(&["schema_naming", "index", "users", "a,,b"], &config);
        assert_eq!(index, naming.index_name(None, "users", &columns));

        let (_, foreign_key) = run(&["schema_naming", "foreign-key", "t", "a,,b", "t2", "id"], &config);
        assert_eq!(foreign_key, naming.foreign_key_name("t", &columns, "t2", &["id".to_string()]));
    }

    #[test]
    fn test_json_output_shape() {
        let output = NameOutput {
            kind: "closure_table",
            name: "tree_closure".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"kind":"closure_table","name":"tree_closure"}"#
        );
    }
}
