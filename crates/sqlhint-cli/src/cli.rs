//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// SQLHint - SQL/CQL completion engine
#[derive(Parser, Debug)]
#[command(name = "sqlhint")]
#[command(about = "Suggest completions for partially typed SQL or CQL", long_about = None)]
#[command(version)]
pub struct Args {
    /// SQL file to complete (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Query dialect
    #[arg(short, long, default_value = "pgsql", value_enum)]
    pub dialect: DialectArg,

    /// Schema metadata JSON file (tables and their columns)
    #[arg(short, long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Cursor line (1-based)
    #[arg(short, long, requires = "column", conflicts_with = "marker")]
    pub line: Option<u32>,

    /// Cursor column in characters (1-based)
    #[arg(long, requires = "line", conflicts_with = "marker")]
    pub column: Option<u32>,

    /// Cursor marker character, removed from the input before completing.
    /// A doubled marker (such as the `||` operator) is not treated as the cursor
    #[arg(short, long, default_value_t = '|')]
    pub marker: char,

    /// Which part of the buffer counts as the query being completed
    #[arg(long, default_value = "statement", value_enum)]
    pub scope: ScopeArg,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the dialect's keyword catalog instead of completing
    #[arg(long, conflicts_with = "language_definition")]
    pub catalog: bool,

    /// Print the editor language definition as JSON instead of completing
    #[arg(long)]
    pub language_definition: bool,

    /// Suppress the header and summary in table output
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Query dialect options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// PostgreSQL
    Pgsql,
    /// MySQL / MariaDB
    Mysql,
    /// Cassandra Query Language
    Cql,
}

impl From<DialectArg> for sqlhint_core::Dialect {
    fn from(d: DialectArg) -> Self {
        match d {
            DialectArg::Pgsql => sqlhint_core::Dialect::Pgsql,
            DialectArg::Mysql => sqlhint_core::Dialect::Mysql,
            DialectArg::Cql => sqlhint_core::Dialect::Cql,
        }
    }
}

/// Query scope options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// From the last `;` before the cursor
    Statement,
    /// The whole buffer up to the cursor
    Document,
    /// The cursor line only
    Line,
}

impl From<ScopeArg> for sqlhint_core::ScopeMode {
    fn from(s: ScopeArg) -> Self {
        match s {
            ScopeArg::Statement => sqlhint_core::ScopeMode::Statement,
            ScopeArg::Document => sqlhint_core::ScopeMode::Document,
            ScopeArg::Line => sqlhint_core::ScopeMode::Line,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_conversion() {
        let dialect: sqlhint_core::Dialect = DialectArg::Cql.into();
        assert_eq!(dialect, sqlhint_core::Dialect::Cql);
    }

    #[test]
    fn test_scope_conversion() {
        let scope: sqlhint_core::ScopeMode = ScopeArg::Line.into();
        assert_eq!(scope, sqlhint_core::ScopeMode::Line);
    }

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::parse_from(["sqlhint", "query.sql"]);
        assert!(args.file.is_some());
        assert_eq!(args.dialect, DialectArg::Pgsql);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.scope, ScopeArg::Statement);
        assert_eq!(args.marker, '|');
        assert!(args.line.is_none());
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::parse_from([
            "sqlhint",
            "-d",
            "mysql",
            "-f",
            "json",
            "-s",
            "schema.json",
            "-o",
            "out.json",
            "--line",
            "3",
            "--column",
            "7",
            "--scope",
            "document",
            "--quiet",
            "--compact",
            "query.sql",
        ]);
        assert_eq!(args.dialect, DialectArg::Mysql);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.schema.unwrap().to_str().unwrap(), "schema.json");
        assert_eq!(args.output.unwrap().to_str().unwrap(), "out.json");
        assert_eq!(args.line, Some(3));
        assert_eq!(args.column, Some(7));
        assert_eq!(args.scope, ScopeArg::Document);
        assert!(args.quiet);
        assert!(args.compact);
    }

    #[test]
    fn test_line_requires_column() {
        let result = Args::try_parse_from(["sqlhint", "--line", "2", "query.sql"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_position_conflicts_with_marker() {
        let result = Args::try_parse_from([
            "sqlhint", "--line", "1", "--column", "1", "--marker", "#",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_conflicts_with_language_definition() {
        let result = Args::try_parse_from(["sqlhint", "--catalog", "--language-definition"]);
        assert!(result.is_err());
    }
}
