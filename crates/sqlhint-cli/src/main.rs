//! SQLHint CLI - SQL/CQL completion engine

use sqlhint_cli::cli;
use sqlhint_cli::input;
use sqlhint_cli::output;
use sqlhint_cli::schema;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sqlhint_core::{
    completion_items, for_dialect, language_definition, CompletionOptions, CompletionRequest,
    Dialect, Position,
};
use std::fs;
use std::process::ExitCode;

use cli::{Args, OutputFormat};
use input::CursorSpec;
use output::{format_catalog_table, format_json, format_table};

/// Unreadable input, invalid schema or a rejected request.
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sqlhint: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Engine events go to stderr, filtered by `RUST_LOG` (default `warn`).
#[cfg(feature = "tracing")]
fn init_tracing() {
    use is_terminal::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(args: Args) -> Result<()> {
    let dialect: Dialect = args.dialect.into();
    let use_colors = args.output.is_none();

    let rendered = if args.language_definition {
        format_json(&language_definition(dialect), args.compact)
    } else if args.catalog {
        let catalog = for_dialect(dialect);
        match args.format {
            OutputFormat::Json => format_json(catalog, args.compact),
            OutputFormat::Table => format_catalog_table(dialect, catalog, use_colors),
        }
    } else {
        run_completion(&args, dialect, use_colors)?
    };

    write_output(&args, &rendered)
}

fn run_completion(args: &Args, dialect: Dialect, use_colors: bool) -> Result<String> {
    let source = input::read_input(args.file.as_deref())?;
    let schema = args
        .schema
        .as_deref()
        .map(schema::load_schema)
        .transpose()?;

    let cursor = match (args.line, args.column) {
        (Some(line), Some(column)) => CursorSpec::At(Position::new(line, column)),
        _ => CursorSpec::Marker(args.marker),
    };
    let (sql, position) = input::place_cursor(&source.content, cursor)
        .with_context(|| format!("Failed to place cursor in {}", source.name))?;

    let request = CompletionRequest {
        sql,
        dialect,
        position,
        schema,
        options: CompletionOptions {
            scope: args.scope.into(),
        },
    };
    let result = completion_items(&request);
    if let Some(error) = &result.error {
        bail!("{}: {error}", source.name);
    }

    Ok(match args.format {
        OutputFormat::Json => format_json(&result, args.compact),
        OutputFormat::Table => format_table(&result, args.quiet, use_colors),
    })
}

fn write_output(args: &Args, rendered: &str) -> Result<()> {
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
