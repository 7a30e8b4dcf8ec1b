mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordql — generate CRM GraphQL queries from object metadata
#[derive(Debug, Parser)]
#[command(name = "recordql", version, about)]
struct Cli {
    /// Path to the object-metadata catalog JSON (overrides $RECORDQL_CATALOG).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format. Auto-detected if not specified (human for terminal, json for pipe).
    #[arg(long, global = true)]
    format: Option<output::Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the object types in the catalog.
    Objects,
    /// List the fields of one object type.
    Fields {
        /// Object singular name, plural name, or UUID.
        object: String,
    },
    /// Generate GraphQL documents.
    Query(commands::queries::QueryCmd),
}

fn main() {
    let cli = Cli::parse();
    let format = output::Format::resolve(cli.format);

    let catalog = match commands::helpers::load_catalog(cli.catalog.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Objects => commands::objects::run(&catalog, format),
        Command::Fields { object } => commands::objects::run_fields(&catalog, &object, format),
        Command::Query(cmd) => commands::queries::run(cmd, &catalog, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
