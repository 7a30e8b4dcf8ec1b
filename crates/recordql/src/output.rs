use serde::Serialize;
use std::io::IsTerminal;
use tabled::{Table, Tabled};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Human,
    Json,
}

impl Format {
    /// Pick the format: the explicit flag wins, otherwise human on a
    /// terminal and JSON when piped.
    pub fn resolve(flag: Option<Format>) -> Format {
        flag.unwrap_or_else(|| {
            if std::io::stdout().is_terminal() {
                Format::Human
            } else {
                Format::Json
            }
        })
    }

    /// Print catalog listing rows: a table for humans, a JSON array otherwise.
    pub fn print_rows<T: Serialize + Tabled>(self, rows: &[T]) {
        match self {
            Format::Json => println!("{}", serde_json::to_string_pretty(rows).unwrap()),
            Format::Human if rows.is_empty() => println!("No results."),
            Format::Human => println!("{}", Table::new(rows)),
        }
    }

    /// Print a generated GraphQL document: raw text for humans, wrapped in
    /// a `{"query": ...}` object otherwise so it can be posted as-is.
    pub fn print_document(self, document: &str) {
        match self {
            Format::Human => println!("{}", document),
            Format::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "query": document })).unwrap()
            ),
        }
    }
}
