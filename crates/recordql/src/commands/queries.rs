use anyhow::Context;
use clap::Args;
use recordql_sdk::query;
use recordql_sdk::record_fields::{self, RecordGqlFields};
use recordql_sdk::MetadataCatalog;

use super::helpers::resolve_object;
use crate::output::Format;

/// Generate GraphQL documents.
#[derive(Debug, Args)]
pub struct QueryCmd {
    #[command(subcommand)]
    pub action: QueryAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum QueryAction {
    /// Paginated find-many query.
    ///
    /// Examples:
    ///   recordql query find-many person
    ///   recordql query find-many company --fields '{"id": true, "accountOwner": {"name": true}}'
    FindMany {
        /// Object singular name, plural name, or UUID.
        object: String,
        /// Requested-fields JSON tree narrowing the selection.
        #[arg(long)]
        fields: Option<String>,
    },
    /// Find-one query by record id.
    FindOne {
        /// Object singular name, plural name, or UUID.
        object: String,
        /// Requested-fields JSON tree narrowing the selection.
        #[arg(long)]
        fields: Option<String>,
    },
    /// Create-one mutation.
    CreateOne {
        /// Object singular name, plural name, or UUID.
        object: String,
        /// Requested-fields JSON tree narrowing the returned selection.
        #[arg(long)]
        fields: Option<String>,
    },
    /// Update-one mutation.
    UpdateOne {
        /// Object singular name, plural name, or UUID.
        object: String,
        /// Requested-fields JSON tree narrowing the returned selection.
        #[arg(long)]
        fields: Option<String>,
    },
    /// Delete-one mutation (returns only the deleted id).
    DeleteOne {
        /// Object singular name, plural name, or UUID.
        object: String,
    },
}

pub fn run(cmd: QueryCmd, catalog: &MetadataCatalog, format: Format) -> anyhow::Result<()> {
    let document = match cmd.action {
        QueryAction::FindMany { object, fields } => {
            let object = resolve_object(catalog, &object)?;
            let fields = parse_fields(fields.as_deref())?;
            query::find_many_query(catalog, object, fields.as_ref())?
        }
        QueryAction::FindOne { object, fields } => {
            let object = resolve_object(catalog, &object)?;
            let fields = parse_fields(fields.as_deref())?;
            query::find_one_query(catalog, object, fields.as_ref())?
        }
        QueryAction::CreateOne { object, fields } => {
            let object = resolve_object(catalog, &object)?;
            let fields = parse_fields(fields.as_deref())?;
            query::create_one_mutation(catalog, object, fields.as_ref())?
        }
        QueryAction::UpdateOne { object, fields } => {
            let object = resolve_object(catalog, &object)?;
            let fields = parse_fields(fields.as_deref())?;
            query::update_one_mutation(catalog, object, fields.as_ref())?
        }
        QueryAction::DeleteOne { object } => {
            let object = resolve_object(catalog, &object)?;
            query::delete_one_mutation(object)
        }
    };

    format.print_document(&document);
    Ok(())
}

fn parse_fields(raw: Option<&str>) -> anyhow::Result<Option<RecordGqlFields>> {
    match raw {
        None => Ok(None),
        Some(raw) => Ok(Some(
            record_fields::from_json_str(raw).context("Failed to parse --fields JSON")?,
        )),
    }
}
