use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use desk_core::{CollectionKind, DeskConfig, DeskError, FieldTable, FindParams, Record};

use crate::{Organization, Ticket, User};

/// Search users, organizations and tickets.
#[derive(Debug, Parser)]
#[command(name = "desk", version, about)]
pub struct Cli {
    /// Users snapshot (overrides DESK__DATA__USERS)
    #[arg(long, global = true, value_name = "PATH")]
    pub users: Option<PathBuf>,

    /// Organizations snapshot (overrides DESK__DATA__ORGANIZATIONS)
    #[arg(long, global = true, value_name = "PATH")]
    pub organizations: Option<PathBuf>,

    /// Tickets snapshot (overrides DESK__DATA__TICKETS)
    #[arg(long, global = true, value_name = "PATH")]
    pub tickets: Option<PathBuf>,

    /// Print failures as a JSON error object
    #[arg(long, global = true)]
    pub json_errors: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every record whose field equals the value, with joined names
    Search {
        collection: Collection,
        field: String,
        value: String,
    },
    /// List the searchable fields of a collection with their kinds
    Fields { collection: Collection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Users,
    Organizations,
    Tickets,
}

impl From<Collection> for CollectionKind {
    fn from(c: Collection) -> Self {
        match c {
            Collection::Users => CollectionKind::Users,
            Collection::Organizations => CollectionKind::Organizations,
            Collection::Tickets => CollectionKind::Tickets,
        }
    }
}

impl Cli {
    /// Defaults, then `DESK__*` environment, then flags.
    pub fn config(&self) -> DeskConfig {
        let mut config = DeskConfig::with_defaults();
        config.load_env("DESK__");

        let flags = [
            (CollectionKind::Users, &self.users),
            (CollectionKind::Organizations, &self.organizations),
            (CollectionKind::Tickets, &self.tickets),
        ];
        for (kind, path) in flags {
            if let Some(path) = path {
                config.set(kind.config_key(), path.to_string_lossy());
            }
        }
        config
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Fields { collection } => match CollectionKind::from(*collection) {
            CollectionKind::Users => write_fields(User::fields(), out)?,
            CollectionKind::Organizations => write_fields(Organization::fields(), out)?,
            CollectionKind::Tickets => write_fields(Ticket::fields(), out)?,
        },
        Command::Search {
            collection,
            field,
            value,
        } => {
            let desk = crate::build(cli.config())?;
            let kind = CollectionKind::from(*collection);
            let results = desk.app.find(kind.as_str(), &FindParams::new(field, value))?;
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One `name<TAB>kind` line per field; the primary key prints as `key`.
fn write_fields<R>(table: &FieldTable<R>, out: &mut impl Write) -> Result<()> {
    for name in table.names() {
        let kind = table.kind_of(name).map_or("key", |k| k.as_str());
        writeln!(out, "{name}\t{kind}")?;
    }
    Ok(())
}

/// Text for stderr. With `json`, a `DeskError` renders as its JSON payload.
pub fn render_error(err: &anyhow::Error, json: bool) -> String {
    match DeskError::from_anyhow(err) {
        Some(desk) if json => desk.to_json().to_string(),
        _ => format!("[desk][error] {err:#}"),
    }
}
