//! Command-line interface.
//!
//! Every subcommand writes JSON (or, for `filter`, the raw filter string) to
//! the supplied writer so that integration tests can capture output without
//! spawning a process.

use crate::{
    api::run_search,
    server::{self, AppState},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{io::Write, path::PathBuf, sync::Arc};
use truthserum_core::{config::Config, TopicEntry, TopicTable};
use truthserum_search::{MemoryStore, SearchRequest};

#[derive(Debug, Parser)]
#[command(name = "truthserum", about = "TruthSerum: topic-aware query expansion for hadith search")]
pub struct Cli {
    /// Log at debug level to stderr (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/truthserum/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the expanded term set for a query.
    Expand { query: String },
    /// Print the first topic a query matches, or null.
    Detect { query: String },
    /// Print the topic table.
    Topics,
    /// Print the PostgREST filter a query compiles to.
    Filter {
        query: String,
        /// Match the raw query only, without synonym clauses.
        #[arg(long)]
        exact: bool,
    },
    /// Search a local JSONL corpus.
    Search {
        query: String,
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        /// Match the raw query only, without synonym clauses.
        #[arg(long)]
        exact: bool,
    },
    /// Serve the HTTP API over a local JSONL corpus.
    Serve {
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,
        /// Listen address; defaults to `server.addr` from the config.
        #[arg(long)]
        addr: Option<String>,
    },
}

/// Load configuration, then run the selected subcommand against stdout.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unavailable, using defaults");
            Config::defaults()
        }),
    };
    let stdout = std::io::stdout();
    execute(cli.command, &config, &mut stdout.lock())
}

/// Run one subcommand, writing its output to `out`.
pub fn execute<W: Write>(command: Command, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let table = TopicTable::global();
    match command {
        Command::Expand { query } => write_json(out, table.expand(&query).terms()),
        Command::Detect { query } => write_json(out, &table.detect(&query)),
        Command::Topics => {
            let entries: Vec<TopicEntry> = table.iter().collect();
            write_json(out, &entries)
        }
        Command::Filter { query, exact } => {
            let request = build_request(&query, config, None, exact)?;
            writeln!(out, "{}", request.predicate().to_postgrest())?;
            Ok(())
        }
        Command::Search { query, corpus, limit, exact } => {
            let request = build_request(&query, config, limit, exact)?;
            let store = MemoryStore::from_jsonl(&corpus)
                .with_context(|| format!("loading corpus {}", corpus.display()))?;
            write_json(out, &run_search(&store, &request)?)
        }
        Command::Serve { corpus, addr } => {
            let store = MemoryStore::from_jsonl(&corpus)
                .with_context(|| format!("loading corpus {}", corpus.display()))?;
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            let state = Arc::new(AppState::new(Arc::new(store), config.search.clone()));
            tokio::runtime::Runtime::new()?.block_on(server::serve(&addr, state))
        }
    }
}

fn build_request(
    query: &str,
    config: &Config,
    limit: Option<usize>,
    exact: bool,
) -> anyhow::Result<SearchRequest> {
    SearchRequest::builder(query)
        .fields(config.search.fields.iter().copied())
        .limit(limit.unwrap_or(config.search.limit))
        .expand(config.search.expand && !exact)
        .min_query_len(config.search.min_query_len)
        .build()?
        .with_context(|| format!("query {query:?} is too short to search"))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
