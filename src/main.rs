// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog_search::{
    load_records, validate_records, Catalog, Language, RecordKind, SearchFilters, SearchIndex,
    SearchOptions, SearchRecord,
};

mod cli;
use cli::{display, filters_from_flags, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        display::failure(&format!("{:#}", err));
        std::process::exit(1);
    }
}

/// `-v` forces a level; otherwise `RUST_LOG`, defaulting to warnings only.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            catalog,
            records,
            lang,
            subject,
            level,
            section,
            limit,
            json,
        } => {
            let records = match (records, catalog) {
                (Some(path), _) => load_records(&path)
                    .with_context(|| format!("loading records from {}", path.display()))?,
                (None, Some(path)) => load_catalog(&path)?.records(lang),
                (None, None) => bail!(
                    "no input: pass --catalog or --records (or set CATALOG_SEARCH_CATALOG)"
                ),
            };
            let filters = filters_from_flags(subject, level, section);
            run_search(records, &query, &filters, limit, json)
        }
        Commands::Records {
            catalog,
            lang,
            kind,
        } => {
            let records: Vec<SearchRecord> = load_catalog(&catalog)?
                .records(lang)
                .into_iter()
                .filter(|r| kind.map_or(true, |k| r.kind == k))
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Commands::Check { catalog } => run_check(&catalog),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("loading catalog from {}", path.display()))
}

fn run_search(
    records: Vec<SearchRecord>,
    query: &str,
    filters: &SearchFilters,
    limit: usize,
    json: bool,
) -> Result<()> {
    let index = SearchIndex::build(records);
    let results = index.search_with(query, filters, &SearchOptions { limit });

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_results(query, &results);
    }
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let catalog = load_catalog(path)?;

    let mut counts: BTreeMap<RecordKind, BTreeMap<Language, usize>> = BTreeMap::new();
    let mut failures = Vec::new();
    for lang in Language::ALL {
        let records = catalog.records(lang);
        for record in &records {
            *counts
                .entry(record.kind)
                .or_default()
                .entry(lang)
                .or_default() += 1;
        }
        if let Err(err) = validate_records(&records) {
            failures.push(format!("[{}] {}", lang, err));
        }
    }

    display::print_counts(&counts, &Language::ALL);

    if failures.is_empty() {
        display::ok(&format!("{} builds valid records in every language", path.display()));
        return Ok(());
    }
    for failure in &failures {
        display::failure(failure);
    }
    Err(anyhow!(
        "{} language(s) produced invalid records",
        failures.len()
    ))
}
