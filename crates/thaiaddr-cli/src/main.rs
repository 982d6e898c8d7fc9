//! thaiaddr-cli — Command-line interface for thaiaddr-core
//!
//! Inspect the postal reference table from a terminal, or replay a script of
//! form inputs through the resolution engine and watch the cascade.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ thaiaddr-cli stats
//!
//! - List provinces / districts / subdistricts (English names)
//!   $ thaiaddr-cli --locale en provinces
//!   $ thaiaddr-cli districts 10
//!   $ thaiaddr-cli subdistricts 1004
//!
//! - Everything a postal code covers, and typing suggestions
//!   $ thaiaddr-cli lookup 10500
//!   $ thaiaddr-cli suggest 105
//!
//! - Replay a session, printing one JSON event per line
//!   $ thaiaddr-cli -v replay session.txt
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample table bundled with `thaiaddr-core`
//! and caches a binary version next to it. Use `--input <path>` (or
//! `THAIADDR_DATA`) to point at a full dataset.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use thaiaddr_cli::script::{self, Step};
use thaiaddr_core::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let input_path = args
        .input
        .clone()
        .unwrap_or_else(ReferenceTable::default_data_path);
    let table = ReferenceTable::load_from_path(&input_path)
        .with_context(|| format!("loading reference table from {}", input_path.display()))?;
    info!(
        path = %input_path.display(),
        records = table.len(),
        "reference table ready"
    );
    let table = Arc::new(table);
    let records = table.records();
    let locale = args.locale;

    match args.command {
        Commands::Stats => {
            let stats = table.stats();
            println!("Reference table statistics:");
            println!("  Records: {}", stats.records);
            println!("  Provinces: {}", stats.provinces);
            println!("  Districts: {}", stats.districts);
            println!("  Subdistricts: {}", stats.subdistricts);
            println!("  Postal codes: {}", stats.postal_codes);
        }

        Commands::Provinces => {
            for p in records.unique_provinces(locale) {
                println!("{:>3}  {}", p.code, p.label(locale));
            }
        }

        Commands::Districts { province } => {
            let districts = records.districts_of(Some(province), locale);
            if districts.is_empty() {
                eprintln!("No districts found for province {province}");
            }
            for d in districts {
                println!("{:>5}  {}", d.code, d.label(locale));
            }
        }

        Commands::Subdistricts { district } => {
            let subdistricts = records.subdistricts_of(Some(district), locale);
            if subdistricts.is_empty() {
                eprintln!("No subdistricts found for district {district}");
            }
            for s in subdistricts {
                println!("{:>7}  {}  ({})", s.code, s.label(locale), s.postal_code);
            }
        }

        Commands::Lookup { postal } => {
            let code = PostalCode::parse(postal.trim())
                .with_context(|| format!("invalid postal code: {postal}"))?;
            let matches = records.records_matching_postal(code.as_str());
            if matches.is_empty() {
                println!("No areas found for postal code {code}");
            }
            for r in matches {
                println!(
                    "{}, {}, {}",
                    r.subdistrict_name.get(locale),
                    r.district_name.get(locale),
                    r.province_name.get(locale)
                );
            }
        }

        Commands::Suggest { prefix } => {
            let hits = records.postal_code_suggestions(prefix.trim(), args.limit);
            if hits.is_empty() {
                println!("No postal codes start with: {prefix}");
            }
            for s in hits {
                println!(
                    "{}  {}, {}",
                    s.postal_code,
                    s.district_name.get(locale),
                    s.province_name.get(locale)
                );
            }
        }

        Commands::Build { out } => {
            table
                .save_binary(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} records to {}", table.len(), out.display());
        }

        Commands::Replay { script } => {
            let config = EngineConfig::default()
                .with_locale(locale)
                .with_suggestion_limit(args.limit);
            let mut engine = Engine::new(table.clone(), config);
            replay(&mut engine, &script)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn replay(engine: &mut Engine, path: &Path) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening script {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let Some(step) = script::parse_line(&line).with_context(|| format!("line {lineno}"))?
        else {
            continue;
        };

        info!(line = lineno, step = ?step, "replay step");
        println!("> {}", line.trim());
        let input = match step {
            Step::Input(input) => input,
            Step::Show => {
                print_view(engine)?;
                continue;
            }
        };
        for event in engine.dispatch(input) {
            println!("{}", serde_json::to_string(&event)?);
        }
    }
    Ok(())
}

fn print_view(engine: &Engine) -> anyhow::Result<()> {
    let view = engine.view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    println!("= {}", engine.snapshot().format_display());
    let issues = engine.validate();
    if !issues.is_empty() {
        let issues: Vec<String> = issues.iter().map(ToString::to_string).collect();
        println!("! {}", issues.join("; "));
    }
    Ok(())
}
