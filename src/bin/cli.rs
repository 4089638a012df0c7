//! fieldtrack command-line interface
//!
//! Reads a captured catalog page (HTML from a file or stdin), runs the
//! configured field scan, and prints the resulting analytics commands as JSON,
//! one per line. Configuration comes from a JSON file, command-line flags, or
//! both, with flags taking precedence.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use fieldtrack::{
    CommandQueueReporter, Document, ReportMode, SelectionConfig, Tracker, TrackerConfig,
};
use fieldtrack::scan::EarlyExit;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One category/action/label event per matched field
    Event,
    /// Legacy custom-variable slots plus a trailing pageview
    CustomVariable,
}

impl From<ModeArg> for ReportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Event => ReportMode::Event,
            ModeArg::CustomVariable => ReportMode::CustomVariable,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExitArg {
    /// Stop once every distinct field has matched
    DistinctFields,
    /// Stop once the match count reaches the field count, repeats included
    AggregateCount,
}

impl From<ExitArg> for EarlyExit {
    fn from(exit: ExitArg) -> Self {
        match exit {
            ExitArg::DistinctFields => EarlyExit::DistinctFields,
            ExitArg::AggregateCount => EarlyExit::AggregateCount,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fieldtrack", version, about = "Scan a catalog page for metadata fields and print analytics commands")]
struct Cli {
    /// HTML file to scan, or "-" for stdin
    #[arg(default_value = "-")]
    input: String,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target field name (repeatable, ordered; overrides the config file)
    #[arg(short, long = "field")]
    fields: Vec<String>,

    /// Event category
    #[arg(long)]
    category: Option<String>,

    /// Reporting model
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Select rows by this marker class on label nodes
    #[arg(long, value_name = "CLASS", conflicts_with = "table_rows")]
    class_marker: Option<String>,

    /// Select table rows with label and value cells at these indices
    #[arg(long, value_name = "LABEL,VALUE", value_parser = parse_cells)]
    table_rows: Option<(usize, usize)>,

    /// Early-exit behavior of the scan
    #[arg(long, value_enum)]
    early_exit: Option<ExitArg>,

    /// Analytics account id
    #[arg(long)]
    account: Option<String>,

    /// Host the page was served from, for cookie-domain resolution
    #[arg(long)]
    host: Option<String>,

    /// Pretty-print each command
    #[arg(long)]
    pretty: bool,
}

fn parse_cells(s: &str) -> Result<(usize, usize), String> {
    let (label, value) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LABEL,VALUE cell indices, got {s:?}"))?;
    let label = label.trim().parse().map_err(|e| format!("bad label cell: {e}"))?;
    let value = value.trim().parse().map_err(|e| format!("bad value cell: {e}"))?;
    Ok((label, value))
}

fn build_config(cli: &Cli) -> anyhow::Result<TrackerConfig> {
    let mut config = match &cli.config {
        Some(path) => TrackerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            if cli.fields.is_empty() {
                bail!("no target fields; pass --field or --config");
            }
            TrackerConfig::new(cli.fields.clone())
        }
    };

    if cli.config.is_some() && !cli.fields.is_empty() {
        config.fields = cli.fields.clone();
    }
    if let Some(category) = &cli.category {
        config = config.with_category(category);
    }
    if let Some(mode) = cli.mode {
        config = config.with_mode(mode.into());
    }
    if let Some(class) = &cli.class_marker {
        config = config.with_selection(SelectionConfig::ClassMarker { class: class.clone() });
    }
    if let Some((label_cell, value_cell)) = cli.table_rows {
        config = config.with_selection(SelectionConfig::TableRow { label_cell, value_cell });
    }
    if let Some(exit) = cli.early_exit {
        config = config.with_early_exit(exit.into());
    }
    if let Some(account) = &cli.account {
        config = config.with_account(account);
    }
    config.validate()?;
    Ok(config)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("reading page from stdin")?;
        Ok(html)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading page from {input}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let html = read_input(&cli.input)?;
    let document = Document::parse(&html);

    let tracker = Tracker::new(config)?;
    let mut reporter = CommandQueueReporter::new();
    let outcome = tracker.track(&document, cli.host.as_deref(), &mut reporter);

    for command in reporter.drain() {
        let line = if cli.pretty {
            serde_json::to_string_pretty(&command)?
        } else {
            serde_json::to_string(&command)?
        };
        println!("{line}");
    }

    eprintln!(
        "matched {} field(s) over {} candidate row(s){}",
        outcome.matches.len(),
        outcome.candidates_visited,
        if outcome.exited_early { ", exited early" } else { "" }
    );

    Ok(())
}
