use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use weave_diff::{DiffItem, DiffStats, ItemKind, Patience};
use weave_merge::Merger;

use crate::cli::*;
use crate::config::WeaveConfig;
use crate::input::read_lines;

/// How a successful command ended, mapped onto the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Inputs were identical, or the command has nothing to compare.
    Clean,
    /// A diff found differences.
    Differs,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Differs => ExitCode::from(1),
        }
    }
}

#[derive(Serialize)]
struct DiffReport<'a> {
    items: &'a [DiffItem],
    stats: DiffStats,
}

#[derive(Serialize)]
struct MergeReport<'a> {
    lines: &'a [String],
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let config = load_config(&cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, cli.format, &mut out),
        Command::Merge(args) => cmd_merge(args, &config, cli.format, &mut out),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<WeaveConfig> {
    let mut config = match &cli.config {
        Some(path) => WeaveConfig::load(path)?,
        None => WeaveConfig::default(),
    };
    if cli.max_lines.is_some() {
        config.diff.max_lines = cli.max_lines;
    }
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn cmd_diff(
    args: DiffArgs,
    config: &WeaveConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let old = read_lines(&args.old)?;
    let new = read_lines(&args.new)?;
    let items = Patience::new(config.diff.clone())
        .try_diff(&old, &new)
        .with_context(|| format!("cannot diff {} and {}", args.old.display(), args.new.display()))?;
    let stats = DiffStats::from_items(&items);
    debug!(insertions = stats.insertions, deletions = stats.deletions, "diff computed");

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &DiffReport { items: &items, stats })?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let color = args.color.unwrap_or(config.output.color).enabled();
            if color {
                colored::control::set_override(true);
            }
            for item in &items {
                writeln!(out, "{}", render_item(item, color))?;
            }
            if args.stat {
                writeln!(
                    out,
                    "{} insertion(s), {} deletion(s)",
                    stats.insertions, stats.deletions
                )?;
            }
        }
    }

    Ok(if stats.is_identity() { Outcome::Clean } else { Outcome::Differs })
}

fn cmd_merge(
    args: MergeArgs,
    config: &WeaveConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let original = read_lines(&args.original)?;
    let versions = args
        .versions
        .iter()
        .map(|path| read_lines(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let merged = Merger::new(config.diff.clone())
        .try_merge(&original, &versions)
        .context("merge failed")?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&MergeReport { lines: &merged })? + "\n",
        OutputFormat::Text => merged.join("\n"),
    };
    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(Outcome::Clean)
}

fn render_item(item: &DiffItem, color: bool) -> String {
    let line = item.to_string();
    if !color {
        return line;
    }
    match item.kind {
        ItemKind::Insertion => line.green().to_string(),
        ItemKind::Deletion => line.red().to_string(),
        ItemKind::Unchanged => line,
    }
}
