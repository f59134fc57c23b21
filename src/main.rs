//! pagesim command-line interface.
//!
//! Usage: pagesim [OPTIONS] [PAGES]...
//!
//! Prints the standard solution table, the matching visualization table and
//! the hit/fault statistics for one reference string.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};

use pagesim::common::config::DEFAULT_FRAME_COUNT;
use pagesim::render::{explain, render_statistics, render_table, StatKind, TableOptions};
use pagesim::{parse_frame_count, parse_reference_string, read_reference_file, run};
use pagesim::{Access, Algorithm, Report};

#[derive(Parser)]
#[command(author, version, about = "pagesim - step through FIFO and LRU page replacement")]
struct Cli {
    /// Reference string: page numbers separated by spaces
    #[arg(value_name = "PAGES", allow_negative_numbers = true)]
    pages: Vec<String>,

    /// Read the reference string from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "pages")]
    input: Option<PathBuf>,

    /// Number of frames
    #[arg(
        short,
        long,
        value_name = "N",
        allow_hyphen_values = true,
        default_value_t = DEFAULT_FRAME_COUNT.to_string()
    )]
    frames: String,

    /// Replacement policy (fifo or lru)
    #[arg(short, long, default_value = "fifo")]
    algorithm: Algorithm,

    /// Dim every column of the main table except hits or faults
    #[arg(long, value_enum)]
    highlight: Option<HighlightArg>,

    /// Show how one statistic is calculated
    #[arg(long, value_enum)]
    explain: Option<ExplainArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum HighlightArg {
    Hit,
    Fault,
}

impl From<HighlightArg> for Access {
    fn from(arg: HighlightArg) -> Self {
        match arg {
            HighlightArg::Hit => Access::Hit,
            HighlightArg::Fault => Access::Fault,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExplainArg {
    Hit,
    Fault,
    Total,
    Ratio,
}

impl From<ExplainArg> for StatKind {
    fn from(arg: ExplainArg) -> Self {
        match arg {
            ExplainArg::Hit => StatKind::Hit,
            ExplainArg::Fault => StatKind::Fault,
            ExplainArg::Total => StatKind::Total,
            ExplainArg::Ratio => StatKind::Ratio,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Validate everything before simulating
    let pages = match &cli.input {
        Some(path) => read_reference_file(path)
            .with_context(|| format!("Failed to load reference string from {}", path.display()))?,
        None => parse_reference_string(&cli.pages.join(" "))?,
    };
    let frame_count = parse_frame_count(&cli.frames)?;

    let report = run(&pages, frame_count, cli.algorithm);
    print_report(&report, &cli);

    Ok(())
}

fn print_report(report: &Report, cli: &Cli) {
    let frame_count = report.frame_count.get();

    println!("== {} ==", report.algorithm.name());
    println!(
        "{}: {} references, {} frames",
        report.algorithm.inputs_title(),
        report.reference.len(),
        frame_count
    );
    println!();

    let options = TableOptions::standard().with_highlight(cli.highlight.map(Access::from));
    print!("{}", render_table(&report.result.steps, frame_count, options));
    println!();

    println!("== {} ==", report.algorithm.visualization_title());
    print!(
        "{}",
        render_table(&report.visualization, frame_count, TableOptions::visualization())
    );
    println!();

    println!("== Statistics ==");
    print!("{}", render_statistics(&report.statistics));

    if let Some(kind) = cli.explain {
        println!();
        println!("{}", explain(kind.into(), &report.statistics));
    }
}
