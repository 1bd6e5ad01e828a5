//! StenoScore CLI
//!
//! Usage:
//!   stenoscore compare -r "reference text" -t "typed text" -d 60     # Score one attempt
//!   stenoscore compare -r @passage.txt -t @typed.txt -d 90 --json    # Inputs from files
//!   stenoscore stats --results results.json --passage-id 3           # Passage dashboard
//!   stenoscore errors --results results.json                         # Master error list

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stenoscore::config::{FileConfig, OutputConfig};
use stenoscore::core::{
    attempt_breakdown, load_records, master_error_list, passage_stats, read_text_source,
    records_for_passage, score_attempt,
};
use stenoscore::types::{AttemptRecord, MistakeKind, PassageStats, WordCount, WordFrequency};
use stenoscore::{Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "stenoscore",
    version = VERSION,
    about = "StenoScore - Score typed transcripts against a reference passage",
    long_about = "StenoScore compares a typed transcript with the passage it was\n\
                  typed from and reports speed and accuracy.\n\n\
                  Every word position is classified as:\n  \
                  missed      - reference word with nothing typed for it\n  \
                  wrong       - typed word unrelated to the reference word\n  \
                  misspelled  - typed word close to the reference word (similarity > 0.7)\n\n\
                  Text arguments starting with '@' are read from that file."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// TOML config file with output defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one attempt
    Compare {
        /// Reference passage (or @FILE)
        #[arg(short, long)]
        reference: String,

        /// Typed transcript (or @FILE)
        #[arg(short, long)]
        typed: String,

        /// Elapsed typing time in seconds
        #[arg(short, long)]
        duration: u32,

        /// Passage id to stamp on the record
        #[arg(long)]
        passage_id: Option<u64>,

        /// Show every mistaken word
        #[arg(long)]
        verbose: bool,
    },

    /// Averages and most frequent mistakes for one passage
    Stats {
        /// JSON array of scored attempts
        #[arg(long)]
        results: PathBuf,

        /// Only use attempts for this passage
        #[arg(long)]
        passage_id: Option<u64>,

        /// How many frequent mistakes to show (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        top: Option<u64>,
    },

    /// Every mistake across all attempts, most frequent first
    Errors {
        /// JSON array of scored attempts
        #[arg(long)]
        results: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let top_flag = match &args.command {
        Command::Stats { top, .. } => top.map(|n| n as usize),
        _ => None,
    };
    let output = OutputConfig::resolve(&file_config, top_flag, args.json, args.no_color);
    debug!(?output, "resolved output config");

    if !output.color {
        colored::control::set_override(false);
    }

    match args.command {
        Command::Compare { reference, typed, duration, passage_id, verbose } => {
            let reference = read_text_source(&reference)?;
            let typed = read_text_source(&typed)?;
            let record = score_attempt(passage_id, &reference, &typed, duration)?;
            print_attempt(&record, &output, verbose)
        }
        Command::Stats { results, passage_id, .. } => {
            let mut records = load_records(&results)?;
            if let Some(id) = passage_id {
                records = records_for_passage(&records, id);
            }
            let stats = passage_stats(&records, output.top_mistakes);
            print_stats(&stats, &output)
        }
        Command::Errors { results } => {
            let records = load_records(&results)?;
            let list = master_error_list(&records);
            print_frequencies(&list, &output)
        }
    }
}

/// Print a scored attempt
fn print_attempt(record: &AttemptRecord, output: &OutputConfig, verbose: bool) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    if output.color {
        println!("{}", record.to_terminal_string());
    } else {
        println!("{}", record.to_parseable_string());
    }

    if verbose {
        let breakdown = attempt_breakdown(&record.mistakes);
        for kind in MistakeKind::ALL {
            let words: Vec<String> = breakdown
                .iter()
                .filter(|f| f.kind == kind)
                .map(|f| if f.frequency > 1 { format!("{} (x{})", f.word, f.frequency) } else { f.word.clone() })
                .collect();
            if words.is_empty() {
                continue;
            }
            println!("  {} {}", kind_label(kind, output.color), words.join(", "));
        }
    }
    Ok(())
}

/// Print passage stats
fn print_stats(stats: &PassageStats, output: &OutputConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", stats.to_parseable_string());
    if stats.total_attempts == 0 {
        println!("  No attempts yet.");
        return Ok(());
    }
    for entry in &stats.frequent_mistakes {
        print_count_line(entry);
    }
    Ok(())
}

/// Print a frequency table
fn print_frequencies(list: &[WordFrequency], output: &OutputConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }
    if list.is_empty() {
        println!("No mistakes recorded.");
    }
    for entry in list {
        print_frequency_line(entry, output.color);
    }
    Ok(())
}

fn print_frequency_line(entry: &WordFrequency, color: bool) {
    println!("  {:>4}  {}  {}", entry.frequency, kind_label(entry.kind, color), entry.word);
}

fn print_count_line(entry: &WordCount) {
    println!("  {:>4}  {}", entry.frequency, entry.word);
}

fn kind_label(kind: MistakeKind, color: bool) -> String {
    let label = format!("{:<10}", kind.as_str());
    if color {
        format!("{}{}\x1b[0m", kind.color_code(), label)
    } else {
        label
    }
}

// =============================================================================
// TESTS
// =============================================================================
