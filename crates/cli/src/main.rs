use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use stream_filters::{Declaration, FilterConfig, PredicateRegistry, DECLARATIONS};
use tweet_model::decode_lines;

/// tweet-filter - Declarative filtering for tweet streams
#[derive(Parser)]
#[command(name = "tweet-filter")]
#[command(about = "Filter newline-delimited tweet stream JSON with declarative rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where filter declarations come from
#[derive(clap::Args)]
struct RuleArgs {
    /// JSON file with filter declarations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Inline declaration, `name` or `name=arg1,arg2` (repeatable)
    #[arg(short = 'f', long = "filter")]
    filters: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream records through the filters and print the ones that pass
    Run {
        #[command(flatten)]
        rules: RuleArgs,

        /// NDJSON input file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Log which predicate rejected each dropped record
        #[arg(long)]
        explain: bool,
    },

    /// Compile the declarations and show the resulting predicates
    Check {
        #[command(flatten)]
        rules: RuleArgs,
    },

    /// List every supported declaration name
    List,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the kept records
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            rules,
            input,
            explain,
        } => handle_run(&rules, input.as_deref(), explain)?,
        Commands::Check { rules } => handle_check(&rules)?,
        Commands::List => handle_list(),
    }

    Ok(())
}

/// Merge the config file (if any) and inline declarations, in that order
fn load_config(rules: &RuleArgs) -> Result<FilterConfig> {
    let mut config = match &rules.config {
        Some(path) => FilterConfig::from_path(path)
            .with_context(|| format!("Failed to load filter config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    for inline in &rules.filters {
        let declaration = Declaration::parse_inline(inline)
            .with_context(|| format!("Invalid --filter '{}'", inline))?;
        config.push(declaration);
    }
    Ok(config)
}

fn compile(rules: &RuleArgs) -> Result<PredicateRegistry> {
    let config = load_config(rules)?;
    let registry = config.compile().context("Failed to compile filters")?;
    tracing::info!("Compiled {} filter predicates", registry.len());
    Ok(registry)
}

/// Handle the 'run' command
fn handle_run(rules: &RuleArgs, input: Option<&Path>, explain: bool) -> Result<()> {
    let registry = compile(rules)?;

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = BufWriter::new(io::stdout().lock());

    let start = Instant::now();
    let (mut kept, mut dropped, mut malformed) = (0usize, 0usize, 0usize);

    for line in decode_lines(reader) {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("{}", e);
                malformed += 1;
                continue;
            }
        };

        match registry.rejected_by(&line.tweet) {
            None => {
                kept += 1;
                writeln!(out, "{}", line.raw).context("Failed to write output")?;
            }
            Some(predicate) => {
                dropped += 1;
                if explain {
                    tracing::info!("line {} rejected by {}", line.line_no, predicate);
                }
            }
        }
    }
    out.flush().context("Failed to flush output")?;

    eprintln!(
        "{} kept {}, dropped {}, malformed {} in {:?}",
        "✓".green(),
        kept.to_string().green(),
        dropped.to_string().yellow(),
        malformed.to_string().red(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'check' command
fn handle_check(rules: &RuleArgs) -> Result<()> {
    let registry = compile(rules)?;

    if registry.is_empty() {
        println!("{}", "No filters declared: every record passes".yellow());
        return Ok(());
    }

    println!("{}", "Filters (all must pass):".bold().blue());
    for (i, descriptor) in registry.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), descriptor.name());
        tracing::debug!("   {:?}", descriptor);
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list() {
    println!("{}", "Supported declarations:".bold().blue());
    for name in DECLARATIONS {
        println!("{}{}", "• ".green(), name);
    }
}
