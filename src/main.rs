//! @ai:module:intent CLI for scoring sampling algorithm benchmark runs
//! @ai:module:layer presentation

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use sampeval::{
    config::EvalConfig,
    evaluator::Evaluator,
    metrics::Prioritization,
    report::{MeasuresReporter, MeasuresReporterTrait, ReportGenerator},
    table::ResultTable,
};

#[derive(Parser)]
#[command(name = "sampeval")]
#[command(about = "Scores and ranks feature-model sampling algorithms on benchmark runs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Weight per criterion; the defaults mirror the standard prioritization.
#[derive(Args)]
struct WeightArgs {
    /// Weight of the sample size criterion
    #[arg(long, default_value = "1.0")]
    size: f64,

    /// Weight of the sampling runtime criterion
    #[arg(long, default_value = "1.0")]
    runtime: f64,

    /// Weight of the interaction coverage criterion
    #[arg(long, default_value = "1.0")]
    coverage: f64,

    /// Weight of the sample similarity criterion
    #[arg(long, default_value = "0.0")]
    similarity: f64,

    /// Weight of the memory consumption criterion
    #[arg(long, default_value = "0.0")]
    memory: f64,
}

impl WeightArgs {
    fn prioritization(&self) -> Prioritization {
        Prioritization::new(
            self.size,
            self.runtime,
            self.coverage,
            self.similarity,
            self.memory,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Score benchmark runs and write the result-table reports
    Score {
        /// Run file or directory of run files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for reports
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        weights: WeightArgs,
    },

    /// Score runs and export one algorithm's row as a measures file
    Measures {
        /// Run file or directory of run files to score
        #[arg(short, long, default_value = "runs")]
        input: PathBuf,

        /// Directory searched recursively for a data.csv naming the algorithm
        /// whose row is exported
        #[arg(short, long)]
        reference: PathBuf,

        /// Output directory for the measures file
        #[arg(short, long, default_value = "results")]
        output: PathBuf,

        #[command(flatten)]
        weights: WeightArgs,
    },

    /// List the algorithms present in the loaded runs
    List {
        /// Run file or directory of run files
        #[arg(short, long, default_value = "runs")]
        input: PathBuf,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "sampeval.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sampeval=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            output,
            config,
            weights,
        } => score(input, output, config, weights),
        Commands::Measures {
            input,
            reference,
            output,
            weights,
        } => measures(input, reference, output, weights),
        Commands::List { input } => list(input),
        Commands::Init { output } => init_config(output),
    }
}

fn score(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    weights: WeightArgs,
) -> Result<()> {
    let config = match config {
        Some(path) => EvalConfig::load(&path)?,
        None => EvalConfig::default(),
    };
    let input = input.unwrap_or_else(|| config.paths.input_dir.clone());
    let output = output.unwrap_or_else(|| config.paths.output_dir.clone());

    // The flag weights come first; configured vectors follow unless they
    // repeat one already present.
    let mut prioritizations = vec![weights.prioritization()];
    for configured in config.prioritizations() {
        if !prioritizations.iter().any(|p| p.identical(&configured)) {
            prioritizations.push(configured);
        }
    }

    let mut evaluator = Evaluator::new();
    let count = evaluator.load(&input)?;
    println!("Loaded {} observations from {}", count, input.display());

    let table = evaluator.compute_scores(&prioritizations).clone();
    ReportGenerator::new().generate_all(&table, &output)?;
    print_summary(&table, &prioritizations);
    println!("Reports written to {}", output.display());
    Ok(())
}

fn measures(
    input: PathBuf,
    reference: PathBuf,
    output: PathBuf,
    weights: WeightArgs,
) -> Result<()> {
    let reference_run = find_reference_run(&reference)?;
    println!("Using reference run {}", reference_run.display());

    // The reference run only names the algorithm whose row gets exported;
    // the scores come from the main input.
    let mut reference_store = sampeval::RecordStore::new();
    reference_store.load(&reference_run)?;
    let Some(algorithm) = reference_store.algorithms().first().cloned() else {
        bail!("reference run {} holds no rows", reference_run.display());
    };

    let prioritization = weights.prioritization();
    let mut evaluator = Evaluator::new();
    evaluator.load(&input)?;
    let table = evaluator.compute_scores(std::slice::from_ref(&prioritization));

    let Some(entry) = table.find(&prioritization, &algorithm) else {
        bail!("algorithm '{}' is not present in the scored runs", algorithm);
    };

    std::fs::create_dir_all(&output)?;
    MeasuresReporter::new().write(entry, &output)?;
    println!(
        "Measures for {} written to {}",
        entry.algorithm(),
        output.display()
    );
    Ok(())
}

/// First data.csv found below the reference directory, in walk order.
fn find_reference_run(reference: &Path) -> Result<PathBuf> {
    for entry in WalkDir::new(reference).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == "data.csv" {
            return Ok(entry.into_path());
        }
    }
    Err(sampeval::Error::MissingReference(reference.to_path_buf()).into())
}

fn list(input: PathBuf) -> Result<()> {
    let mut evaluator = Evaluator::new();
    let count = evaluator.load(&input)?;

    println!("Algorithms ({} observations):", count);
    for algorithm in evaluator.store().algorithms() {
        let runs = evaluator.store().of_algorithm(algorithm).count();
        println!("  {:<30} {:>5} runs", algorithm, runs);
    }

    let mut authors: Vec<&str> = evaluator.data().iter().map(|o| o.author.as_str()).collect();
    authors.sort_unstable();
    authors.dedup();
    println!("Authors: {}", authors.join(", "));
    Ok(())
}

fn init_config(output: PathBuf) -> Result<()> {
    let config = EvalConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

fn print_summary(table: &ResultTable, prioritizations: &[Prioritization]) {
    println!();
    println!("Sampling Evaluation Results");
    println!("===========================");

    for prioritization in prioritizations {
        println!();
        println!("Prioritization {}", prioritization.label());
        println!(
            "{:<30} {:>10} {:>5} {:>10} {:>5} {:>10} {:>5} {:>10} {:>5}",
            "", "NBS", "#", "SRBS", "#", "WRBS", "#", "IWRBS", "#"
        );
        println!("{}", "-".repeat(105));
        for entry in table.for_prioritization(prioritization) {
            println!(
                "{:<30} {:>10} {:>5} {:>10} {:>5} {:>10} {:>5} {:>10} {:>5}",
                entry.algorithm(),
                short(&entry.nbs.composite.render()),
                rank(entry.nbs.rank),
                short(&entry.srbs.composite.render()),
                rank(entry.srbs.rank),
                short(&entry.wrbs.composite.render()),
                rank(entry.wrbs.rank),
                short(&entry.iwrbs.composite.render()),
                rank(entry.iwrbs.rank),
            );
        }
    }
}

fn rank(rank: Option<u32>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Composite values get unwieldy at full precision on a console.
fn short(rendered: &str) -> String {
    match rendered.parse::<f64>() {
        Ok(value) => format!("{value:.4}"),
        Err(_) => rendered.to_string(),
    }
}
