use std::{path::PathBuf, process};

use clap::Parser;
use colored::*;
use txbench::{
    config::{RunConfig, Settings},
    format::{format_ids, format_ranked, format_time},
    path_str,
    report::{self, Report},
    run::{self, MethodRun, Outcome, Workload},
    timer::to_nanos,
};

/// Compare containment and relevance query methods over one workload.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transactions file, one comma separated transaction per line.
    transactions: Option<PathBuf>,
    /// Queries file, one comma separated query per line.
    queries: Option<PathBuf>,
    /// TOML file with defaults for any of the options below.
    #[arg(long)]
    config: Option<PathBuf>,
    /// naive, signature, bitslice, inverted, relevance-naive,
    /// relevance-inverted or all.
    #[arg(long)]
    method: Option<String>,
    /// Evaluate only the query at this index and print its result.
    #[arg(long)]
    query: Option<usize>,
    /// Ranked results kept per relevance query; negative keeps all.
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,
    /// Directory for index dumps.
    #[arg(long)]
    dump_dir: Option<PathBuf>,
    #[arg(long, action)]
    parallel: bool,
    /// Fail unless all methods of a kind agree.
    #[arg(long, action)]
    verify: bool,
    /// JSON results file.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Cli {
    fn as_config(&self) -> RunConfig {
        RunConfig {
            transactions: self.transactions.clone(),
            queries: self.queries.clone(),
            method: self.method.clone(),
            query: self.query,
            limit: self.limit,
            dump_dir: self.dump_dir.clone(),
            parallel: self.parallel.then_some(true),
            verify: self.verify.then_some(true),
            out: self.out.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    txbench::init_tracing();

    if cfg!(debug_assertions) {
        println!("{}", "warning: running in debug mode".yellow().bold());
    }

    if let Err(e) = run_from_cli(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
        process::exit(1);
    }
}

fn run_from_cli(cli: &Cli) -> Result<(), String> {
    let file_config = match &cli.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    let settings = file_config.overlay(cli.as_config()).into_settings()?;

    println!(
        "{}: {} (\"{}\", \"{}\")",
        "READING".green().bold(),
        "workload",
        path_str(&settings.transactions),
        path_str(&settings.queries)
    );
    let workload = Workload::load(&settings)?;
    println!(
        "{} transactions, {} queries",
        workload.corpus.len(),
        workload.queries.len()
    );

    let runs = run::run_methods(&settings, &workload)?;
    for method_run in &runs {
        print_run(&settings, method_run);
    }

    if settings.verify {
        run::verify(&runs)?;
        println!("{}", "VERIFIED".green().bold());
    }

    if let Some(out) = &settings.out {
        let report = Report::new(workload.corpus.len(), workload.queries.len(), &runs);
        report::write_results(&report, out)?;
        println!("{}: {}", "WROTE".green().bold(), path_str(out));
    }

    println!("{}", "DONE".green().bold());
    Ok(())
}

fn print_run(settings: &Settings, method_run: &MethodRun) {
    let title = method_run.method.title();
    println!("\n{}", format!("{} result:", title).bold());

    if settings.query.is_some() {
        match &method_run.outcome {
            Outcome::Containment(results) => println!("{}", format_ids(&results[0])),
            Outcome::Relevance(results) => println!("{}", format_ranked(&results[0])),
        }
    } else {
        println!("{} results", method_run.outcome.total_results());
    }

    println!(
        "{} computation time: {} (build {}, query {})",
        title,
        format_time(to_nanos(method_run.build + method_run.query)).cyan(),
        format_time(to_nanos(method_run.build)),
        format_time(to_nanos(method_run.query)),
    );
}
