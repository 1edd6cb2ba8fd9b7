use std::{fs, path::{Path, PathBuf}};

use clap::Parser;
use colored::*;
use rand::SeedableRng;
use txbench::{generators::{self, GenParams}, path_str};

/// Write a synthetic transactions file and a matching queries file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "transactions.txt")]
    transactions: PathBuf,
    #[arg(long, default_value = "queries.txt")]
    queries: PathBuf,
    #[arg(long, default_value_t = GenParams::default().transactions)]
    count: usize,
    #[arg(long, default_value_t = GenParams::default().mean_length)]
    mean_length: usize,
    #[arg(long, default_value_t = GenParams::default().universe)]
    universe: usize,
    /// Zipf exponent of item popularity.
    #[arg(long, default_value_t = GenParams::default().exponent)]
    exponent: f64,
    #[arg(long, default_value_t = GenParams::default().queries)]
    query_count: usize,
    #[arg(long, default_value_t = GenParams::default().query_length)]
    query_length: usize,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    txbench::init_tracing();

    if let Err(err) = generate(&cli) {
        println!("{}", err.red().bold());
        std::process::exit(1);
    } else {
        println!("{}", "DONE".green().bold());
    }
}

fn generate(cli: &Cli) -> Result<(), String> {
    let params = GenParams {
        transactions: cli.count,
        mean_length: cli.mean_length,
        universe: cli.universe,
        exponent: cli.exponent,
        queries: cli.query_count,
        query_length: cli.query_length,
    };

    let mut rng = rand_chacha::ChaChaRng::seed_from_u64(match cli.seed {
        Some(seed) => seed,
        None => rand::random(),
    });

    println!("{}: {:?}", "GENERATING".green().bold(), params);
    let transactions = generators::gen_transactions(&params, &mut rng)?;
    let queries = generators::gen_queries(&transactions, &params, &mut rng)?;

    write(&cli.transactions, &generators::to_text(&transactions))?;
    write(&cli.queries, &generators::to_text(&queries))?;
    Ok(())
}

fn write(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, text)
        .map_err(|e| format!("failed to write {}:\n{}", path_str(path), e))?;
    println!("{}: {}", "WROTE".green().bold(), path_str(path));
    Ok(())
}
