use std::path::Path;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use nutriscore::batch::{
    display_results, display_score, load_products, save_results, score_products,
};
use nutriscore::cli::{Cli, Command, NutrientArgs};
use nutriscore::error::Result;
use nutriscore::{Category, compute_score};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so scores on stdout stay pipeable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nutriscore={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Score {
            category,
            nutrients,
            json,
        } => cmd_score(category, &nutrients, json),
        Command::Batch { input, output } => cmd_batch(&input, output.as_deref()),
    }
}

/// Score one product from command-line values.
fn cmd_score(category: Category, nutrients: &NutrientArgs, json: bool) -> Result<()> {
    let profile = nutrients.to_profile();
    if !profile.is_valid() {
        warn!(
            profile = %profile.debug_string(),
            "negative or non-finite values score no points"
        );
    }

    let score = compute_score(&profile, category);

    if json {
        let result = serde_json::json!({
            "category": score.category,
            "negative": score.negative,
            "positive": score.positive,
            "value": score.value,
            "grade": score.grade(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_score(&score);
    }

    Ok(())
}

/// Score every product in a file.
fn cmd_batch(input: &Path, output: Option<&Path>) -> Result<()> {
    let products = load_products(input)?;
    let results = score_products(&products);

    display_results(&results);

    if let Some(path) = output {
        save_results(path, &results)?;
        println!("Results saved to {}.", path.display());
    }

    Ok(())
}
