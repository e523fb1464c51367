use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{info, warn};

use house_price::{
    config::{self, Config},
    load_model,
    logger::setup_logger,
    models::{build_row, FeatureRow, KNOWN_LOCATIONS},
    scoring::{format_price, score_batch, score_one, sweep_area, BatchTable, SweepResult},
    LinearModel,
};

#[derive(Parser)]
#[command(name = "house-price", version, about = "Estimate house prices from a pre-trained model")]
struct Cli {
    /// Model artifact to load, overrides `model_path` from the config
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the price of a single property
    Predict {
        #[command(flatten)]
        property: PropertyArgs,
        /// Also print predicted prices across the configured area range
        #[arg(long)]
        sweep: bool,
    },
    /// Print predicted prices across the configured area range
    Sweep {
        #[command(flatten)]
        property: PropertyArgs,
    },
    /// Predict prices for every row of a CSV file
    Batch {
        input: PathBuf,
        /// Where to write the results, `-` for stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the locations offered by the form
    Locations,
}

#[derive(Args)]
struct PropertyArgs {
    #[arg(long)]
    location: String,
    /// Area in square feet
    #[arg(long, allow_negative_numbers = true)]
    area: f64,
    #[arg(long)]
    bedrooms: u32,
    #[arg(long)]
    bathrooms: u32,
    /// Property age in years
    #[arg(long, default_value_t = 0)]
    age: u32,
}

impl PropertyArgs {
    fn to_row(&self) -> FeatureRow {
        let row = build_row(
            self.location.as_str(),
            self.area,
            self.bedrooms,
            self.bathrooms,
            self.age,
        );
        let unusual = row.out_of_domain_columns();
        if !unusual.is_empty() {
            warn!(
                "Values outside the usual range for: {}",
                unusual.join(", ")
            );
        }
        row
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::read_config()?;
    setup_logger(&config.log_level)?;

    if let Command::Locations = cli.command {
        for location in KNOWN_LOCATIONS {
            println!("{location}");
        }
        return Ok(());
    }

    let model_path = cli
        .model
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.model_path));
    let model = load_model(&model_path)
        .with_context(|| format!("cannot predict without a model ({})", model_path.display()))?;

    match cli.command {
        Command::Predict { property, sweep } => {
            let row = property.to_row();
            predict(&config, &model, &row)?;
            if sweep {
                print_sweep(&config, &model, &row)?;
            }
        }
        Command::Sweep { property } => print_sweep(&config, &model, &property.to_row())?,
        Command::Batch { input, output } => batch(&config, &model, input, output)?,
        Command::Locations => {}
    }

    Ok(())
}

fn predict(config: &Config, model: &LinearModel, row: &FeatureRow) -> Result<()> {
    let price = score_one(model, row)?;
    println!(
        "{} {} {} {}",
        "Estimated House Price:".bold(),
        config.currency_symbol,
        format_price(price).green().bold(),
        config.price_unit
    );
    Ok(())
}

fn print_sweep(config: &Config, model: &LinearModel, row: &FeatureRow) -> Result<()> {
    let result: SweepResult = sweep_area(model, row, &config.sweep)?;
    println!(
        "{:>12}  {:>16}",
        "Area (sqft)",
        format!("Price ({})", config.price_unit)
    );
    for (area, price) in result.points() {
        println!("{:>12}  {:>16}", area, format_price(price));
    }
    Ok(())
}

fn batch(config: &Config, model: &LinearModel, input: PathBuf, output: Option<String>) -> Result<()> {
    let table = BatchTable::from_path(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let scored = score_batch(model, &table, &config.prediction_column)?;

    let output = output.unwrap_or_else(|| config.output_path.clone());
    if output == "-" {
        scored.write_csv(io::stdout().lock())?;
    } else {
        scored
            .write_path(&output)
            .with_context(|| format!("failed to write {output}"))?;
        info!("Wrote {} predictions to {}", scored.len(), output);
    }
    Ok(())
}
