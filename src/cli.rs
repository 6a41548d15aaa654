use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{Category, NutrientProfile};

/// nutriscore: Nutri-Score nutritional quality score and grade calculator.
#[derive(Parser, Debug)]
#[command(name = "nutriscore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log scoring details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single product given on the command line.
    Score {
        /// Product category: food, beverage or water.
        #[arg(short, long, default_value = "food")]
        category: Category,

        #[command(flatten)]
        nutrients: NutrientArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Score every product in a CSV or JSON file.
    Batch {
        /// Input file (.csv or .json).
        input: PathBuf,

        /// Write results to this file (.csv or .json).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Per-100g nutrient values. Unset values count as zero.
#[derive(Args, Debug, Clone, Default)]
pub struct NutrientArgs {
    /// Energy density in kJ/100g.
    #[arg(long, conflicts_with = "energy_kcal")]
    pub energy_kj: Option<f64>,

    /// Energy density in kcal/100g (converted to kJ).
    #[arg(long)]
    pub energy_kcal: Option<f64>,

    /// Sugars in g/100g.
    #[arg(long, default_value_t = 0.0)]
    pub sugars: f64,

    /// Saturated fatty acids in g/100g.
    #[arg(long, default_value_t = 0.0)]
    pub saturated_fat: f64,

    /// Sodium in mg/100g.
    #[arg(long, conflicts_with = "salt_mg")]
    pub sodium_mg: Option<f64>,

    /// Salt in mg/100g (converted to sodium).
    #[arg(long)]
    pub salt_mg: Option<f64>,

    /// Fruit, vegetable, nut and oil content in percent.
    #[arg(long, default_value_t = 0.0)]
    pub fruits: f64,

    /// Fibre in g/100g.
    #[arg(long, default_value_t = 0.0)]
    pub fibre: f64,

    /// Protein in g/100g.
    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,
}

impl NutrientArgs {
    /// Build a profile, converting kcal and salt where given.
    pub fn to_profile(&self) -> NutrientProfile {
        let mut profile = NutrientProfile::new()
            .with_sugars(self.sugars)
            .with_saturated_fat(self.saturated_fat)
            .with_fruits(self.fruits)
            .with_fibre(self.fibre)
            .with_protein(self.protein);

        profile = match (self.energy_kj, self.energy_kcal) {
            (Some(kj), _) => profile.with_energy_kj(kj),
            (None, Some(kcal)) => profile.with_energy_kcal(kcal),
            (None, None) => profile,
        };

        match (self.sodium_mg, self.salt_mg) {
            (Some(mg), _) => profile.with_sodium(mg),
            (None, Some(salt)) => profile.with_salt(salt),
            (None, None) => profile,
        }
    }
}
