pub mod batch;
pub mod cli;
pub mod error;
pub mod models;
pub mod scoring;

pub use error::{Result, ScoreError};
pub use models::{
    Category, Grade, NutrientProfile, NutritionalScore, Product, ScoredProduct, energy_from_kcal,
    sodium_from_salt,
};
pub use scoring::{compute_grade, compute_score, score_tagged};
