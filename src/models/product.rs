use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::models::{Category, Grade, NutrientProfile, NutritionalScore};

/// A named product with its category and per-100g nutrients.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub category: Category,
    pub profile: NutrientProfile,
}

/// Flat on-disk shape of a product, shared by CSV and JSON inputs.
///
/// The category stays a raw string here so an unknown tag surfaces as
/// [`ScoreError::UnsupportedCategory`] instead of a generic parse error.
/// Nutrients left blank (CSV) or omitted (JSON) count as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub energy_kj: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
    #[serde(default)]
    pub saturated_fat: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
    #[serde(default)]
    pub fruits: Option<f64>,
    #[serde(default)]
    pub fibre: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ScoreError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let category = record.category.parse()?;
        Ok(Product {
            name: record.name,
            category,
            profile: NutrientProfile {
                energy: record.energy_kj.unwrap_or(0.0),
                sugars: record.sugars.unwrap_or(0.0),
                saturated_fat: record.saturated_fat.unwrap_or(0.0),
                sodium: record.sodium.unwrap_or(0.0),
                fruits: record.fruits.unwrap_or(0.0),
                fibre: record.fibre.unwrap_or(0.0),
                protein: record.protein.unwrap_or(0.0),
            },
        })
    }
}

/// One scored product, as written to batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub name: String,
    pub category: Category,
    pub value: i32,
    pub positive: i32,
    pub negative: i32,
    pub grade: Grade,
}

impl ScoredProduct {
    pub fn new(name: impl Into<String>, score: NutritionalScore) -> Self {
        Self {
            name: name.into(),
            category: score.category,
            value: score.value,
            positive: score.positive,
            negative: score.negative,
            grade: score.grade(),
        }
    }
}
