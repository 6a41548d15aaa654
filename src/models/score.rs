use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::models::Category;
use crate::scoring::compute_grade;

/// Nutri-Score letter. `A` is the best grade, `E` the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Letters ordered from best to worst, indexed by threshold points.
    pub const LETTERS: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            _ => Err(ScoreError::InvalidGrade(s.to_string())),
        }
    }
}

/// Result of scoring one product.
///
/// `negative` and `positive` are the raw point sums. `value` is the final
/// score after the category rule is applied, so it is not always
/// `negative - positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalScore {
    pub value: i32,
    pub positive: i32,
    pub negative: i32,
    pub category: Category,
}

impl NutritionalScore {
    pub fn new(value: i32, positive: i32, negative: i32, category: Category) -> Self {
        Self {
            value,
            positive,
            negative,
            category,
        }
    }

    /// Letter grade for this score under its own category.
    pub fn grade(&self) -> Grade {
        compute_grade(self.value, self.category)
    }
}
