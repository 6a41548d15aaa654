use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Kind of product being scored. Selects the threshold tables and the
/// aggregation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Food,
    Beverage,
    /// Plain water. Always scores 0 / A.
    Water,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Beverage, Category::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Beverage => "beverage",
            Category::Water => "water",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "beverage" | "drink" => Ok(Category::Beverage),
            "water" => Ok(Category::Water),
            _ => Err(ScoreError::UnsupportedCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ScoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}
