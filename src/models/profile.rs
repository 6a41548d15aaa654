use serde::{Deserialize, Serialize};

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Salt mass divided by this factor gives the sodium mass.
pub const SALT_TO_SODIUM_DIVISOR: f64 = 2.5;

/// Convert energy density from kcal/100g to kJ/100g.
#[inline]
pub fn energy_from_kcal(kcal: f64) -> f64 {
    kcal * KJ_PER_KCAL
}

/// Convert salt content (mg/100g) to sodium content (mg/100g).
#[inline]
pub fn sodium_from_salt(salt_mg: f64) -> f64 {
    salt_mg / SALT_TO_SODIUM_DIVISOR
}

/// Per-100g nutrient measurements used by the scoring algorithm.
///
/// Values outside the physical domain (negative, NaN) are accepted and simply
/// earn no points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy density in kJ/100g.
    #[serde(rename = "energy_kj", default)]
    pub energy: f64,

    /// Sugars in g/100g.
    #[serde(default)]
    pub sugars: f64,

    /// Saturated fatty acids in g/100g.
    #[serde(default)]
    pub saturated_fat: f64,

    /// Sodium in mg/100g.
    #[serde(default)]
    pub sodium: f64,

    /// Fruits, vegetables, pulses, nuts and rapeseed/walnut/olive oils, as a
    /// percentage of the total.
    #[serde(default)]
    pub fruits: f64,

    /// Fibre in g/100g.
    #[serde(default)]
    pub fibre: f64,

    /// Protein in g/100g.
    #[serde(default)]
    pub protein: f64,
}

impl NutrientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_energy_kj(mut self, kj: f64) -> Self {
        self.energy = kj;
        self
    }

    pub fn with_energy_kcal(mut self, kcal: f64) -> Self {
        self.energy = energy_from_kcal(kcal);
        self
    }

    pub fn with_sugars(mut self, grams: f64) -> Self {
        self.sugars = grams;
        self
    }

    pub fn with_saturated_fat(mut self, grams: f64) -> Self {
        self.saturated_fat = grams;
        self
    }

    pub fn with_sodium(mut self, mg: f64) -> Self {
        self.sodium = mg;
        self
    }

    pub fn with_salt(mut self, mg: f64) -> Self {
        self.sodium = sodium_from_salt(mg);
        self
    }

    pub fn with_fruits(mut self, percent: f64) -> Self {
        self.fruits = percent;
        self
    }

    pub fn with_fibre(mut self, grams: f64) -> Self {
        self.fibre = grams;
        self
    }

    pub fn with_protein(mut self, grams: f64) -> Self {
        self.protein = grams;
        self
    }

    /// Basic validation: every measurement is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.energy,
            self.sugars,
            self.saturated_fat,
            self.sodium,
            self.fruits,
            self.fibre,
            self.protein,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "E:{}kJ S:{}g SFA:{}g Na:{}mg F:{}% Fib:{}g P:{}g",
            self.energy,
            self.sugars,
            self.saturated_fat,
            self.sodium,
            self.fruits,
            self.fibre,
            self.protein
        )
    }
}
