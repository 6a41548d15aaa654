//! Threshold tables for the Nutri-Score algorithm.
//!
//! Every table is ordered from the highest breakpoint to the lowest. A value
//! earns `len - i` points where `i` is the first breakpoint it strictly
//! exceeds.

// ─────────────────────────────────────────────────────────────────────────────
// Unfavourable nutrients: solid foods
// ─────────────────────────────────────────────────────────────────────────────

/// Energy density, kJ/100g.
pub const FOOD_ENERGY_LEVELS: [f64; 10] = [
    3350.0, 3015.0, 2680.0, 2345.0, 2010.0, 1675.0, 1340.0, 1005.0, 670.0, 335.0,
];

/// Sugars, g/100g.
pub const FOOD_SUGARS_LEVELS: [f64; 10] = [
    45.0, 40.0, 36.0, 31.0, 27.0, 22.5, 18.0, 13.5, 9.0, 4.5,
];

/// Saturated fatty acids, g/100g.
pub const FOOD_SATURATED_FAT_LEVELS: [f64; 10] = [
    10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0,
];

/// Sodium, mg/100g.
pub const FOOD_SODIUM_LEVELS: [f64; 10] = [
    900.0, 810.0, 720.0, 630.0, 540.0, 450.0, 360.0, 270.0, 180.0, 90.0,
];

// ─────────────────────────────────────────────────────────────────────────────
// Unfavourable nutrients: beverages (2017 beverage grid)
// ─────────────────────────────────────────────────────────────────────────────

/// Energy density, kJ/100ml.
pub const BEVERAGE_ENERGY_LEVELS: [f64; 10] = [
    270.0, 240.0, 210.0, 180.0, 150.0, 120.0, 90.0, 60.0, 30.0, 0.0,
];

/// Sugars, g/100ml.
pub const BEVERAGE_SUGARS_LEVELS: [f64; 10] = [
    13.5, 12.0, 10.5, 9.0, 7.5, 6.0, 4.5, 3.0, 1.5, 0.0,
];

/// Saturated fatty acids, g/100ml. Same breakpoints as the food grid.
pub const BEVERAGE_SATURATED_FAT_LEVELS: [f64; 10] = [
    10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0,
];

/// Sodium, mg/100ml. Same breakpoints as the food grid.
pub const BEVERAGE_SODIUM_LEVELS: [f64; 10] = [
    900.0, 810.0, 720.0, 630.0, 540.0, 450.0, 360.0, 270.0, 180.0, 90.0,
];

// ─────────────────────────────────────────────────────────────────────────────
// Favourable nutrients (all categories)
// ─────────────────────────────────────────────────────────────────────────────

/// Fibre, g/100g.
pub const FIBRE_LEVELS: [f64; 5] = [4.7, 3.7, 2.8, 1.9, 0.9];

/// Protein, g/100g.
pub const PROTEIN_LEVELS: [f64; 5] = [8.0, 6.4, 4.8, 3.2, 1.6];

/// Fruit/vegetable percentage breakpoints and the points they award.
/// Not a uniform grid, so it is matched directly instead of by index.
pub const FRUIT_POINTS: [(f64, i32); 3] = [(80.0, 5), (60.0, 2), (40.0, 1)];

/// Fruit points at which the protein exclusion no longer applies.
pub const FRUIT_POINTS_MAX: i32 = 5;

/// Negative total from which protein stops counting (unless fruit is maxed).
pub const PROTEIN_CUTOFF_NEGATIVE: i32 = 11;

// ─────────────────────────────────────────────────────────────────────────────
// Score to letter
// ─────────────────────────────────────────────────────────────────────────────

/// Score breakpoints for foods: A <= -1 < B <= 2 < C <= 10 < D <= 18 < E.
pub const FOOD_GRADE_LEVELS: [f64; 4] = [18.0, 10.0, 2.0, -1.0];

/// Score breakpoints for beverages: A <= -2 < B <= 1 < C <= 5 < D <= 9 < E.
pub const BEVERAGE_GRADE_LEVELS: [f64; 4] = [9.0, 5.0, 1.0, -2.0];
