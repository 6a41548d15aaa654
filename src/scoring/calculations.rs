use tracing::debug;

use crate::error::Result;
use crate::models::{Category, Grade, NutrientProfile, NutritionalScore};
use crate::scoring::constants::*;
use crate::scoring::points::*;

/// Point breakdown for one product before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointBreakdown {
    pub energy: i32,
    pub sugars: i32,
    pub saturated_fat: i32,
    pub sodium: i32,
    pub fruits: i32,
    pub fibre: i32,
    pub protein: i32,
}

impl PointBreakdown {
    /// Score every nutrient of `profile` against the tables for `category`.
    pub fn from_profile(profile: &NutrientProfile, category: Category) -> Self {
        Self {
            energy: energy_points(profile.energy, category),
            sugars: sugar_points(profile.sugars, category),
            saturated_fat: saturated_fat_points(profile.saturated_fat, category),
            sodium: sodium_points(profile.sodium, category),
            fruits: fruit_points(profile.fruits),
            fibre: fibre_points(profile.fibre),
            protein: protein_points(profile.protein),
        }
    }

    /// Sum of the unfavourable nutrient points.
    pub fn negative(&self) -> i32 {
        self.energy + self.sugars + self.saturated_fat + self.sodium
    }

    /// Sum of the favourable nutrient points.
    pub fn positive(&self) -> i32 {
        self.fruits + self.fibre + self.protein
    }

    /// Whether protein is left out of the final score.
    ///
    /// Applies once the negative total reaches the cutoff, unless fruit
    /// content already earns the maximum.
    pub fn excludes_protein(&self) -> bool {
        self.negative() >= PROTEIN_CUTOFF_NEGATIVE && self.fruits < FRUIT_POINTS_MAX
    }

    /// Final signed score.
    pub fn value(&self) -> i32 {
        if self.excludes_protein() {
            self.negative() - self.fibre - self.fruits
        } else {
            self.negative() - self.positive()
        }
    }
}

/// Compute the nutritional score of `profile` as a product of `category`.
///
/// Water is neutral and scores 0 without looking at the nutrients.
pub fn compute_score(profile: &NutrientProfile, category: Category) -> NutritionalScore {
    match category {
        Category::Water => NutritionalScore::new(0, 0, 0, Category::Water),
        Category::Food | Category::Beverage => {
            let points = PointBreakdown::from_profile(profile, category);
            debug!(
                %category,
                energy = points.energy,
                sugars = points.sugars,
                saturated_fat = points.saturated_fat,
                sodium = points.sodium,
                fruits = points.fruits,
                fibre = points.fibre,
                protein = points.protein,
                "nutrient points"
            );
            if points.excludes_protein() {
                debug!(
                    negative = points.negative(),
                    protein = points.protein,
                    "protein points excluded"
                );
            }
            NutritionalScore::new(points.value(), points.positive(), points.negative(), category)
        }
    }
}

/// Map a score to its letter grade for `category`.
pub fn compute_grade(score: i32, category: Category) -> Grade {
    let levels: &[f64] = match category {
        Category::Water => return Grade::A,
        Category::Food => &FOOD_GRADE_LEVELS,
        Category::Beverage => &BEVERAGE_GRADE_LEVELS,
    };
    let index = points_from_thresholds(score as f64, levels) as usize;
    Grade::LETTERS[index]
}

/// Score a product whose category arrives as an untyped tag.
///
/// Fails with [`ScoreError::UnsupportedCategory`](crate::ScoreError::UnsupportedCategory)
/// when the tag names no known category.
pub fn score_tagged(profile: &NutrientProfile, category: &str) -> Result<NutritionalScore> {
    let category: Category = category.parse()?;
    Ok(compute_score(profile, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;

    fn profile(e: f64, s: f64, sfa: f64, na: f64, fr: f64, fib: f64, p: f64) -> NutrientProfile {
        NutrientProfile {
            energy: e,
            sugars: s,
            saturated_fat: sfa,
            sodium: na,
            fruits: fr,
            fibre: fib,
            protein: p,
        }
    }

    #[test]
    fn test_breakdown_sums() {
        let points = PointBreakdown::from_profile(
            &profile(0.0, 10.0, 2.0, 500.0, 60.0, 4.0, 2.0),
            Category::Food,
        );
        assert_eq!(points.negative(), 8);
        assert_eq!(points.positive(), 6);
        assert!(!points.excludes_protein());
        assert_eq!(points.value(), 2);
    }

    #[test]
    fn test_protein_excluded_at_cutoff() {
        // 741 kJ, 18.7 g sugars, 6.1 g sat fat -> 2 + 4 + 6 = 12
        let points = PointBreakdown::from_profile(
            &profile(741.0, 18.7, 6.1, 60.0, 0.0, 0.0, 3.6),
            Category::Food,
        );
        assert!(points.excludes_protein());
        assert_eq!(points.value(), 12);
    }

    #[test]
    fn test_protein_kept_when_fruit_maxed() {
        let points = PointBreakdown::from_profile(
            &profile(2132.0, 30.0, 9.6, 160.0, 88.9, 7.8, 3.5),
            Category::Food,
        );
        assert_eq!(points.fruits, FRUIT_POINTS_MAX);
        assert!(!points.excludes_protein());
        assert_eq!(points.value(), 22 - 12);
    }

    #[test]
    fn test_water_ignores_nutrients() {
        let sugary = profile(3000.0, 50.0, 12.0, 1000.0, 0.0, 0.0, 0.0);
        let score = compute_score(&sugary, Category::Water);
        assert_eq!(score, NutritionalScore::new(0, 0, 0, Category::Water));
        assert_eq!(score.grade(), Grade::A);
    }

    #[test]
    fn test_beverage_uses_own_grid() {
        // 180 kJ, 9 g sugars: nothing for a food, 14 points for a drink
        let soda = profile(180.0, 9.0, 0.0, 10.0, 0.0, 0.0, 0.0);
        let as_food = compute_score(&soda, Category::Food);
        let as_drink = compute_score(&soda, Category::Beverage);
        assert_eq!(as_food.negative, 1);
        assert_eq!(as_drink.negative, 6 + 6);
        assert_eq!(as_drink.grade(), Grade::E);
    }

    #[test]
    fn test_food_grade_boundaries() {
        let cases = [
            (-15, Grade::A),
            (-1, Grade::A),
            (0, Grade::B),
            (2, Grade::B),
            (3, Grade::C),
            (10, Grade::C),
            (11, Grade::D),
            (18, Grade::D),
            (19, Grade::E),
            (40, Grade::E),
        ];
        for (score, expected) in cases {
            assert_eq!(compute_grade(score, Category::Food), expected, "score {}", score);
        }
    }

    #[test]
    fn test_beverage_grade_boundaries() {
        let cases = [
            (-2, Grade::A),
            (-1, Grade::B),
            (1, Grade::B),
            (2, Grade::C),
            (5, Grade::C),
            (6, Grade::D),
            (9, Grade::D),
            (10, Grade::E),
        ];
        for (score, expected) in cases {
            assert_eq!(compute_grade(score, Category::Beverage), expected, "score {}", score);
        }
    }

    #[test]
    fn test_water_grade_always_a() {
        for score in -20..=50 {
            assert_eq!(compute_grade(score, Category::Water), Grade::A);
        }
    }

    #[test]
    fn test_score_tagged() {
        let p = profile(0.0, 10.0, 2.0, 500.0, 60.0, 4.0, 2.0);
        assert_eq!(score_tagged(&p, "Food").unwrap().value, 2);
        assert!(matches!(
            score_tagged(&p, "cheese"),
            Err(ScoreError::UnsupportedCategory(_))
        ));
    }
}
