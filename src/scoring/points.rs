use crate::models::Category;
use crate::scoring::constants::*;

/// Map a value onto a descending threshold table.
///
/// Scans from the largest breakpoint and returns `len - i` for the first
/// breakpoint `i` that `value` strictly exceeds, or 0 if it exceeds none.
/// NaN exceeds nothing and scores 0.
pub fn points_from_thresholds(value: f64, thresholds: &[f64]) -> i32 {
    thresholds
        .iter()
        .position(|&level| value > level)
        .map(|i| (thresholds.len() - i) as i32)
        .unwrap_or(0)
}

/// Energy points. Water has no table and falls back to the food grid.
pub fn energy_points(kj: f64, category: Category) -> i32 {
    match category {
        Category::Beverage => points_from_thresholds(kj, &BEVERAGE_ENERGY_LEVELS),
        Category::Food | Category::Water => points_from_thresholds(kj, &FOOD_ENERGY_LEVELS),
    }
}

pub fn sugar_points(grams: f64, category: Category) -> i32 {
    match category {
        Category::Beverage => points_from_thresholds(grams, &BEVERAGE_SUGARS_LEVELS),
        Category::Food | Category::Water => points_from_thresholds(grams, &FOOD_SUGARS_LEVELS),
    }
}

pub fn saturated_fat_points(grams: f64, category: Category) -> i32 {
    match category {
        Category::Beverage => points_from_thresholds(grams, &BEVERAGE_SATURATED_FAT_LEVELS),
        Category::Food | Category::Water => {
            points_from_thresholds(grams, &FOOD_SATURATED_FAT_LEVELS)
        }
    }
}

pub fn sodium_points(mg: f64, category: Category) -> i32 {
    match category {
        Category::Beverage => points_from_thresholds(mg, &BEVERAGE_SODIUM_LEVELS),
        Category::Food | Category::Water => points_from_thresholds(mg, &FOOD_SODIUM_LEVELS),
    }
}

/// Fruit, vegetable, nut and oil points: 5 above 80%, 2 above 60%, 1 above 40%.
pub fn fruit_points(percent: f64) -> i32 {
    FRUIT_POINTS
        .iter()
        .find(|(level, _)| percent > *level)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn fibre_points(grams: f64) -> i32 {
    points_from_thresholds(grams, &FIBRE_LEVELS)
}

pub fn protein_points(grams: f64) -> i32 {
    points_from_thresholds(grams, &PROTEIN_LEVELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_from_thresholds_basic() {
        let table = [30.0, 20.0, 10.0];
        assert_eq!(points_from_thresholds(35.0, &table), 3);
        assert_eq!(points_from_thresholds(30.0, &table), 2);
        assert_eq!(points_from_thresholds(15.0, &table), 1);
        assert_eq!(points_from_thresholds(10.0, &table), 0);
        assert_eq!(points_from_thresholds(-5.0, &table), 0);
        assert_eq!(points_from_thresholds(f64::NAN, &table), 0);
    }

    #[test]
    fn test_points_from_empty_table() {
        assert_eq!(points_from_thresholds(100.0, &[]), 0);
    }

    #[test]
    fn test_sugar_points_food_grid() {
        let cases = [
            (46.0, 10),
            (45.0, 9),
            (40.0, 8),
            (36.0, 7),
            (31.0, 6),
            (27.0, 5),
            (22.5, 4),
            (18.0, 3),
            (13.5, 2),
            (9.0, 1),
            (4.5, 0),
            (1.0, 0),
        ];
        for (grams, expected) in cases {
            assert_eq!(sugar_points(grams, Category::Food), expected, "sugars {}", grams);
        }
    }

    #[test]
    fn test_sugar_points_boundary() {
        assert_eq!(sugar_points(45.0, Category::Food), 9);
        assert_eq!(sugar_points(45.0001, Category::Food), 10);
        assert_eq!(sugar_points(44.999, Category::Food), 9);
        assert_eq!(sugar_points(40.0001, Category::Food), 9);
        assert_eq!(sugar_points(40.0, Category::Food), 8);
    }

    #[test]
    fn test_energy_points_beverage_grid() {
        let cases = [
            (280.0, 10),
            (270.0, 9),
            (240.0, 8),
            (210.0, 7),
            (0.0, 0),
            (-1.0, 0),
            (5.0, 1),
        ];
        for (kj, expected) in cases {
            assert_eq!(energy_points(kj, Category::Beverage), expected, "energy {}", kj);
        }
    }

    #[test]
    fn test_beverage_grid_is_stricter() {
        // 100 kJ is nothing for a food but heavy for a drink
        assert_eq!(energy_points(100.0, Category::Food), 0);
        assert_eq!(energy_points(100.0, Category::Beverage), 4);
        assert_eq!(sugar_points(5.0, Category::Food), 1);
        assert_eq!(sugar_points(5.0, Category::Beverage), 4);
    }

    #[test]
    fn test_fruit_points() {
        assert_eq!(fruit_points(88.9), 5);
        assert_eq!(fruit_points(80.0), 2);
        assert_eq!(fruit_points(60.0), 1);
        assert_eq!(fruit_points(46.0), 1);
        assert_eq!(fruit_points(40.0), 0);
        assert_eq!(fruit_points(-3.0), 0);
    }

    #[test]
    fn test_fibre_and_protein_points() {
        assert_eq!(fibre_points(7.8), 5);
        assert_eq!(fibre_points(4.0), 4);
        assert_eq!(fibre_points(0.6), 0);
        assert_eq!(protein_points(6.5), 4);
        assert_eq!(protein_points(3.5), 2);
        assert_eq!(protein_points(0.0), 0);
    }

    #[test]
    fn test_points_monotonic_across_tables() {
        let tables: [&[f64]; 10] = [
            &FOOD_ENERGY_LEVELS,
            &FOOD_SUGARS_LEVELS,
            &FOOD_SATURATED_FAT_LEVELS,
            &FOOD_SODIUM_LEVELS,
            &BEVERAGE_ENERGY_LEVELS,
            &BEVERAGE_SUGARS_LEVELS,
            &BEVERAGE_SATURATED_FAT_LEVELS,
            &BEVERAGE_SODIUM_LEVELS,
            &FIBRE_LEVELS,
            &PROTEIN_LEVELS,
        ];
        for table in tables {
            let mut previous = i32::MIN;
            let mut value = -10.0;
            while value < 4000.0 {
                let points = points_from_thresholds(value, table);
                assert!(points >= previous, "{:?} dropped at {}", table, value);
                assert!((0..=table.len() as i32).contains(&points));
                previous = points;
                value += 0.25;
            }
        }
    }

    #[test]
    fn test_tables_strictly_descending() {
        let tables: [&[f64]; 12] = [
            &FOOD_ENERGY_LEVELS,
            &FOOD_SUGARS_LEVELS,
            &FOOD_SATURATED_FAT_LEVELS,
            &FOOD_SODIUM_LEVELS,
            &BEVERAGE_ENERGY_LEVELS,
            &BEVERAGE_SUGARS_LEVELS,
            &BEVERAGE_SATURATED_FAT_LEVELS,
            &BEVERAGE_SODIUM_LEVELS,
            &FIBRE_LEVELS,
            &PROTEIN_LEVELS,
            &FOOD_GRADE_LEVELS,
            &BEVERAGE_GRADE_LEVELS,
        ];
        for table in tables {
            assert!(table.windows(2).all(|w| w[0] > w[1]), "{:?}", table);
        }
    }
}
