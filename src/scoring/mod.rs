pub mod calculations;
pub mod constants;
pub mod points;

pub use calculations::{PointBreakdown, compute_grade, compute_score, score_tagged};
pub use constants::*;
pub use points::{
    energy_points, fibre_points, fruit_points, points_from_thresholds, protein_points,
    saturated_fat_points, sodium_points, sugar_points,
};
