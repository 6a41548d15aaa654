mod category;
mod product;
mod profile;
mod score;

pub use category::Category;
pub use product::{Product, ProductRecord, ScoredProduct};
pub use profile::{
    KJ_PER_KCAL, NutrientProfile, SALT_TO_SODIUM_DIVISOR, energy_from_kcal, sodium_from_salt,
};
pub use score::{Grade, NutritionalScore};
