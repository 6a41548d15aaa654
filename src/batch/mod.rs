mod persistence;
mod render;

use tracing::debug;

use crate::models::{Product, ScoredProduct};
use crate::scoring::compute_score;

pub use persistence::{FileFormat, load_products, save_results};
pub use render::{display_results, display_score};

/// Score every product, keeping input order.
pub fn score_products(products: &[Product]) -> Vec<ScoredProduct> {
    products
        .iter()
        .map(|product| {
            let score = compute_score(&product.profile, product.category);
            debug!(name = %product.name, value = score.value, "scored product");
            ScoredProduct::new(product.name.clone(), score)
        })
        .collect()
}
