use crate::models::{Grade, NutritionalScore, ScoredProduct};

/// Display scored products in a formatted table.
pub fn display_results(results: &[ScoredProduct]) {
    if results.is_empty() {
        println!("No products to score.");
        return;
    }

    println!();
    println!("=== Nutri-Score ===");
    println!();

    let max_name_len = name_width(results);

    for (i, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:<8} | N {:>2} P {:>2} => {:>3}  [{}]",
            i + 1,
            result.name,
            result.category.as_str(),
            result.negative,
            result.positive,
            result.value,
            result.grade,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total products: {}", results.len());
    println!("{}", grade_counts(results));
    println!();
}

/// Display a single score with its point breakdown.
pub fn display_score(score: &NutritionalScore) {
    println!("Category:        {}", score.category);
    println!("Negative points: {}", score.negative);
    println!("Positive points: {}", score.positive);
    println!("Nutritional score: {}", score.value);
    println!("Nutri-Score: {}", score.grade());
}

/// Widest product name in characters, for column alignment.
fn name_width(results: &[ScoredProduct]) -> usize {
    results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// "A: n  B: n ..." tally of grades.
fn grade_counts(results: &[ScoredProduct]) -> String {
    Grade::LETTERS
        .iter()
        .map(|grade| {
            let count = results.iter().filter(|r| r.grade == *grade).count();
            format!("{}: {}", grade, count)
        })
        .collect::<Vec<_>>()
        .join("  ")
}
