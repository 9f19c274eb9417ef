use serde::{Deserialize, Serialize};

/// Estimates at or below this are treated as malformed or placeholder salary
/// data and excluded from aggregation.
pub const MIN_PLAUSIBLE_SALARY: u64 = 20_000;

/// Applied to the lower bound when a listing states no upper bound.
pub const LOWER_BOUND_FACTOR: f64 = 1.2;

/// Applied to the upper bound when a listing states no lower bound.
pub const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Aggregated statistics for one language on one job board.
///
/// Built once after all pages for the language are fetched, never mutated.
/// `average_salary` is 0 when `vacancies_processed` is 0.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Predicts a single salary figure from a (possibly partial) range.
///
/// A zero bound means "not specified" on both boards and counts as absent.
/// With both bounds the midpoint is used; with one bound the figure is nudged
/// 20% above the floor or 20% below the ceiling. Returns `None` when neither
/// bound is usable.
pub fn predict_salary(payment_from: Option<u64>, payment_to: Option<u64>) -> Option<u64> {
    let payment_from = payment_from.filter(|from| *from > 0);
    let payment_to = payment_to.filter(|to| *to > 0);

    match (payment_from, payment_to) {
        (Some(from), Some(to)) => Some((from + to) / 2),
        (Some(from), None) => Some((from as f64 * LOWER_BOUND_FACTOR) as u64),
        (None, Some(to)) => Some((to as f64 * UPPER_BOUND_FACTOR) as u64),
        (None, None) => None,
    }
}

/// Reduces the per-listing estimates for one language to summary statistics.
///
/// Only estimates strictly above [`MIN_PLAUSIBLE_SALARY`] count as processed.
/// `vacancies_found` is the server-reported total, which may exceed the number
/// of listings actually fetched.
pub fn summarize(salaries: &[Option<u64>], vacancies_found: u64) -> LanguageStats {
    let processed: Vec<u64> = salaries
        .iter()
        .flatten()
        .copied()
        .filter(|salary| *salary > MIN_PLAUSIBLE_SALARY)
        .collect();

    let vacancies_processed = processed.len() as u64;
    let average_salary = if processed.is_empty() {
        0
    } else {
        processed.iter().sum::<u64>() / vacancies_processed
    };

    LanguageStats {
        vacancies_found,
        vacancies_processed,
        average_salary,
    }
}
