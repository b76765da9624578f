use crate::models::{Dataset, Entry, SummaryResponse};

pub fn build_summary(dataset: &Dataset) -> SummaryResponse {
    SummaryResponse {
        goal: dataset.goal(),
        progress: dataset.progress(),
        progress_text: progress_text(dataset),
        percent: format_two_decimals(progress_percent(dataset)),
        last_ride: last_entry(dataset).date.clone(),
        longest_ride: longest_entry(dataset),
        entry_count: dataset.entries().len(),
    }
}

pub fn progress_percent(dataset: &Dataset) -> f64 {
    dataset.progress() / (dataset.goal() / 100.0)
}

/// Percentage as the bar shows it: rounded to two decimals.
pub fn fill_target(dataset: &Dataset) -> f64 {
    format_two_decimals(progress_percent(dataset))
        .parse()
        .unwrap_or(0.0)
}

pub fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

pub fn progress_text(dataset: &Dataset) -> String {
    format!(
        "{}/{} km",
        format_two_decimals(dataset.progress()),
        dataset.goal()
    )
}

/// Most recent ride by source order, not by date value.
pub fn last_entry(dataset: &Dataset) -> &Entry {
    let entries = dataset.entries();
    &entries[entries.len() - 1]
}

pub fn longest_entry(dataset: &Dataset) -> f64 {
    dataset
        .entries()
        .iter()
        .map(|entry| entry.distance)
        .fold(f64::NEG_INFINITY, f64::max)
}
