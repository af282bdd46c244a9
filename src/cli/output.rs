//! Output formatting utilities

use crate::application::{Page, Summary};
use crate::domain::entry::format_timestamp;
use crate::domain::{JournalEntry, YearlyPivot};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format one entry as a header line followed by its text
pub fn format_entry(entry: &JournalEntry) -> String {
    let date = entry
        .created_at
        .map(format_timestamp)
        .unwrap_or_else(|| "(no date)".to_string());

    let mut output = format!("[{}] {}\n", entry.id, date);
    for line in entry.text.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    if let Some(attachment) = &entry.attachment_ref {
        output.push_str(&format!("    attachment: {}\n", attachment));
    }
    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries.iter().map(format_entry).collect()
}

/// Format a page with a 1-based position footer
pub fn format_page(page: &Page) -> String {
    let mut output = format_entry_list(&page.entries);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(&format!("Page {} / {}", page.index + 1, page.total_pages));
    output
}

pub fn format_summary(summary: &Summary) -> String {
    match summary {
        Summary::Weekly(series) if series.is_empty() => "No entries found".to_string(),
        Summary::Monthly(series) if series.is_empty() => "No entries found".to_string(),
        Summary::Weekly(series) => series
            .iter()
            .map(|(week, count)| format!("{}  {}\n", week.format("%Y-%m-%d"), count))
            .collect(),
        Summary::Monthly(series) => series
            .iter()
            .map(|(month, count)| format!("{}  {}\n", month, count))
            .collect(),
        Summary::Yearly(pivot) => format_pivot(pivot),
    }
}

/// Render the month-by-year table, one column per year
pub fn format_pivot(pivot: &YearlyPivot) -> String {
    if pivot.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::from("Month");
    for year in pivot.years() {
        output.push_str(&format!(" {:>6}", year));
    }
    output.push('\n');

    let years = pivot.years();
    for (month, name) in (1..=12u32).zip(MONTH_NAMES) {
        output.push_str(&format!("{:<5}", name));
        for &year in &years {
            output.push_str(&format!(" {:>6}", pivot.get(month, year).unwrap_or(0)));
        }
        output.push('\n');
    }

    output.push_str("Total");
    for &year in &years {
        output.push_str(&format!(" {:>6}", pivot.year_total(year)));
    }
    output.push('\n');
    output
}
