//! Output filename resolution from a campaign template.
//!
//! Templates may contain `__{date}__` (resolved to the current date as
//! `YYYY-MM-DD`) and `__{original_name}__` (the input file's stem). The
//! resolved name always carries a `.csv` extension.

use chrono::{Local, NaiveDate};

pub const DATE_TOKEN: &str = "__{date}__";
pub const ORIGINAL_NAME_TOKEN: &str = "__{original_name}__";

/// Fallback name for campaigns without a template.
pub const DEFAULT_OUTPUT_NAME: &str = "processed.csv";

/// Resolve a filename template against an input file stem and a date.
pub fn resolve_output_filename(template: &str, original_stem: &str, date: NaiveDate) -> String {
    if template.trim().is_empty() {
        return DEFAULT_OUTPUT_NAME.to_string();
    }
    let resolved = template
        .replace(ORIGINAL_NAME_TOKEN, original_stem)
        .replace(DATE_TOKEN, &date.format("%Y-%m-%d").to_string());
    ensure_csv_extension(resolved)
}

/// Resolve a filename template using today's local date.
pub fn resolve_output_filename_today(template: &str, original_stem: &str) -> String {
    resolve_output_filename(template, original_stem, Local::now().date_naive())
}

fn ensure_csv_extension(name: String) -> String {
    if name.to_ascii_lowercase().ends_with(".csv") {
        name
    } else {
        format!("{name}.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn resolves_date_and_original_name_tokens() {
        let name = resolve_output_filename("__{original_name}__-__{date}__", "clients", day());
        assert_eq!(name, "clients-2026-08-30.csv");
    }

    #[test]
    fn appends_csv_extension_when_missing() {
        assert_eq!(resolve_output_filename("export", "in", day()), "export.csv");
        assert_eq!(
            resolve_output_filename("export.CSV", "in", day()),
            "export.CSV"
        );
    }

    #[test]
    fn empty_template_falls_back_to_default() {
        assert_eq!(resolve_output_filename("  ", "in", day()), DEFAULT_OUTPUT_NAME);
    }

    #[test]
    fn template_without_tokens_passes_through() {
        assert_eq!(
            resolve_output_filename("weekly_export.csv", "in", day()),
            "weekly_export.csv"
        );
    }
}
