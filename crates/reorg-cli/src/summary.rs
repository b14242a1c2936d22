//! Human-readable run summary.

use crate::commands::ProcessSummary;

pub fn print_summary(summary: &ProcessSummary) {
    println!("Campaign:        {}", summary.campaign_name);
    println!(
        "Columns:         {} ({} with rules, {} rules total)",
        summary.columns, summary.ruled_columns, summary.rules
    );
    println!("Rows processed:  {}", summary.rows);
    match &summary.output_path {
        Some(path) => println!("Output:          {}", path.display()),
        None => println!("Output:          (dry run, nothing written)"),
    }
}
