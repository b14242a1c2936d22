//! Command orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use reorg_codec::campaign_from_json;
use reorg_engine::{project_rows, transform_rows};
use reorg_ingest::read_csv_table;
use reorg_model::Campaign;
use reorg_output::{resolve_output_filename_today, write_rows_file};

use crate::cli::{InspectArgs, ProcessArgs};

/// Outcome of a `process` run.
#[derive(Debug, Clone)]
pub struct ProcessSummary {
    pub campaign_name: String,
    pub rows: usize,
    pub columns: usize,
    pub ruled_columns: usize,
    pub rules: usize,
    /// Absent on dry runs.
    pub output_path: Option<PathBuf>,
}

/// Run a CSV file through a campaign and write the export.
pub fn run_process(args: &ProcessArgs) -> Result<ProcessSummary> {
    let campaign = load_campaign(&args.campaign)?;
    info!(
        campaign = %campaign.name,
        columns = campaign.columns.len(),
        rules = campaign.rule_count(),
        "loaded campaign"
    );

    let table = read_csv_table(&args.input)
        .with_context(|| format!("reading input csv {}", args.input.display()))?;
    let rows = table.to_rows();
    info!(rows = rows.len(), "decoded input rows");

    let transformed = transform_rows(&rows, &campaign.columns);
    let (headers, output_rows) = if args.raw_headers {
        (table.headers.clone(), transformed)
    } else {
        let headers: Vec<String> = campaign
            .columns_ordered()
            .iter()
            .map(|column| column.display_name.clone())
            .collect();
        (headers, project_rows(&transformed, &campaign.columns))
    };

    let output_path = if args.dry_run {
        None
    } else {
        let stem = args
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("input");
        let filename = resolve_output_filename_today(&campaign.output_filename_template, stem);
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let path = dir.join(filename);
        write_rows_file(&path, &headers, &output_rows)
            .with_context(|| format!("writing output csv {}", path.display()))?;
        info!(path = %path.display(), "wrote output file");
        Some(path)
    };

    Ok(ProcessSummary {
        campaign_name: campaign.name.clone(),
        rows: output_rows.len(),
        columns: campaign.columns.len(),
        ruled_columns: campaign
            .columns
            .iter()
            .filter(|column| !column.rules.is_empty())
            .count(),
        rules: campaign.rule_count(),
        output_path,
    })
}

/// Print a campaign's column and rule configuration.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let campaign = load_campaign(&args.campaign)?;

    println!("Campaign: {}", campaign.name);
    if !campaign.description.is_empty() {
        println!("{}", campaign.description);
    }
    if !campaign.output_filename_template.is_empty() {
        println!("Output template: {}", campaign.output_filename_template);
    }
    println!();

    let mut columns = Table::new();
    columns.set_header(["#", "Source field", "Output field", "Required", "Rules"]);
    for column in campaign.columns_ordered() {
        columns.add_row([
            column.position.to_string(),
            column.source_name.clone(),
            column.display_name.clone(),
            if column.required { "yes" } else { "no" }.to_string(),
            column.rules.len().to_string(),
        ]);
    }
    println!("{columns}");

    if campaign.has_rules() {
        let mut rules = Table::new();
        rules.set_header(["Column", "Order", "Rule"]);
        for column in campaign.columns_ordered() {
            for rule in &column.rules {
                rules.add_row([
                    column.display_name.clone(),
                    rule.order.to_string(),
                    rule.summary(),
                ]);
            }
        }
        println!("{rules}");
    }

    Ok(())
}

fn load_campaign(path: &Path) -> Result<Campaign> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading campaign document {}", path.display()))?;
    campaign_from_json(&json)
        .with_context(|| format!("decoding campaign document {}", path.display()))
}
