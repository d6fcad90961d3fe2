use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use oracle_core::corpus::FileReport;

pub fn run(dir: &Path) -> Result<(), String> {
    let config = super::config(dir, 0);
    let oracle = super::load_oracle(&config)?;
    let data = oracle.data();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Kind", "Status", "Entries"]);

    for report in &data.corpus_report {
        table.add_row(row(report, "quotations"));
    }
    table.add_row(row(&data.image_report, "images"));

    println!("{table}");
    println!();
    println!(
        "  {} quotations, {} images",
        data.corpus.len(),
        data.catalog.len()
    );
    if data.catalog.is_fallback() {
        println!("  {}", "Using the built-in default image.".dimmed());
    }
    if data.corpus.is_empty() {
        println!("  {}", "No quotations loaded; the oracle cannot answer.".yellow());
    }

    Ok(())
}

fn row(report: &FileReport, kind: &str) -> Vec<String> {
    let name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());
    let status = if report.present { "found" } else { "missing" };
    vec![
        name,
        kind.to_string(),
        status.to_string(),
        report.entries.to_string(),
    ]
}
