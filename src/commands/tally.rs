use seat_tally::config::ElectionConfig;
use seat_tally::election::Election;
use seat_tally::error::Result;
use seat_tally::model::TableReport;
use seat_tally::reports::ElectionReport;
use colored::Colorize;
use instant::Instant;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Count every table in `tables_path` and print (or write) the results.
pub fn tally(
    config_path: &Path,
    tables_path: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = ElectionConfig::load(config_path)?;
    let mut election = Election::from_config(&config)?;

    let reader = BufReader::new(File::open(tables_path)?);
    let tables: Vec<TableReport> = serde_json::from_reader(reader)?;

    info!(tables = tables.len(), "tallying tables");
    let start = Instant::now();
    for table in &tables {
        election.report_table(table.table, &table.votes)?;
    }
    let report = ElectionReport::build(&mut election)?;
    let elapsed_ms = start.elapsed().as_millis();

    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
        println!(
            "{}: {} ms",
            "Duration".bright_white().bold(),
            elapsed_ms.to_string().bright_green().bold()
        );
    }

    if let Some(path) = output {
        fs::write(path, report.to_json()?)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
