use seat_tally::config::ElectionConfig;
use seat_tally::election::Election;
use seat_tally::error::Result;
use colored::Colorize;
use std::path::Path;

/// Validate an election configuration and print what it describes.
pub fn info(config_path: &Path) -> Result<()> {
    let config = ElectionConfig::load(config_path)?;
    let election = Election::from_config(&config)?;

    println!(
        "📋 {} districts, {} parties, {} tables",
        election.districts().len().to_string().bright_yellow(),
        election.parties().len().to_string().bright_yellow(),
        election.tally().ranges().table_count().to_string().bright_yellow()
    );

    for district in election.districts() {
        println!(
            "  🏛️  {:<24} tables {:>6}..{:<6} {} seats",
            district.name.bright_cyan(),
            district.tables.start,
            district.tables.end,
            district.seats
        );
        if district.seats < 0 {
            eprintln!("    {}", "⚠️  negative seat quota".red());
        }
    }

    for party in election.parties() {
        println!("  👥 {:>3} {}", party.id, party.name);
    }

    let rules = election.rules();
    println!(
        "📏 threshold {}%, outright above {}%, or above {}% with a {} point lead",
        rules.threshold_percent,
        rules.outright_percent,
        rules.margin_floor_percent,
        rules.margin_gap_percent
    );

    if rules.last_party_is_blank {
        if let Some(blank) = election.parties().last() {
            println!("⬜ {} counts toward totals but wins no seats", blank.name.dimmed());
        }
    }

    Ok(())
}
