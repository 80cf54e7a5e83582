use crate::election::Election;
use crate::error::Result;
use crate::runoff::RunoffDecision;
use chrono::{DateTime, Utc};
use colored::*;
use itertools::Itertools;
use serde::Serialize;

/// Snapshot of an election: presidential standings and every district's seats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionReport {
    pub generated_at: DateTime<Utc>,
    pub tables_reported: u64,
    pub presidential: PresidentialSummary,
    pub districts: Vec<DistrictReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresidentialSummary {
    pub total_votes: u64,
    pub candidates: Vec<PartyResult>,
    /// Absent until at least one presidential vote is counted.
    pub decision: Option<RunoffDecision>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyResult {
    pub party: String,
    pub votes: u64,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictReport {
    pub name: String,
    pub first_table: u32,
    pub last_table: u32,
    pub seats_in_dispute: i64,
    pub total_votes: u64,
    pub results: Vec<PartyResult>,
}

impl ElectionReport {
    /// Finalizes every district that is not finalized yet and collects the results.
    pub fn build(election: &mut Election) -> Result<Self> {
        let grand_total = election.tally().grand_total();
        let candidates = election
            .parties()
            .iter()
            .map(|party| -> Result<PartyResult> {
                let votes = election.presidential_votes(party.id)?;
                Ok(PartyResult {
                    party: party.name.clone(),
                    votes,
                    percentage: percentage(votes, grand_total),
                    seats: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let decision = if grand_total > 0 {
            Some(election.runoff_decision()?)
        } else {
            None
        };

        let mut districts = Vec::with_capacity(election.districts().len());
        for district in election.districts().to_vec() {
            let seats = election.seats_for(district.id)?.clone();
            let total_votes = election.tally().district_total(district.id)?;

            let results = election
                .parties()
                .iter()
                .map(|party| -> Result<PartyResult> {
                    let votes = election.legislative_votes(party.id, district.id)?;
                    Ok(PartyResult {
                        party: party.name.clone(),
                        votes,
                        percentage: percentage(votes, total_votes),
                        seats: seats.seats_of(party.id),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            districts.push(DistrictReport {
                name: district.name,
                first_table: district.tables.start,
                last_table: district.tables.end,
                seats_in_dispute: district.seats,
                total_votes,
                results,
            });
        }

        Ok(Self {
            generated_at: Utc::now(),
            tables_reported: election.tally().tables_reported(),
            presidential: PresidentialSummary {
                total_votes: grand_total,
                candidates,
                decision,
            },
            districts,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the report to the terminal
    pub fn print_summary(&self) {
        println!("\n{}", "🗳️  Presidential Race".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_cyan());

        for candidate in self
            .presidential
            .candidates
            .iter()
            .sorted_by(|a, b| b.votes.cmp(&a.votes))
        {
            println!(
                "{:<30} {:>10} {:>7.2}%",
                candidate.party,
                candidate.votes.to_string().bright_white(),
                candidate.percentage
            );
        }

        println!("{}", "-".repeat(50).bright_cyan());
        match self.presidential.decision {
            Some(decision) if decision.requires_runoff() => {
                println!("{}", decision.to_string().bright_yellow().bold())
            }
            Some(decision) => println!("{}", decision.to_string().bright_green().bold()),
            None => println!("{}", "No presidential votes recorded".dimmed()),
        }

        println!("\n{}", "🏛️  Legislative Seats".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_cyan());

        for district in &self.districts {
            println!(
                "{} ({} seats, tables {}..{}, {} votes)",
                district.name.bright_white().bold(),
                district.seats_in_dispute,
                district.first_table,
                district.last_table,
                district.total_votes
            );

            let winners = district
                .results
                .iter()
                .filter(|result| result.seats.unwrap_or(0) > 0)
                .sorted_by(|a, b| b.seats.cmp(&a.seats))
                .map(|result| format!("{} {}", result.party, result.seats.unwrap_or(0)))
                .join(", ");

            if winners.is_empty() {
                println!("  {}", "no seats allocated".dimmed());
            } else {
                println!("  {}", winners.bright_green());
            }
        }

        println!(
            "\n{}: {}",
            "Tables reported".bright_white().bold(),
            self.tables_reported.to_string().bright_green().bold()
        );
    }
}

/// Share of `votes` in `total` as a percentage, 0 when nothing was cast.
pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        votes as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PartyVotes;

    #[test]
    fn test_build_finalizes_every_district() {
        let mut election =
            Election::new(&["Capital", "North"], &[3, 2], &["Green", "Blue"], &[5, 10]).unwrap();
        election
            .report_table(1, &[PartyVotes::new(46, 100), PartyVotes::new(54, 60)])
            .unwrap();

        let report = ElectionReport::build(&mut election).unwrap();
        assert!(election.is_finalized(0));
        assert!(election.is_finalized(1));

        assert_eq!(report.tables_reported, 1);
        assert_eq!(report.presidential.total_votes, 100);
        assert_eq!(report.presidential.decision, Some(RunoffDecision::Outright));
        assert_eq!(report.districts[0].results[0].seats, Some(2));
        assert_eq!(report.districts[0].results[1].seats, Some(1));
        assert_eq!(report.districts[1].total_votes, 0);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"seatsInDispute\": 3"));
        assert!(json.contains("\"decision\": \"outright\""));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_build_without_votes() {
        let mut election = Election::new(&["Capital"], &[3], &["Green"], &[5]).unwrap();
        let report = ElectionReport::build(&mut election).unwrap();
        assert_eq!(report.presidential.decision, None);
        assert_eq!(report.districts[0].results[0].seats, Some(0));
    }
}
