use crate::error::{ElectionError, Result};
use crate::model::TableId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Legal constants of the electoral system, as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rules {
    /// Minimum share of a district's legislative votes a party needs to win seats.
    pub threshold_percent: u32,
    /// A presidential share strictly above this avoids a runoff outright.
    pub outright_percent: u32,
    /// A share strictly above this avoids a runoff when the lead is wide enough.
    pub margin_floor_percent: u32,
    /// Lead over the runner-up required together with `margin_floor_percent`.
    pub margin_gap_percent: u32,
    /// The last party is the blank vote: it counts toward each district's
    /// total but never wins a seat.
    pub last_party_is_blank: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            threshold_percent: 3,
            outright_percent: 45,
            margin_floor_percent: 40,
            margin_gap_percent: 10,
            last_party_is_blank: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictConfig {
    pub name: String,
    pub seats: i64,
    /// Exclusive upper bound of the district's table range.
    pub last_table: TableId,
}

/// Static description of an election, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionConfig {
    pub districts: Vec<DistrictConfig>,
    pub parties: Vec<String>,
    #[serde(default)]
    pub rules: Rules,
}

impl ElectionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: ElectionConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parties.is_empty() {
            return Err(ElectionError::LengthMismatch(
                "at least one party is required".to_string(),
            ));
        }
        if self.districts.is_empty() {
            return Err(ElectionError::LengthMismatch(
                "at least one district is required".to_string(),
            ));
        }

        ensure_distinct(self.parties.iter().map(String::as_str))?;
        ensure_distinct(self.districts.iter().map(|d| d.name.as_str()))?;

        let mut previous = 0;
        for (district, config) in self.districts.iter().enumerate() {
            if config.last_table <= previous {
                return Err(ElectionError::UnsortedRanges {
                    district,
                    bound: config.last_table,
                });
            }
            previous = config.last_table;
        }

        Ok(())
    }
}

/// Party and district names must each be unique.
pub(crate) fn ensure_distinct<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    match names.into_iter().duplicates().next() {
        Some(name) => Err(ElectionError::DuplicateName(name.to_string())),
        None => Ok(()),
    }
}
