//! Typed records decoded from the three dataset tables.

use serde::{Deserialize, Serialize};

use crate::routes::StationKey;

use super::error::StatsError;
use super::table::Table;

pub const DELAY_LIKELIHOOD_FILE: &str = "delay_likelihood.json";
pub const INCIDENTS_FILE: &str = "incidents.json";
pub const STATION_RANKING_FILE: &str = "station_ranking_with_latlon.json";

/// Description used for incidents recorded without one.
pub const UNDESCRIBED_INCIDENT: &str = "Other";

/// Share of days with a delay at one station during one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayLikelihoodRecord {
    pub station: StationKey,
    pub hour: u8,
    pub days_with_delays: u32,
    pub average_delay_minutes: f64,
    pub likelihood_percent: f64,
}

/// One recorded delay incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub station: StationKey,
    pub year: i32,
    /// As recorded, `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub description: String,
    pub min_delay: f64,
}

impl IncidentRecord {
    /// Calendar month (1-12) parsed from `date`, if it has one.
    pub fn month(&self) -> Option<u32> {
        let month: u32 = self.date.split(|c| c == '-' || c == '/').nth(1)?.trim().parse().ok()?;
        (1..=12).contains(&month).then_some(month)
    }
}

/// Danger and usage ranking of one station, with its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRankRecord {
    pub station: StationKey,
    pub danger_rank: u32,
    pub incident_count: u32,
    pub average_danger: f64,
    pub combined_score: f64,
    /// Average daily boardings.
    pub usage: f64,
    pub usage_rank: u32,
    pub latitude: f64,
    pub longitude: f64,
}

pub fn decode_delay_likelihood(table: &Table) -> Result<Vec<DelayLikelihoodRecord>, StatsError> {
    let line = table.column("line")?;
    let name = table.column("standard_name")?;
    let hour = table.column("Hour")?;
    let days = table.column("Days_With_Delays")?;
    let average = table.column("Average_Delay_Minutes")?;
    let likelihood = table.column("Delay_Likelihood_Percent")?;

    table
        .rows()
        .map(|row| {
            let h = row.u32(hour)?;
            if h > 23 {
                return Err(row.invalid(hour, "an hour between 0 and 23"));
            }
            Ok(DelayLikelihoodRecord {
                station: StationKey::new(row.str(line)?, row.str(name)?),
                hour: h as u8,
                days_with_delays: row.u32(days)?,
                average_delay_minutes: row.f64(average)?,
                likelihood_percent: row.f64(likelihood)?,
            })
        })
        .collect()
}

pub fn decode_incidents(table: &Table) -> Result<Vec<IncidentRecord>, StatsError> {
    let year = table.column("Year")?;
    let date = table.column("Date")?;
    let time = table.column("Time")?;
    let name = table.column("standard_name")?;
    let line = table.column("line")?;
    let description = table.column("Description")?;
    let delay = table.column("Min Delay")?;

    table
        .rows()
        .map(|row| {
            let description = row
                .opt_str(description)?
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(UNDESCRIBED_INCIDENT);
            Ok(IncidentRecord {
                station: StationKey::new(row.str(line)?, row.str(name)?),
                year: row.i32(year)?,
                date: row.str(date)?.to_string(),
                time: row.str(time)?.to_string(),
                description: description.to_string(),
                min_delay: row.f64(delay)?,
            })
        })
        .collect()
}

pub fn decode_station_ranking(table: &Table) -> Result<Vec<StationRankRecord>, StatsError> {
    let danger_rank = table.column("danger_rank")?;
    let name = table.column("standard_name")?;
    let line = table.column("line")?;
    let incident_count = table.column("Incident_Count")?;
    let average_danger = table.column("Average_Danger")?;
    let combined_score = table.column("Combined_Score")?;
    let usage = table.column("Usage")?;
    let usage_rank = table.column("usage_rank")?;
    let latitude = table.column("latitude")?;
    let longitude = table.column("longitude")?;

    table
        .rows()
        .map(|row| {
            let lat = row.f64(latitude)?;
            if !(-90.0..=90.0).contains(&lat) {
                return Err(row.invalid(latitude, "a latitude in degrees"));
            }
            let lon = row.f64(longitude)?;
            if !(-180.0..=180.0).contains(&lon) {
                return Err(row.invalid(longitude, "a longitude in degrees"));
            }
            Ok(StationRankRecord {
                station: StationKey::new(row.str(line)?, row.str(name)?),
                danger_rank: row.u32(danger_rank)?,
                incident_count: row.u32(incident_count)?,
                average_danger: row.f64(average_danger)?,
                combined_score: row.f64(combined_score)?,
                usage: row.f64(usage)?,
                usage_rank: row.u32(usage_rank)?,
                latitude: lat,
                longitude: lon,
            })
        })
        .collect()
}
