//! Per-station series derived from the decoded datasets.

use std::collections::BTreeMap;
use std::path::Path;

use bevy::prelude::*;

use crate::config::{COMPARISON_YEARS, INCIDENT_GROUP_COUNT, TOP_INCIDENT_COUNT};
use crate::navigator::StationLocation;
use crate::routes::StationKey;

use super::error::StatsError;
use super::records::*;
use super::table::Table;

/// The three historical tables, decoded once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct Datasets {
    pub delay_likelihood: Vec<DelayLikelihoodRecord>,
    pub incidents: Vec<IncidentRecord>,
    pub station_ranking: Vec<StationRankRecord>,
}

/// Delay likelihood for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyLikelihood {
    pub hour: u8,
    pub percent: f64,
}

/// Number of incidents sharing a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentGroup {
    pub description: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyDelay {
    pub year: i32,
    pub average_delay: f64,
}

/// Incident count and mean delay in one month of one year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthSummary {
    pub incidents: usize,
    pub average_delay: f64,
}

/// One calendar month compared across two years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyComparison {
    /// 1-12.
    pub month: u32,
    pub first: MonthSummary,
    pub second: MonthSummary,
}

impl Datasets {
    /// Read and decode every table under `dir`.
    pub fn load(dir: &Path) -> Result<Self, StatsError> {
        Self::from_tables(
            &Table::read(dir, DELAY_LIKELIHOOD_FILE)?,
            &Table::read(dir, INCIDENTS_FILE)?,
            &Table::read(dir, STATION_RANKING_FILE)?,
        )
    }

    pub fn from_tables(
        delay_likelihood: &Table,
        incidents: &Table,
        station_ranking: &Table,
    ) -> Result<Self, StatsError> {
        Ok(Self {
            delay_likelihood: decode_delay_likelihood(delay_likelihood)?,
            incidents: decode_incidents(incidents)?,
            station_ranking: decode_station_ranking(station_ranking)?,
        })
    }

    /// 24 hourly points for `station`; hours without a record are 0%.
    pub fn delay_likelihood(&self, station: &StationKey) -> Vec<HourlyLikelihood> {
        let mut hours: Vec<HourlyLikelihood> = (0..24)
            .map(|hour| HourlyLikelihood { hour, percent: 0.0 })
            .collect();
        for record in self.delay_likelihood.iter().filter(|r| r.station == *station) {
            hours[record.hour as usize].percent = record.likelihood_percent;
        }
        hours
    }

    /// Every incident recorded at `station`, in file order.
    pub fn station_incidents(&self, station: &StationKey) -> Vec<&IncidentRecord> {
        self.incidents
            .iter()
            .filter(|r| r.station == *station)
            .collect()
    }

    /// The `n` longest incidents at `station`, longest first. Equal delays
    /// keep file order.
    pub fn top_incidents(&self, station: &StationKey, n: usize) -> Vec<&IncidentRecord> {
        let mut incidents = self.station_incidents(station);
        incidents.sort_by(|a, b| b.min_delay.total_cmp(&a.min_delay));
        incidents.truncate(n);
        incidents
    }

    /// `None` when the ranking table has no row for `station`.
    pub fn station_ranks(&self, station: &StationKey) -> Option<&StationRankRecord> {
        self.station_ranking.iter().find(|r| r.station == *station)
    }

    pub fn station_locations(&self) -> Vec<StationLocation> {
        self.station_ranking
            .iter()
            .map(|r| StationLocation {
                key: r.station.clone(),
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect()
    }
}

/// Incident counts per description: the `n` most frequent, then one
/// aggregated "Other" group for the rest (omitted when empty).
///
/// Equal counts are ordered by description.
pub fn incident_groups(incidents: &[&IncidentRecord], n: usize) -> Vec<IncidentGroup> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for incident in incidents {
        *counts.entry(incident.description.as_str()).or_default() += 1;
    }
    let mut sorted: Vec<(&str, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let rest: usize = sorted.iter().skip(n).map(|(_, count)| count).sum();
    let mut groups: Vec<IncidentGroup> = sorted
        .into_iter()
        .take(n)
        .map(|(description, count)| IncidentGroup {
            description: description.to_string(),
            count,
        })
        .collect();
    if rest > 0 {
        groups.push(IncidentGroup {
            description: UNDESCRIBED_INCIDENT.to_string(),
            count: rest,
        });
    }
    groups
}

/// Mean delay per year, ascending by year.
pub fn yearly_average_delay(incidents: &[&IncidentRecord]) -> Vec<YearlyDelay> {
    let mut years: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for incident in incidents {
        let entry = years.entry(incident.year).or_default();
        entry.0 += incident.min_delay;
        entry.1 += 1;
    }
    years
        .into_iter()
        .map(|(year, (total, count))| YearlyDelay {
            year,
            average_delay: total / count as f64,
        })
        .collect()
}

/// Twelve months of incident counts and mean delays for two years.
/// Incidents whose date has no readable month are left out.
pub fn monthly_comparison(
    incidents: &[&IncidentRecord],
    first_year: i32,
    second_year: i32,
) -> Vec<MonthlyComparison> {
    // [month][year slot] = (total delay, count)
    let mut totals = [[(0.0_f64, 0_usize); 2]; 12];
    for incident in incidents {
        let slot = if incident.year == first_year {
            0
        } else if incident.year == second_year {
            1
        } else {
            continue;
        };
        let Some(month) = incident.month() else {
            continue;
        };
        let cell = &mut totals[month as usize - 1][slot];
        cell.0 += incident.min_delay;
        cell.1 += 1;
    }
    let summary = |(total, count): (f64, usize)| MonthSummary {
        incidents: count,
        average_delay: if count == 0 { 0.0 } else { total / count as f64 },
    };
    totals
        .iter()
        .enumerate()
        .map(|(i, [first, second])| MonthlyComparison {
            month: i as u32 + 1,
            first: summary(*first),
            second: summary(*second),
        })
        .collect()
}

/// Everything the station card shows, computed in one pass on selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub station: StationKey,
    pub ranks: Option<StationRankRecord>,
    pub hourly: Vec<HourlyLikelihood>,
    pub top_incidents: Vec<IncidentRecord>,
    pub incident_groups: Vec<IncidentGroup>,
    pub yearly: Vec<YearlyDelay>,
    pub comparison_years: (i32, i32),
    pub monthly: Vec<MonthlyComparison>,
}

impl StationStats {
    pub fn compute(datasets: &Datasets, station: &StationKey) -> Self {
        let incidents = datasets.station_incidents(station);
        let (first, second) = COMPARISON_YEARS;
        Self {
            station: station.clone(),
            ranks: datasets.station_ranks(station).cloned(),
            hourly: datasets.delay_likelihood(station),
            top_incidents: datasets
                .top_incidents(station, TOP_INCIDENT_COUNT)
                .into_iter()
                .cloned()
                .collect(),
            incident_groups: incident_groups(&incidents, INCIDENT_GROUP_COUNT),
            yearly: yearly_average_delay(&incidents),
            comparison_years: COMPARISON_YEARS,
            monthly: monthly_comparison(&incidents, first, second),
        }
    }

    /// Whether any table mentions the station.
    pub fn has_data(&self) -> bool {
        self.ranks.is_some()
            || !self.top_incidents.is_empty()
            || self.hourly.iter().any(|h| h.percent > 0.0)
    }
}
