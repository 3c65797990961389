// src/dashboard/aggregates.rs

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::dataset::{IncidentDataset, ACTION_COLUMNS};

use super::{filters::Filters, geo::GeoReference};

/// Incidents on one date in one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub state: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateCount {
    pub state: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTotal {
    pub action: &'static str,
    pub total: u64,
}

/// Dense state × year matrix; `counts[i][j]` is (states[i], years[j]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Heatmap {
    pub states: Vec<String>,
    pub years: Vec<i32>,
    pub counts: Vec<Vec<u64>>,
}

impl Heatmap {
    pub fn get(&self, state: &str, year: i32) -> Option<u64> {
        let i = self.states.iter().position(|s| s == state)?;
        let j = self.years.iter().position(|&y| y == year)?;
        Some(self.counts[i][j])
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CasualtyPoint {
    pub date: NaiveDate,
    pub fatalities: u64,
    pub injuries: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthCount {
    /// 1..=12
    pub month: u32,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Rows that passed the filters
    pub rows: usize,
    pub trend: Vec<TrendPoint>,
    /// `None` when no region reference is loaded
    pub geo: Option<Vec<StateCount>>,
    pub actions: Vec<ActionTotal>,
    pub heatmap: Heatmap,
    pub casualties: Vec<CasualtyPoint>,
    /// Always twelve entries, January first
    pub monthly: Vec<MonthCount>,
}

/// All six views over the rows passing `filters`. Rows without a date only
/// contribute to geo and actions.
pub fn compute_aggregates(
    ds: &IncidentDataset,
    filters: &Filters,
    geo: Option<&GeoReference>,
) -> Aggregates {
    let rows: Vec<_> = ds.records.iter().filter(|r| filters.matches(r)).collect();

    let mut trend: BTreeMap<(NaiveDate, &str), u64> = BTreeMap::new();
    let mut by_state: BTreeMap<&str, u64> = BTreeMap::new();
    let mut actions = [0u64; 4];
    let mut cells: BTreeMap<(&str, i32), u64> = BTreeMap::new();
    let mut states: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut casualties: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();

    for r in &rows {
        let state = r.state.as_str();
        *by_state.entry(state).or_default() += 1;
        for (sum, v) in actions.iter_mut().zip(r.actions) {
            *sum += v;
        }

        if let Some(date) = r.date {
            *trend.entry((date, state)).or_default() += 1;

            let c = casualties.entry(date).or_default();
            c.0 += r.fatalities;
            c.1 += r.injuries;
        }
        if let Some(year) = r.year {
            states.insert(state);
            years.insert(year);
            *cells.entry((state, year)).or_default() += 1;
        }
    }

    let states: Vec<&str> = states.into_iter().collect();
    let years: Vec<i32> = years.into_iter().collect();
    let counts = states
        .iter()
        .map(|s| years.iter().map(|y| cells.get(&(*s, *y)).copied().unwrap_or(0)).collect())
        .collect();

    Aggregates {
        rows: rows.len(),
        trend: trend
            .into_iter()
            .map(|((date, state), count)| TrendPoint { date, state: s!(state), count })
            .collect(),
        geo: geo.map(|g| {
            by_state
                .iter()
                .filter(|(s, _)| g.contains(s))
                .map(|(s, &count)| StateCount { state: s!(*s), count })
                .collect()
        }),
        actions: ACTION_COLUMNS
            .iter()
            .zip(actions)
            .map(|(&action, total)| ActionTotal { action, total })
            .collect(),
        heatmap: Heatmap {
            states: states.into_iter().map(String::from).collect(),
            years,
            counts,
        },
        casualties: casualties
            .into_iter()
            .map(|(date, (fatalities, injuries))| CasualtyPoint { date, fatalities, injuries })
            .collect(),
        monthly: monthly_counts(rows.iter().filter_map(|r| r.date)),
    }
}

/// Twelve buckets, January first; empty months count 0.
pub fn monthly_counts(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<MonthCount> {
    let mut months = [0u64; 12];
    for date in dates {
        months[date.month0() as usize] += 1;
    }
    months
        .iter()
        .enumerate()
        .map(|(i, &count)| MonthCount { month: i as u32 + 1, count })
        .collect()
}
