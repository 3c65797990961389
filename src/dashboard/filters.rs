// src/dashboard/filters.rs

use std::collections::HashSet;

use crate::dataset::{EnrichedIncident, IncidentDataset};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    /// Selected states; a row passes when its state is in here
    pub states: HashSet<String>,
    /// Inclusive (from, to). `None` puts no constraint on the year.
    pub years: Option<(i32, i32)>,
}

impl Filters {
    /// Every state present and the full year span of the dataset.
    pub fn all(ds: &IncidentDataset) -> Self {
        Self {
            states: ds.states().into_iter().collect(),
            years: ds.year_bounds(),
        }
    }

    /// Year range with the ends put in order.
    pub fn with_years(mut self, from: i32, to: i32) -> Self {
        self.years = Some((from.min(to), from.max(to)));
        self
    }

    pub fn matches(&self, r: &EnrichedIncident) -> bool {
        if !self.states.contains(&r.state) {
            return false;
        }
        match (self.years, r.year) {
            (None, _) => true,
            (Some((lo, hi)), Some(y)) => lo <= y && y <= hi,
            // a year filter drops rows without a usable date
            (Some(_), None) => false,
        }
    }

    /// Indices (into `ds.records` / `ds.table.rows`) of passing rows, in order.
    pub fn filter_indices(&self, ds: &IncidentDataset) -> Vec<usize> {
        ds.records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(r))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(state: &str, ymd: Option<(i32, u32, u32)>) -> EnrichedIncident {
        let date = ymd.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        EnrichedIncident {
            state: s!(state),
            date,
            year: ymd.map(|(y, _, _)| y),
            actions: [0; 4],
            fatalities: 0,
            injuries: 0,
        }
    }

    fn ds() -> IncidentDataset {
        IncidentDataset {
            records: vec![
                rec("Bihar", Some((2017, 3, 1))),
                rec("Odisha", Some((2018, 5, 2))),
                rec("Bihar", None),
                rec("Odisha", Some((2019, 1, 9))),
            ],
            ..IncidentDataset::default()
        }
    }

    #[test]
    fn default_filters_cover_everything_dated() {
        let ds = ds();
        let f = Filters::all(&ds);
        assert_eq!(f.years, Some((2017, 2019)));
        assert_eq!(f.filter_indices(&ds), vec![0, 1, 3]);
    }

    #[test]
    fn no_year_constraint_keeps_undated_rows() {
        let ds = ds();
        let f = Filters { years: None, ..Filters::all(&ds) };
        assert_eq!(f.filter_indices(&ds), vec![0, 1, 2, 3]);
    }

    #[test]
    fn state_and_year_narrowing() {
        let ds = ds();
        let mut f = Filters::all(&ds).with_years(2019, 2018);
        assert_eq!(f.years, Some((2018, 2019)));
        assert_eq!(f.filter_indices(&ds), vec![1, 3]);

        f.states.remove("Odisha");
        assert!(f.filter_indices(&ds).is_empty());
    }

    #[test]
    fn single_year_gives_degenerate_range() {
        let ds = IncidentDataset {
            records: vec![rec("Bihar", Some((2018, 1, 1)))],
            ..IncidentDataset::default()
        };
        assert_eq!(Filters::all(&ds).years, Some((2018, 2018)));
    }
}
