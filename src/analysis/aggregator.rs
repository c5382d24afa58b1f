//! Growth Aggregator Module
//! Filters records by manufacturer/category, groups them by quarter and
//! computes QoQ and YoY growth percentages per series.

use crate::data::RegistrationRecord;
use std::collections::BTreeMap;

/// One aggregated group, uniquely keyed by
/// (year, quarter_label, manufacturer, vehicle_category).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    pub year: i32,
    pub quarter_label: String,
    pub manufacturer: String,
    pub vehicle_category: String,
    pub total_registrations: u64,
    pub qoq_growth_pct: Option<f64>,
    pub yoy_growth_pct: Option<f64>,
}

impl AggregatedRow {
    /// Legend/series label for the chart.
    pub fn series_label(&self) -> String {
        format!("{} {}", self.manufacturer, self.vehicle_category)
    }
}

/// Stateless filter-and-aggregate pipeline, recomputed in full on every
/// selection change.
pub struct GrowthAggregator;

impl GrowthAggregator {
    /// Filter records to the selected manufacturers and categories, group by
    /// (year, quarter, manufacturer, category) and attach growth metrics.
    ///
    /// Rows come back ordered by (manufacturer, category) series, each series
    /// in chronological quarter order. An empty selection on either axis
    /// yields an empty result.
    pub fn aggregate(
        records: &[RegistrationRecord],
        manufacturers: &[String],
        categories: &[String],
    ) -> Vec<AggregatedRow> {
        // Keyed (manufacturer, category, year, quarter) so iteration walks one
        // series at a time, oldest quarter first.
        let mut totals: BTreeMap<(String, String, i32, String), u64> = BTreeMap::new();
        for rec in records {
            if !manufacturers.contains(&rec.manufacturer)
                || !categories.contains(&rec.vehicle_category)
            {
                continue;
            }
            *totals
                .entry((
                    rec.manufacturer.clone(),
                    rec.vehicle_category.clone(),
                    rec.year,
                    rec.quarter_label.clone(),
                ))
                .or_insert(0) += rec.registrations;
        }

        let mut rows: Vec<AggregatedRow> = totals
            .into_iter()
            .map(
                |((manufacturer, vehicle_category, year, quarter_label), total)| AggregatedRow {
                    year,
                    quarter_label,
                    manufacturer,
                    vehicle_category,
                    total_registrations: total,
                    qoq_growth_pct: None,
                    yoy_growth_pct: None,
                },
            )
            .collect();

        Self::attach_growth(&mut rows);
        rows
    }

    /// Fill in QoQ/YoY percentages. Rows must be series-grouped and
    /// chronologically ordered within each series, as `aggregate` produces.
    ///
    /// YoY compares against the row two positions back in the series, not a
    /// calendar lookup; with quarters missing from a series the comparison
    /// shifts accordingly.
    fn attach_growth(rows: &mut [AggregatedRow]) {
        let mut start = 0;
        while start < rows.len() {
            let mut end = start + 1;
            while end < rows.len()
                && rows[end].manufacturer == rows[start].manufacturer
                && rows[end].vehicle_category == rows[start].vehicle_category
            {
                end += 1;
            }

            for i in start..end {
                if i >= start + 1 {
                    rows[i].qoq_growth_pct = Self::growth_pct(
                        rows[i].total_registrations,
                        rows[i - 1].total_registrations,
                    );
                }
                if i >= start + 2 {
                    rows[i].yoy_growth_pct = Self::growth_pct(
                        rows[i].total_registrations,
                        rows[i - 2].total_registrations,
                    );
                }
            }

            start = end;
        }
    }

    /// Percentage change against a prior total. A zero prior is undefined
    /// rather than an error.
    fn growth_pct(current: u64, prior: u64) -> Option<f64> {
        if prior == 0 {
            return None;
        }
        Some((current as f64 - prior as f64) / prior as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quarter_label;
    use chrono::NaiveDate;

    fn record(date: &str, manufacturer: &str, category: &str, count: u64) -> RegistrationRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        RegistrationRecord {
            year: chrono::Datelike::year(&date),
            quarter_label: quarter_label(date),
            date,
            manufacturer: manufacturer.to_string(),
            vehicle_category: category.to_string(),
            registrations: count,
        }
    }

    fn hero_2w() -> Vec<RegistrationRecord> {
        vec![
            record("2024-01-01", "Hero", "2W", 50_000),
            record("2024-04-01", "Hero", "2W", 52_000),
            record("2025-01-01", "Hero", "2W", 60_000),
            record("2025-04-01", "Hero", "2W", 64_000),
        ]
    }

    fn all(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn growth_matches_hero_example() {
        let rows = GrowthAggregator::aggregate(&hero_2w(), &all(&["Hero"]), &all(&["2W"]));
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].quarter_label, "2024Q1");
        assert_eq!(rows[0].qoq_growth_pct, None);
        assert_eq!(rows[0].yoy_growth_pct, None);

        assert_eq!(rows[1].quarter_label, "2024Q2");
        assert_eq!(rows[1].qoq_growth_pct, Some(4.0));
        assert_eq!(rows[1].yoy_growth_pct, None);

        assert_eq!(rows[2].quarter_label, "2025Q1");
        let yoy = rows[2].yoy_growth_pct.unwrap();
        assert!((yoy - 15.384615384615385).abs() < 1e-9);
    }

    #[test]
    fn totals_are_conserved() {
        let mut records = hero_2w();
        records.push(record("2024-01-01", "Ola", "2W", 10_000));
        records.push(record("2024-01-15", "Ola", "2W", 2_000));

        let rows =
            GrowthAggregator::aggregate(&records, &all(&["Hero", "Ola"]), &all(&["2W"]));
        let total: u64 = rows.iter().map(|r| r.total_registrations).sum();
        let input: u64 = records.iter().map(|r| r.registrations).sum();
        assert_eq!(total, input);
    }

    #[test]
    fn same_quarter_rows_collapse_into_one_group() {
        let records = vec![
            record("2024-01-01", "Ola", "2W", 10_000),
            record("2024-02-10", "Ola", "2W", 2_500),
        ];
        let rows = GrowthAggregator::aggregate(&records, &all(&["Ola"]), &all(&["2W"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_registrations, 12_500);
    }

    #[test]
    fn group_keys_are_unique() {
        let ds = crate::data::Dataset::from_embedded().unwrap();
        let rows = GrowthAggregator::aggregate(
            ds.records(),
            &ds.manufacturers(),
            &ds.categories(),
        );
        let mut keys: Vec<_> = rows
            .iter()
            .map(|r| (r.year, &r.quarter_label, &r.manufacturer, &r.vehicle_category))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), rows.len());
    }

    #[test]
    fn pair_set_is_subset_of_filtered_input() {
        let ds = crate::data::Dataset::from_embedded().unwrap();
        let rows = GrowthAggregator::aggregate(ds.records(), &all(&["Hero", "Ola"]), &all(&["2W"]));
        for row in &rows {
            assert!(ds.records().iter().any(|r| {
                r.manufacturer == row.manufacturer && r.vehicle_category == row.vehicle_category
            }));
            assert_ne!(row.manufacturer, "Tata");
        }
    }

    #[test]
    fn empty_selection_yields_empty_output() {
        let records = hero_2w();
        assert!(GrowthAggregator::aggregate(&records, &[], &all(&["2W"])).is_empty());
        assert!(GrowthAggregator::aggregate(&records, &all(&["Hero"]), &[]).is_empty());
    }

    #[test]
    fn zero_prior_total_leaves_growth_undefined() {
        let records = vec![
            record("2024-01-01", "Ola", "2W", 0),
            record("2024-04-01", "Ola", "2W", 5_000),
        ];
        let rows = GrowthAggregator::aggregate(&records, &all(&["Ola"]), &all(&["2W"]));
        assert_eq!(rows[1].qoq_growth_pct, None);
    }

    #[test]
    fn yoy_offset_is_positional_across_gaps() {
        // Missing 2024Q2: the "two back" comparison lands on 2024Q1, not on
        // the same calendar quarter a year earlier.
        let records = vec![
            record("2024-01-01", "Hero", "2W", 50_000),
            record("2024-07-01", "Hero", "2W", 55_000),
            record("2025-01-01", "Hero", "2W", 60_000),
        ];
        let rows = GrowthAggregator::aggregate(&records, &all(&["Hero"]), &all(&["2W"]));
        let yoy = rows[2].yoy_growth_pct.unwrap();
        assert!((yoy - 20.0).abs() < 1e-9);
    }

    #[test]
    fn series_are_grouped_and_chronological() {
        let ds = crate::data::Dataset::from_embedded().unwrap();
        let rows = GrowthAggregator::aggregate(
            ds.records(),
            &ds.manufacturers(),
            &ds.categories(),
        );
        for pair in rows.windows(2) {
            let same_series = pair[0].manufacturer == pair[1].manufacturer
                && pair[0].vehicle_category == pair[1].vehicle_category;
            if same_series {
                assert!(pair[0].quarter_label < pair[1].quarter_label);
            }
        }
    }
}
