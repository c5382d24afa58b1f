//! Dataset Loader Module
//! Parses the embedded registration CSV into typed records using Polars.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;

/// Sample Vahan-style registration data. Swap in scraped Vahan rows for real
/// insights; the column layout must stay the same.
pub const SAMPLE_CSV: &str = "\
date,manufacturer,vehicle_category,registrations
2024-01-01,Hero,2W,50000
2024-04-01,Hero,2W,52000
2025-01-01,Hero,2W,60000
2025-04-01,Hero,2W,64000
2024-01-01,Tata,4W,20000
2024-04-01,Tata,4W,21000
2025-01-01,Tata,4W,25000
2025-04-01,Tata,4W,27000
2024-01-01,Ola,2W,10000
2024-04-01,Ola,2W,15000
2025-01-01,Ola,2W,22000
2025-04-01,Ola,2W,30000
";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
    #[error("Row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("Row {row}: registrations must be a non-negative integer")]
    InvalidCount { row: usize },
    #[error("Row {row}: empty value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },
}

/// One source row, immutable once loaded. `year` and `quarter_label` are
/// derived from `date` at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub date: NaiveDate,
    pub manufacturer: String,
    pub vehicle_category: String,
    pub registrations: u64,
    pub year: i32,
    pub quarter_label: String,
}

/// Quarter label for a date, e.g. "2024Q1". Months 1-3 map to Q1.
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{}Q{}", date.year(), date.month0() / 3 + 1)
}

/// Holds the loaded registration records and exposes filter vocabularies.
pub struct Dataset {
    records: Vec<RegistrationRecord>,
}

impl Dataset {
    /// Load the embedded sample dataset.
    pub fn from_embedded() -> Result<Self, DatasetError> {
        Self::from_csv(SAMPLE_CSV)
    }

    /// Parse CSV text into records. Any malformed row fails the whole load.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
            .finish()?;

        let dates = Self::str_column(&df, "date")?;
        let dates = dates.str()?;
        let manufacturers = Self::str_column(&df, "manufacturer")?;
        let manufacturers = manufacturers.str()?;
        let categories = Self::str_column(&df, "vehicle_category")?;
        let categories = categories.str()?;

        // Non-strict cast: unparseable counts become null and are rejected per row.
        let counts = df
            .column("registrations")
            .map_err(|_| DatasetError::MissingColumn("registrations"))?
            .as_materialized_series()
            .cast(&DataType::Int64)?;
        let counts = counts.i64()?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let raw_date = dates.get(row).ok_or(DatasetError::MissingValue {
                row,
                column: "date",
            })?;
            let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d").map_err(|_| {
                DatasetError::InvalidDate {
                    row,
                    value: raw_date.to_string(),
                }
            })?;

            let manufacturer = manufacturers.get(row).ok_or(DatasetError::MissingValue {
                row,
                column: "manufacturer",
            })?;
            let vehicle_category = categories.get(row).ok_or(DatasetError::MissingValue {
                row,
                column: "vehicle_category",
            })?;

            let count = counts.get(row).ok_or(DatasetError::InvalidCount { row })?;
            if count < 0 {
                return Err(DatasetError::InvalidCount { row });
            }

            records.push(RegistrationRecord {
                year: date.year(),
                quarter_label: quarter_label(date),
                date,
                manufacturer: manufacturer.trim().to_string(),
                vehicle_category: vehicle_category.trim().to_string(),
                registrations: count as u64,
            });
        }

        Ok(Self { records })
    }

    fn str_column(df: &DataFrame, name: &'static str) -> Result<Series, DatasetError> {
        Ok(df
            .column(name)
            .map_err(|_| DatasetError::MissingColumn(name))?
            .as_materialized_series()
            .cast(&DataType::String)?)
    }

    pub fn records(&self) -> &[RegistrationRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Unique manufacturer names, sorted.
    pub fn manufacturers(&self) -> Vec<String> {
        Self::unique_values(self.records.iter().map(|r| r.manufacturer.as_str()))
    }

    /// Unique vehicle categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        Self::unique_values(self.records.iter().map(|r| r.vehicle_category.as_str()))
    }

    fn unique_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(|v| v.to_string()).collect();
        out.sort();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let ds = Dataset::from_embedded().unwrap();
        assert_eq!(ds.row_count(), 12);
        assert_eq!(ds.manufacturers(), vec!["Hero", "Ola", "Tata"]);
        assert_eq!(ds.categories(), vec!["2W", "4W"]);
    }

    #[test]
    fn derives_year_and_quarter() {
        let ds = Dataset::from_csv(
            "date,manufacturer,vehicle_category,registrations\n2024-08-15,Hero,2W,100\n",
        )
        .unwrap();
        let rec = &ds.records()[0];
        assert_eq!(rec.year, 2024);
        assert_eq!(rec.quarter_label, "2024Q3");
        assert_eq!(rec.registrations, 100);
    }

    #[test]
    fn quarter_label_covers_all_quarters() {
        let cases = [(1, "Q1"), (3, "Q1"), (4, "Q2"), (6, "Q2"), (7, "Q3"), (12, "Q4")];
        for (month, suffix) in cases {
            let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
            assert_eq!(quarter_label(date), format!("2024{}", suffix));
        }
    }

    #[test]
    fn malformed_date_is_fatal() {
        let result = Dataset::from_csv(
            "date,manufacturer,vehicle_category,registrations\nnot-a-date,Hero,2W,100\n",
        );
        assert!(matches!(result, Err(DatasetError::InvalidDate { row: 0, .. })));
    }

    #[test]
    fn non_numeric_registrations_is_fatal() {
        let result = Dataset::from_csv(
            "date,manufacturer,vehicle_category,registrations\n2024-01-01,Hero,2W,lots\n",
        );
        assert!(matches!(result, Err(DatasetError::InvalidCount { row: 0 })));
    }

    #[test]
    fn missing_column_is_reported() {
        let result = Dataset::from_csv("date,manufacturer,registrations\n2024-01-01,Hero,100\n");
        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn("vehicle_category"))
        ));
    }
}
