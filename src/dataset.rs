//! The embedded demo dataset and date lookup.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::classifier::{check_alerts, classify_aqi, AlertStatus, AqiCategory};
use crate::error::ValidationError;
use crate::models::Reading;

// ---

const START_DATE: (i32, u32, u32) = (2025, 8, 1);

/// PM2.5, PM10, NO2 per consecutive day from `START_DATE`.
const ROWS: [(f64, f64, f64); 10] = [
    (35.0, 90.0, 55.0),
    (60.0, 140.0, 65.0),
    (110.0, 200.0, 80.0),
    (140.0, 170.0, 78.0),
    (190.0, 195.0, 88.0),
    (230.0, 280.0, 92.0),
    (65.0, 110.0, 45.0),
    (50.0, 85.0, 42.0),
    (175.0, 240.0, 79.0),
    (85.0, 150.0, 75.0),
];

/// A reading together with its derived alert and category.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedReading {
    // ---
    #[serde(flatten)]
    pub reading: Reading,
    pub alert: AlertStatus,
    pub category: AqiCategory,
}

impl ClassifiedReading {
    pub fn new(reading: Reading) -> Self {
        Self {
            reading,
            alert: check_alerts(&reading),
            category: classify_aqi(reading.pm25()),
        }
    }
}

/// Read-only set of readings, fixed at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    // ---
    /// Build the ten-day table starting 2025-08-01.
    pub fn embedded() -> Result<Self, ValidationError> {
        // ---
        let (y, m, d) = START_DATE;
        let start = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| ValidationError::InvalidDate(format!("{y:04}-{m:02}-{d:02}")))?;

        let readings = ROWS
            .iter()
            .zip(0u64..)
            .map(|(&(pm25, pm10, no2), offset)| {
                let date = start
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(|| ValidationError::InvalidDate(format!("{start} + {offset}d")))?;
                Reading::new(date, pm25, pm10, no2)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { readings })
    }

    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// First reading on `date`, or `None` if there is no data for it.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&Reading> {
        self.readings.iter().find(|r| r.date() == date)
    }

    pub fn classified(&self) -> impl Iterator<Item = ClassifiedReading> + '_ {
        self.readings.iter().copied().map(ClassifiedReading::new)
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// Month and day must be zero-padded; `2025-8-1` is rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    // ---
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidDate(trimmed.to_string());

    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    #[test]
    fn test_embedded_has_ten_consecutive_days() {
        // ---
        let ds = Dataset::embedded().unwrap();
        assert_eq!(ds.readings().len(), 10);
        for (i, r) in ds.readings().iter().enumerate() {
            assert_eq!(r.date(), day(i as u32 + 1));
        }
    }

    #[test]
    fn test_find_by_date() {
        // ---
        let ds = Dataset::embedded().unwrap();
        let r = ds.find_by_date(day(6)).unwrap();
        assert_eq!(r.pm25().value(), 230.0);
        assert_eq!(r.pm10().value(), 280.0);
        assert_eq!(r.no2().value(), 92.0);
    }

    #[test]
    fn test_find_by_date_miss() {
        // ---
        let ds = Dataset::embedded().unwrap();
        assert!(ds.find_by_date(day(11)).is_none());
        assert!(ds.find_by_date(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()).is_none());
    }

    #[test]
    fn test_classified_rows() {
        // ---
        let ds = Dataset::embedded().unwrap();
        let rows: Vec<_> = ds.classified().collect();

        assert_eq!(rows[0].category, AqiCategory::Good);
        assert!(rows[0].alert.is_safe());

        assert_eq!(rows[2].category, AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(rows[2].alert.to_string(), "PM2.5 High");

        assert_eq!(rows[3].alert.to_string(), "PM2.5 High");
        assert_eq!(rows[5].alert.to_string(), "PM2.5 High, PM10 High, NO2 High");
        assert_eq!(rows[5].category, AqiCategory::VeryUnhealthy);
        assert_eq!(rows[7].category, AqiCategory::Good);
    }

    #[test]
    fn test_parse_date() {
        // ---
        assert_eq!(parse_date("2025-08-03").unwrap(), day(3));
        assert_eq!(parse_date("  2025-08-03\n").unwrap(), day(3));
        assert!(matches!(
            parse_date("08/03/2025"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());

        // Unpadded fields are not YYYY-MM-DD
        assert!(parse_date("2025-8-1").is_err());
        assert!(parse_date("2025-08-1").is_err());
        assert!(parse_date("2025-8-01").is_err());
        assert!(parse_date("+2025-08-01").is_err());
    }

    #[test]
    fn test_find_by_date_duplicate_returns_first() {
        // ---
        let first = Reading::new(day(1), 35.0, 90.0, 55.0).unwrap();
        let second = Reading::new(day(1), 230.0, 280.0, 92.0).unwrap();
        let ds = Dataset::from_readings(vec![first, second]);

        let found = ds.find_by_date(day(1)).unwrap();
        assert_eq!(*found, first);
        assert_eq!(found.pm25().value(), 35.0);
    }
}
