//! Value types for pollutant readings.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;

// ---

/// A pollutant concentration in µg/m³.
///
/// Always finite and non-negative; the only way to obtain one is through
/// [`Concentration::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Concentration(f64);

impl Concentration {
    // ---
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        // ---
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteConcentration(value));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeConcentration(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three monitored pollutants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
}

impl Pollutant {
    // ---
    /// Fixed enumeration order used for alert strings and the correlation
    /// matrix.
    pub const ALL: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::No2];

    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
        }
    }

    /// Safety limit in µg/m³. A breach is a concentration strictly above it.
    pub fn threshold(self) -> f64 {
        match self {
            Pollutant::Pm25 => 100.0,
            Pollutant::Pm10 => 200.0,
            Pollutant::No2 => 80.0,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the dataset: a date and its three concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    // ---
    date: NaiveDate,
    #[serde(rename = "PM2.5")]
    pm25: Concentration,
    #[serde(rename = "PM10")]
    pm10: Concentration,
    #[serde(rename = "NO2")]
    no2: Concentration,
}

impl Reading {
    // ---
    pub fn new(date: NaiveDate, pm25: f64, pm10: f64, no2: f64) -> Result<Self, ValidationError> {
        // ---
        Ok(Self {
            date,
            pm25: Concentration::new(pm25)?,
            pm10: Concentration::new(pm10)?,
            no2: Concentration::new(no2)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn pm25(&self) -> Concentration {
        self.pm25
    }

    pub fn pm10(&self) -> Concentration {
        self.pm10
    }

    pub fn no2(&self) -> Concentration {
        self.no2
    }

    pub fn concentration(&self, pollutant: Pollutant) -> Concentration {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
        }
    }

    /// The pollutant with the largest concentration. Ties go to the one
    /// listed first in [`Pollutant::ALL`].
    pub fn highest_pollutant(&self) -> (Pollutant, Concentration) {
        // ---
        Pollutant::ALL[1..].iter().fold(
            (Pollutant::Pm25, self.pm25),
            |(best, best_value), &p| {
                let value = self.concentration(p);
                if value > best_value {
                    (p, value)
                } else {
                    (best, best_value)
                }
            },
        )
    }
}
