//! Aggregate reporting over a set of readings.
//!
//! These helpers sit beside the classifier rather than inside it: they
//! summarise the whole table (mean/min/max, value counts, correlation)
//! and are only used for display.

use serde::Serialize;

use crate::classifier::{check_alerts, classify_aqi};
use crate::models::{Pollutant, Reading};

// ---

/// Mean, minimum and maximum of one pollutant series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-pollutant statistics, in [`Pollutant::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantStats {
    #[serde(rename = "PM2.5")]
    pub pm25: SeriesStats,
    #[serde(rename = "PM10")]
    pub pm10: SeriesStats,
    #[serde(rename = "NO2")]
    pub no2: SeriesStats,
}

impl PollutantStats {
    pub fn get(&self, pollutant: Pollutant) -> SeriesStats {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
        }
    }
}

fn series(readings: &[Reading], pollutant: Pollutant) -> Vec<f64> {
    readings
        .iter()
        .map(|r| r.concentration(pollutant).value())
        .collect()
}

fn series_stats(values: &[f64]) -> Option<SeriesStats> {
    // ---
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(SeriesStats { mean, min, max })
}

/// Mean/min/max for each pollutant, or `None` when there are no readings.
pub fn pollutant_stats(readings: &[Reading]) -> Option<PollutantStats> {
    // ---
    Some(PollutantStats {
        pm25: series_stats(&series(readings, Pollutant::Pm25))?,
        pm10: series_stats(&series(readings, Pollutant::Pm10))?,
        no2: series_stats(&series(readings, Pollutant::No2))?,
    })
}

/// Pearson correlation coefficient. `None` for fewer than two points or a
/// constant series.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    // ---
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in x[..n].iter().zip(&y[..n]) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Pairwise correlation among PM2.5, PM10 and NO2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: [Pollutant; 3],
    /// Row-major; `None` where the coefficient is undefined.
    pub values: [[Option<f64>; 3]; 3],
}

impl CorrelationMatrix {
    pub fn get(&self, a: Pollutant, b: Pollutant) -> Option<f64> {
        let index = |p: Pollutant| match p {
            Pollutant::Pm25 => 0,
            Pollutant::Pm10 => 1,
            Pollutant::No2 => 2,
        };
        self.values[index(a)][index(b)]
    }
}

pub fn correlation_matrix(readings: &[Reading]) -> CorrelationMatrix {
    // ---
    let columns = Pollutant::ALL.map(|p| series(readings, p));
    let mut values = [[None; 3]; 3];
    for (i, row) in values.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = pearson(&columns[i], &columns[j]);
        }
    }
    CorrelationMatrix {
        labels: Pollutant::ALL,
        values,
    }
}

/// One entry of a value-count table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Alert and category distributions over a set of readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub alerts: Vec<LabelCount>,
    pub categories: Vec<LabelCount>,
}

/// Count labels, most frequent first. Equal counts keep first-seen order.
fn value_counts(labels: impl IntoIterator<Item = String>) -> Vec<LabelCount> {
    // ---
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(LabelCount { label, count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn summary(readings: &[Reading]) -> Summary {
    // ---
    Summary {
        alerts: value_counts(readings.iter().map(|r| check_alerts(r).to_string())),
        categories: value_counts(
            readings
                .iter()
                .map(|r| classify_aqi(r.pm25()).label().to_string()),
        ),
    }
}
