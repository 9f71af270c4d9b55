//! Air quality classification and alerting for the `aqi-smartscope` service.
//!
//! The core is three pure functions over a single [`Reading`]:
//! [`classify_aqi`], [`check_alerts`] and [`lookup_advice`]. Around them sit
//! the embedded [`Dataset`], the aggregate helpers in [`report`], and a
//! small HTTP presentation layer in [`routes`] that the binary serves.
//!
//! Module layout:
//! - `models` – validated value types (`Concentration`, `Pollutant`, `Reading`)
//! - `classifier` – category, alert and advice lookups
//! - `dataset` – the fixed ten-day table and date parsing
//! - `report` – statistics, correlation and value counts
//! - `config` – environment-driven settings
//! - `routes` – axum handlers, one per user-facing view

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;
pub mod routes;

pub use classifier::{check_alerts, classify_aqi, lookup_advice, AlertStatus, AqiCategory};
pub use config::Config;
pub use dataset::Dataset;
pub use error::ValidationError;
pub use models::{Concentration, Pollutant, Reading};
