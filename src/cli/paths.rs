use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use super::args::DAY_FORMAT;
use crate::config;

/// Resolve the config file path, falling back to the default location.
pub fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => Ok(config::default_config_path()?),
    }
}

/// Resolve the note date, defaulting to today in local time.
pub fn resolve_day(day: Option<NaiveDate>) -> String {
    day.unwrap_or_else(|| Local::now().date_naive())
        .format(DAY_FORMAT)
        .to_string()
}
