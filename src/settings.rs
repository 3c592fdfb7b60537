use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use config::{Config, Environment};
use serde::Deserialize;

use crate::classify::{DateWindow, Selector};

pub const ENV_PREFIX: &str = "SERIES_EXPORT";

const DEFAULT_SOURCE_DIR: &str = "reference/blog_articles";
const DEFAULT_OUTPUT_PATH: &str = "data/articles.json";
const DEFAULT_EXTENSION: &str = "md";
const DEFAULT_WINDOW_AFTER: &str = "2024-12-24";
const DEFAULT_WINDOW_BEFORE: &str = "2025-12-25";
const DEFAULT_SERIES_MARKER: &str = "小狐熊週記";
const DEFAULT_LINK_LABEL: &str = "原文連結";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    /// File suffix without the dot.
    pub extension: String,
    /// Exclusive lower bound, `YYYY-MM-DD`.
    pub window_after: String,
    /// Exclusive upper bound, `YYYY-MM-DD`.
    pub window_before: String,
    pub series_marker: String,
    pub link_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            window_after: DEFAULT_WINDOW_AFTER.to_string(),
            window_before: DEFAULT_WINDOW_BEFORE.to_string(),
            series_marker: DEFAULT_SERIES_MARKER.to_string(),
            link_label: DEFAULT_LINK_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, overridden by `SERIES_EXPORT_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_from(env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("source_dir", DEFAULT_SOURCE_DIR)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("extension", DEFAULT_EXTENSION)?
            .set_default("window_after", DEFAULT_WINDOW_AFTER)?
            .set_default("window_before", DEFAULT_WINDOW_BEFORE)?
            .set_default("series_marker", DEFAULT_SERIES_MARKER)?
            .set_default("link_label", DEFAULT_LINK_LABEL)?
            .add_source(env)
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the configured bounds only. Filename dates are never calendar-checked.
    pub fn validate(&self) -> Result<()> {
        parse_bound("window_after", &self.window_after)?;
        parse_bound("window_before", &self.window_before)?;
        ensure!(
            self.window_after < self.window_before,
            "window_after ({}) must be earlier than window_before ({})",
            self.window_after,
            self.window_before
        );
        ensure!(!self.extension.is_empty(), "extension must not be empty");
        ensure!(
            !self.extension.starts_with('.'),
            "extension must not start with '.': {:?}",
            self.extension
        );
        ensure!(!self.series_marker.is_empty(), "series_marker must not be empty");
        ensure!(!self.link_label.is_empty(), "link_label must not be empty");
        Ok(())
    }

    pub fn selector(&self) -> Selector {
        Selector::new(
            DateWindow::new(&self.window_after, &self.window_before),
            &self.series_marker,
        )
    }
}

/// Bounds are compared as strings later, so they must be exactly `YYYY-MM-DD`.
fn parse_bound(key: &str, value: &str) -> Result<NaiveDate> {
    ensure!(value.len() == 10, "{} must be YYYY-MM-DD, got {:?}", key, value);
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{} is not a valid date: {:?}", key, value))
}
