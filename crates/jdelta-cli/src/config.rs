use std::path::Path;

use anyhow::Context;
use jdelta_report::{Locale, ReportConfig};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Settings read from the optional TOML file, then overridden by flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub locale: Locale,
    pub root_marker: Option<String>,
    pub max_depth: usize,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            root_marker: None,
            max_depth: 128,
            color: true,
        }
    }
}

impl CliConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("loading config {}", path.display()))
    }

    /// Load the file named by `--config` (if any) and apply flag overrides.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(locale) = cli.locale {
            self.locale = locale;
        }
        if let Some(depth) = cli.max_depth {
            self.max_depth = depth;
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            locale: self.locale,
            root_marker: self.root_marker.clone(),
        }
    }
}
