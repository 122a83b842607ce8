use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tdc_report::ReportConfig;
use tdc_scan::ScanConfig;

/// Settings read from the `--config` TOML file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub report: ReportConfig,
    pub scan: ScanConfig,
}

impl CheckerConfig {
    /// Defaults when no path is given; otherwise the parsed file.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))
    }
}
