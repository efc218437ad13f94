//! Configuration for regdump
//!
//! Priority (highest to lowest):
//! 1. Command line flags
//! 2. Environment variables (`REGDUMP_` prefix, e.g. `REGDUMP_BYTE_ORDER=ABCD`)
//! 3. Config file passed with `--config` (yaml, toml or json)
//! 4. Default values

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use voltage_regcodec::{ByteOrder, CsvLoaderOptions, ReportFormat, ReportOptions};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REGDUMP_";

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegdumpConfig {
    /// CSV file with register_pair,LSR,MSR rows
    pub input: PathBuf,
    /// Register layout of each pair
    pub byte_order: ByteOrder,
    /// First CSV record is a header
    pub has_headers: bool,
    /// CSV field delimiter (ASCII)
    pub delimiter: char,
    /// Decode registers to float32; false reports raw registers
    pub decode: bool,
    pub format: ReportFormat,
    /// Decimal places in text and CSV output
    pub precision: usize,
    /// Log filter, e.g. "info" or "info,voltage_regcodec=debug"
    pub log_level: String,
}

impl Default for RegdumpConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("modbus_reading.csv"),
            byte_order: ByteOrder::default(),
            has_headers: true,
            delimiter: ',',
            decode: true,
            format: ReportFormat::Text,
            precision: 2,
            log_level: "info".to_string(),
        }
    }
}

/// Values set on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_order: Option<ByteOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl RegdumpConfig {
    /// Build the layered configuration
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(RegdumpConfig::default()));

        if let Some(path) = config_file {
            figment = merge_file(figment, path)?;
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))
    }

    pub fn loader_options(&self) -> Result<CsvLoaderOptions> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }

        Ok(CsvLoaderOptions {
            has_headers: self.has_headers,
            delimiter: self.delimiter as u8,
        })
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.format,
            precision: self.precision,
        }
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Config file must have an extension: {}", path.display()))?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}
