//! Boundary crate for the booking estimator: loads snapshots and pricing
//! config from files, renders estimates for the terminal, and talks to
//! the submission endpoint.

pub mod logging;
pub mod submit;

use std::fs;
use std::path::Path;

use booking_core::{EstimateResult, FieldSnapshot, PricingConfig, PricingConfigError, format_jpy};
use thiserror::Error;

/// Errors that can occur when loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON in {path}")]
    SnapshotParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pricing TOML in {path}")]
    PricingParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid pricing config: {0}")]
    PricingConfig(#[from] PricingConfigError),
}

/// Parses a snapshot from JSON text. Missing fields take their defaults,
/// so partial snapshots (e.g. an untouched form) load fine.
pub fn parse_snapshot(json: &str) -> Result<FieldSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads a [`FieldSnapshot`] from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<FieldSnapshot, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&text).map_err(|source| LoadError::SnapshotParse {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the [`PricingConfig`], falling back to the built-in production
/// constants when no file is given. The config is validated either way.
pub fn load_pricing(path: Option<&Path>) -> Result<PricingConfig, LoadError> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| LoadError::PricingParse {
                path: path.display().to_string(),
                source,
            })?
        }
        None => PricingConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Renders an estimate as the terminal table: one row per line item,
/// then the subtotal and the grand total.
pub fn render_estimate(result: &EstimateResult) -> String {
    let mut out = String::new();
    for line in &result.lines {
        out.push_str(&format!("{}  {}\n", line.label, format_jpy(line.amount)));
    }
    out.push_str(&format!("小計: {}\n", format_jpy(result.subtotal)));
    out.push_str(&format!("合計金額: {}\n", format_jpy(result.total)));
    out
}
