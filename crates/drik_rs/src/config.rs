//! Chart configuration loaded from TOML.
//!
//! ```toml
//! ayanamsha = "lahiri"
//! node_mode = "mean"
//! nutation = true
//! include_navamsa = true
//! include_panchanga = true
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use drik_vedic_base::{AyanamshaSystem, NodeMode};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::DrikError;

/// Raw, user-facing chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Sidereal reference system key, e.g. `"lahiri"` or `"fagan-bradley"`.
    pub ayanamsha: String,
    /// `"mean"` or `"true"`.
    pub node_mode: String,
    /// Use apparent sidereal time and the true equinox where applicable.
    pub nutation: bool,
    pub include_navamsa: bool,
    pub include_panchanga: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri.key().to_string(),
            node_mode: NodeMode::Mean.key().to_string(),
            nutation: true,
            include_navamsa: true,
            include_panchanga: true,
        }
    }
}

/// Parsed, validated form of [`ChartConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    pub nutation: bool,
    pub include_navamsa: bool,
    pub include_panchanga: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            node_mode: NodeMode::Mean,
            nutation: true,
            include_navamsa: true,
            include_panchanga: true,
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, DrikError> {
        let config: Self =
            toml::from_str(text).map_err(|e| DrikError::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DrikError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| DrikError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Like [`ChartConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, DrikError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), DrikError> {
        self.resolve().map(|_| ())
    }

    /// Parse the string keys into typed settings.
    pub fn resolve(&self) -> Result<ChartSettings, DrikError> {
        let ayanamsha: AyanamshaSystem = self.ayanamsha.parse()?;
        let node_mode: NodeMode = self.node_mode.parse()?;
        Ok(ChartSettings {
            ayanamsha,
            node_mode,
            nutation: self.nutation,
            include_navamsa: self.include_navamsa,
            include_panchanga: self.include_panchanga,
        })
    }
}

impl From<ChartSettings> for ChartConfig {
    fn from(s: ChartSettings) -> Self {
        Self {
            ayanamsha: s.ayanamsha.key().to_string(),
            node_mode: s.node_mode.key().to_string(),
            nutation: s.nutation,
            include_navamsa: s.include_navamsa,
            include_panchanga: s.include_panchanga,
        }
    }
}
