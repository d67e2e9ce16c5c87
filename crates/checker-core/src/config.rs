//! Checker configuration: schema, loading and validation.
//!
//! A [`CheckerConfig`] is the option bag the checker is constructed with.  It
//! can be built in Rust, parsed from TOML, or parsed from the JSON object a
//! JavaScript caller hands to the web front end:
//!
//! ```toml
//! urls = ["https://example.com/", "https://example.com/pricing"]
//! defaultIndex = 1
//! padding = 20
//! devices = ["iPhone 6", "iPad", { name = "Kiosk", width = 1080, height = 1920 }]
//!
//! [mount]
//! toolbarId = "toolbar"
//! checkerId = "checker"
//! ```
//!
//! # Serde default values
//!
//! Every field except `urls` may be omitted or set to `null`; the same helper
//! functions back `#[serde(default = "...")]` and [`CheckerConfig::new`], so
//! all three paths agree.  Keys are camelCase to match the JavaScript options
//! bag, with snake_case aliases.
//!
//! # Why are devices parsed in two steps?
//!
//! The device list mixes names and profile objects.  It is first read as
//! untyped values and then converted with [`DeviceSelector::from_value`], so a
//! stray number such as `42` surfaces as [`ResolveError::UnknownDevice`]
//! instead of a generic "did not match any variant" parse error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::device::{DeviceCatalog, DeviceProfile, DeviceSelector, ResolveError};

/// Horizontal padding on each side of a cell when none is configured.
pub const DEFAULT_PADDING: u32 = 15;

/// Error type for configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The URL list is empty.
    #[error("at least one url is required")]
    NoUrls,

    /// `default_index` does not point into the URL list.
    #[error("default index {index} is out of range for {len} urls")]
    DefaultIndexOutOfRange { index: usize, len: usize },

    /// A device selector could not be parsed or resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Element ids of the two containers the checker renders into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoints {
    /// Id of the element that receives the page selector.
    #[serde(default = "default_toolbar_id", alias = "toolbar_id")]
    pub toolbar_id: String,
    /// Id of the element that receives the device cells.
    #[serde(default = "default_checker_id", alias = "checker_id")]
    pub checker_id: String,
}

/// The checker option bag.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    /// Pages to preview, in selector order.
    pub urls: Vec<String>,
    /// Index into `urls` of the page shown first.
    pub default_index: usize,
    /// Devices to preview; empty means every catalog device.
    pub devices: Vec<DeviceSelector>,
    /// Horizontal padding on each side of every cell, in pixels.
    pub padding: u32,
    pub mount: MountPoints,
    /// `tracing` filter directive: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    pub log_level: String,
}

/// On-the-wire shape of [`CheckerConfig`] before device selectors are parsed.
///
/// Every field is optional so that a JavaScript `null` reads the same as a
/// missing key; defaults are filled in by the `TryFrom` conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    #[serde(default)]
    urls: Option<Vec<String>>,
    #[serde(default, alias = "default_index")]
    default_index: Option<usize>,
    #[serde(default)]
    devices: Option<Vec<Value>>,
    #[serde(default)]
    padding: Option<u32>,
    #[serde(default)]
    mount: Option<MountPoints>,
    #[serde(default, alias = "log_level")]
    log_level: Option<String>,
}

/// A validated configuration with every device selector resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub urls: Vec<String>,
    pub default_index: usize,
    pub devices: Vec<DeviceProfile>,
    pub padding: u32,
    pub mount: MountPoints,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_toolbar_id() -> String {
    "toolbar".to_string()
}
fn default_checker_id() -> String {
    "checker".to_string()
}
fn default_padding() -> u32 {
    DEFAULT_PADDING
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            toolbar_id: default_toolbar_id(),
            checker_id: default_checker_id(),
        }
    }
}

// ── Construction and parsing ──────────────────────────────────────────────────

impl CheckerConfig {
    /// Creates a configuration for `urls` with every other field defaulted.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            default_index: 0,
            devices: Vec::new(),
            padding: DEFAULT_PADDING,
            mount: MountPoints::default(),
            log_level: default_log_level(),
        }
    }

    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    pub fn with_devices<I, D>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DeviceSelector>,
    {
        self.devices = devices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the TOML is malformed, or
    /// [`ConfigError::Resolve`] if a device entry is neither a name nor a table.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = toml::from_str(text)?;
        Self::try_from(doc)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the JSON is malformed, or
    /// [`ConfigError::Resolve`] if a device entry is neither a string nor an object.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_json::from_str(text)?;
        Self::try_from(doc)
    }

    /// Parses a configuration from an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`CheckerConfig::from_json_str`].
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_json::from_value(value)?;
        Self::try_from(doc)
    }

    /// Checks the URL list and default index.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoUrls`] for an empty URL list and
    /// [`ConfigError::DefaultIndexOutOfRange`] when the default index is past
    /// the end of it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }
        if self.default_index >= self.urls.len() {
            return Err(ConfigError::DefaultIndexOutOfRange {
                index: self.default_index,
                len: self.urls.len(),
            });
        }
        Ok(())
    }

    /// Validates the configuration and resolves its devices against `catalog`.
    ///
    /// # Errors
    ///
    /// Propagates [`CheckerConfig::validate`] errors and
    /// [`ResolveError::UnknownDevice`] for names missing from the catalog.
    pub fn resolve(&self, catalog: &DeviceCatalog) -> Result<ResolvedConfig, ConfigError> {
        self.validate()?;
        let devices = catalog.resolve(&self.devices)?;
        debug!(
            urls = self.urls.len(),
            devices = devices.len(),
            padding = self.padding,
            "configuration resolved"
        );
        Ok(ResolvedConfig {
            urls: self.urls.clone(),
            default_index: self.default_index,
            devices,
            padding: self.padding,
            mount: self.mount.clone(),
        })
    }
}

impl TryFrom<ConfigDocument> for CheckerConfig {
    type Error = ConfigError;

    fn try_from(doc: ConfigDocument) -> Result<Self, Self::Error> {
        let devices = doc
            .devices
            .unwrap_or_default()
            .iter()
            .map(DeviceSelector::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            urls: doc.urls.unwrap_or_default(),
            default_index: doc.default_index.unwrap_or_default(),
            devices,
            padding: doc.padding.unwrap_or_else(default_padding),
            mount: doc.mount.unwrap_or_default(),
            log_level: doc.log_level.unwrap_or_else(default_log_level),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
