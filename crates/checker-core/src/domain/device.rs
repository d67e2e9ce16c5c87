//! Device profiles and the device catalog.
//!
//! A [`DeviceProfile`] is a named screen size to preview a page against.  The
//! [`DeviceCatalog`] is an immutable table of well-known profiles; callers pick
//! from it by name or supply their own profiles through [`DeviceSelector`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The built-in device table: `(name, width, height, rotatable)` in catalog order.
const BUILTIN_DEVICES: &[(&str, u32, u32, bool)] = &[
    ("iPhone 5", 320, 568, false),
    ("iPhone 6", 375, 667, false),
    ("iPhone 6 Plus", 414, 736, false),
    ("Android Mobile", 360, 640, false),
    ("iPad", 768, 1024, true),
    ("Android Tablet", 800, 1280, true),
    ("Surface", 1366, 768, false),
    ("MacBook", 1440, 900, false),
];

/// Errors that can occur when resolving device selectors.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    /// The selector names a device that is not in the catalog, or is neither a
    /// name nor a profile object.
    #[error("unknown device: {0}")]
    UnknownDevice(String),
}

/// A named screen size (logical pixels) to preview a page against.
///
/// Caller-supplied profiles are accepted without validation: a missing name
/// deserializes to the empty string and missing dimensions to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Display name used in the cell header.
    #[serde(default)]
    pub name: String,
    /// Width in logical pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in logical pixels.
    #[serde(default)]
    pub height: u32,
    /// Rotatable devices are previewed in both portrait and landscape.
    #[serde(default)]
    pub rotatable: bool,
}

impl DeviceProfile {
    /// Creates a non-rotatable profile.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            rotatable: false,
        }
    }

    /// Marks the profile as rotatable.
    pub fn with_rotation(mut self) -> Self {
        self.rotatable = true;
        self
    }
}

/// One entry of the configured device list.
///
/// # Why a tagged union? (for beginners)
///
/// The JavaScript options bag accepts either a device name (`"iPad"`) or a
/// whole profile object (`{ name, width, height }`) in the same array.  In
/// Rust the two shapes become two enum variants, decided once when the
/// configuration is parsed, so the resolver never has to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceSelector {
    /// Look the profile up in the catalog by name.
    ByName(String),
    /// Use this profile as-is.
    Explicit(DeviceProfile),
}

impl DeviceSelector {
    /// Parses a selector from an untyped value (JSON or TOML converted to JSON).
    ///
    /// Strings become [`DeviceSelector::ByName`]; objects become
    /// [`DeviceSelector::Explicit`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownDevice`] for numbers, booleans, arrays and
    /// `null`, and for objects whose fields have the wrong types.
    pub fn from_value(value: &Value) -> Result<Self, ResolveError> {
        match value {
            Value::String(name) => Ok(Self::ByName(name.clone())),
            Value::Object(_) => serde_json::from_value(value.clone())
                .map(Self::Explicit)
                .map_err(|e| ResolveError::UnknownDevice(format!("{value} ({e})"))),
            other => Err(ResolveError::UnknownDevice(other.to_string())),
        }
    }
}

impl From<&str> for DeviceSelector {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<DeviceProfile> for DeviceSelector {
    fn from(profile: DeviceProfile) -> Self {
        Self::Explicit(profile)
    }
}

/// An immutable, ordered table of device profiles.
///
/// Lookup by name returns the first profile with that name; iteration yields
/// profiles in the order they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl DeviceCatalog {
    /// Creates a catalog from an explicit list of profiles.
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    /// Creates a catalog holding the built-in devices.
    pub fn builtin() -> Self {
        let profiles = BUILTIN_DEVICES
            .iter()
            .map(|&(name, width, height, rotatable)| DeviceProfile {
                name: name.to_string(),
                width,
                height,
                rotatable,
            })
            .collect();
        Self { profiles }
    }

    /// Returns the profile named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Returns all profiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceProfile> {
        self.profiles.iter()
    }

    /// Returns all profile names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Number of profiles in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the catalog holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolves a selector list into concrete profiles.
    ///
    /// An empty list resolves to the whole catalog in catalog order.  No
    /// deduplication is performed: repeated selectors yield repeated profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownDevice`] for the first name that is not
    /// in the catalog.
    pub fn resolve(&self, selectors: &[DeviceSelector]) -> Result<Vec<DeviceProfile>, ResolveError> {
        if selectors.is_empty() {
            return Ok(self.profiles.clone());
        }

        selectors
            .iter()
            .map(|selector| match selector {
                DeviceSelector::ByName(name) => self
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ResolveError::UnknownDevice(name.clone())),
                DeviceSelector::Explicit(profile) => Ok(profile.clone()),
            })
            .collect()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns the process-wide built-in catalog.
///
/// The table is built on first use and never mutated afterwards.
pub fn builtin_catalog() -> &'static DeviceCatalog {
    static CATALOG: OnceLock<DeviceCatalog> = OnceLock::new();
    CATALOG.get_or_init(DeviceCatalog::builtin)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
