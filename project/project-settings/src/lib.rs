//! Slicer settings for IntelliSlice project export.
//!
//! This crate owns the settings record a caller hands to the exporter and its
//! translation into an OrcaSlicer process profile:
//!
//! - [`SettingKey`] - The closed set of named parameters, with their value
//!   constraints and the external-key mapping table
//! - [`SettingsRecord`] - An insertion-ordered record of values
//! - [`map_settings`] - Record to ordered `(external key, value)` pairs
//! - [`render_profile`] - Pairs to profile text behind a [`ProfileHeader`]
//!
//! # Mapping Rules
//!
//! Keys without an external counterpart, and names outside the schema, are
//! dropped silently. Emitted values are validated first; a value that does not
//! fit its key fails the whole translation with [`SettingsError`].
//!
//! # Example
//!
//! ```
//! use project_settings::{settings_text, ProfileHeader, SettingKey, SettingsRecord};
//!
//! let record = SettingsRecord::new()
//!     .with(SettingKey::LayerHeight, 0.2)
//!     .with(SettingKey::InfillDensity, 15)
//!     .with(SettingKey::EnableSupports, false);
//!
//! let text = settings_text(&record, &ProfileHeader::default()).unwrap();
//! assert!(text.contains("sparse_infill_density = 15%\n"));
//! ```
//!
//! # Features
//!
//! - `serde`: deserialize [`SettingsRecord`] from a map of camelCase names,
//!   keeping document order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod key;
mod mapper;
mod profile;
mod record;
mod value;

pub use error::{SettingsError, SettingsResult};
pub use key::{
    SettingGroup, SettingKey, SettingKind, BED_SHAPES, BRIM_TYPES, FILAMENT_TYPES,
    FUZZY_SKIN_MODES, INFILL_PATTERNS, SEAM_POSITIONS, SUPPORT_TYPES,
};
pub use mapper::{format_value, map_settings, MappedSetting};
pub use profile::{render_profile, settings_text, ProfileHeader};
pub use record::{SettingName, SettingsRecord};
pub use value::SettingValue;
