//! Translation of a settings record into external key/value pairs.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{SettingsError, SettingsResult};
use crate::{SettingKey, SettingKind, SettingName, SettingValue, SettingsRecord};

/// One emitted profile line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedSetting {
    /// External slicer key.
    pub key: &'static str,
    /// Formatted value.
    pub value: String,
}

/// Renders as a profile line without the newline: `key = value`.
impl fmt::Display for MappedSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// Translate a record into ordered external key/value pairs.
///
/// Entries are visited in the record's insertion order. Names outside the
/// schema, and known keys without an external counterpart, are dropped
/// without error.
///
/// # Errors
///
/// Returns the first [`SettingsError`] raised by [`format_value`]; no
/// partial list is returned.
///
/// # Example
///
/// ```
/// use project_settings::{map_settings, SettingKey, SettingsRecord};
///
/// let record = SettingsRecord::new()
///     .with(SettingKey::LayerHeight, 0.2)
///     .with(SettingKey::InfillDensity, 15)
///     .with(SettingKey::EnableSupports, false)
///     .with_named("notAKey", 1);
///
/// let lines: Vec<String> = map_settings(&record)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(
///     lines,
///     ["layer_height = 0.2", "sparse_infill_density = 15%", "support_enable = 0"]
/// );
/// ```
pub fn map_settings(record: &SettingsRecord) -> SettingsResult<Vec<MappedSetting>> {
    let mut mapped = Vec::with_capacity(record.len());

    for (name, value) in record.iter() {
        let SettingName::Known(key) = name else {
            trace!(name = %name, "Dropping setting outside the schema");
            continue;
        };
        let Some(external) = key.external_key() else {
            trace!(name = %name, "Dropping setting without an external key");
            continue;
        };
        mapped.push(MappedSetting {
            key: external,
            value: format_value(*key, value)?,
        });
    }

    debug!(
        entries = record.len(),
        mapped = mapped.len(),
        "Mapped settings record"
    );
    Ok(mapped)
}

/// Validate `value` against `key`'s kind and format it for the profile.
///
/// - booleans become `1` or `0`
/// - choice values are lowercased for support type, infill pattern,
///   fuzzy skin, brim type and seam position, and kept verbatim otherwise
/// - infill density gets a trailing `%`
/// - other numbers use plain decimal rendering (`.` separator, no grouping)
///
/// # Errors
///
/// Returns [`SettingsError::UnsupportedValue`] for a type or choice
/// mismatch and [`SettingsError::OutOfRange`] for numbers outside the
/// kind's range.
pub fn format_value(key: SettingKey, value: &SettingValue) -> SettingsResult<String> {
    let kind = key.kind();
    let formatted = match (kind, value) {
        (SettingKind::Toggle, SettingValue::Bool(flag)) => {
            String::from(if *flag { "1" } else { "0" })
        }
        (SettingKind::Choice(options), SettingValue::Text(text)) => {
            if !options.iter().any(|o| o.eq_ignore_ascii_case(text)) {
                return Err(unsupported(key, value));
            }
            if key.lowercases_value() {
                text.to_lowercase()
            } else {
                text.clone()
            }
        }
        (
            SettingKind::Measure(_)
            | SettingKind::Offset(_)
            | SettingKind::Count
            | SettingKind::Percent
            | SettingKind::Angle,
            SettingValue::Integer(_) | SettingValue::Number(_),
        ) => format_number(key, value)?,
        _ => return Err(unsupported(key, value)),
    };

    Ok(if key.has_percent_suffix() {
        format!("{formatted}%")
    } else {
        formatted
    })
}

fn format_number(key: SettingKey, value: &SettingValue) -> SettingsResult<String> {
    let number = value.as_f64().ok_or_else(|| unsupported(key, value))?;
    if !number.is_finite() {
        return Err(unsupported(key, value));
    }

    let (min, max) = match key.kind() {
        SettingKind::Offset(_) => (f64::MIN, f64::MAX),
        SettingKind::Percent => (0.0, 100.0),
        SettingKind::Angle => (0.0, 360.0),
        _ => (0.0, f64::MAX),
    };
    if !(min..=max).contains(&number) {
        return Err(SettingsError::OutOfRange {
            key: key.name(),
            value: number,
            min,
            max,
        });
    }

    if key.kind() == SettingKind::Count && number.fract() != 0.0 {
        return Err(unsupported(key, value));
    }

    Ok(match value {
        SettingValue::Integer(i) => i.to_string(),
        _ => number.to_string(),
    })
}

fn unsupported(key: SettingKey, value: &SettingValue) -> SettingsError {
    SettingsError::UnsupportedValue {
        key: key.name(),
        expected: key.kind().describe(),
        value: format!("{value} ({})", value.type_name()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fmt(key: SettingKey, value: impl Into<SettingValue>) -> SettingsResult<String> {
        format_value(key, &value.into())
    }

    #[test]
    fn booleans() {
        assert_eq!(fmt(SettingKey::EnableSupports, true).unwrap(), "1");
        assert_eq!(fmt(SettingKey::EnableSupports, false).unwrap(), "0");
    }

    #[test]
    fn infill_density_gets_percent() {
        assert_eq!(fmt(SettingKey::InfillDensity, 20).unwrap(), "20%");
        assert_eq!(fmt(SettingKey::InfillDensity, 12.5).unwrap(), "12.5%");
        assert_eq!(fmt(SettingKey::InfillDensity, 15.0).unwrap(), "15%");
    }

    #[test]
    fn other_percentages_stay_plain() {
        assert_eq!(fmt(SettingKey::FanSpeed, 80).unwrap(), "80");
        assert_eq!(fmt(SettingKey::InfillWallOverlap, 15).unwrap(), "15");
    }

    #[test]
    fn choices_lowercase_for_designated_fields() {
        assert_eq!(fmt(SettingKey::SupportType, "Tree").unwrap(), "tree");
        assert_eq!(
            fmt(SettingKey::InfillPattern, "CubicSubdivision").unwrap(),
            "cubicsubdivision"
        );
        assert_eq!(fmt(SettingKey::FuzzySkin, "Outer").unwrap(), "outer");
        assert_eq!(fmt(SettingKey::BrimType, "outer_brim").unwrap(), "outer_brim");
        assert_eq!(fmt(SettingKey::SeamPosition, "ALIGNED").unwrap(), "aligned");
    }

    #[test]
    fn assistant_vocabulary_is_accepted() {
        assert_eq!(fmt(SettingKey::SupportType, "Standard").unwrap(), "standard");
        assert_eq!(fmt(SettingKey::BrimType, "skirt").unwrap(), "skirt");
        assert_eq!(fmt(SettingKey::BrimType, "brim").unwrap(), "brim");
        assert_eq!(fmt(SettingKey::BrimType, "raft").unwrap(), "raft");
        assert_eq!(fmt(SettingKey::SeamPosition, "Shortest").unwrap(), "shortest");
        assert_eq!(
            fmt(SettingKey::SeamPosition, "User Specified").unwrap(),
            "user specified"
        );
    }

    #[test]
    fn filament_type_is_verbatim() {
        assert_eq!(fmt(SettingKey::FilamentType, "PETG").unwrap(), "PETG");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(fmt(SettingKey::LayerHeight, 0.2).unwrap(), "0.2");
        assert_eq!(fmt(SettingKey::Acceleration, 10000).unwrap(), "10000");
        assert_eq!(fmt(SettingKey::Acceleration, 12500.5).unwrap(), "12500.5");
        assert_eq!(fmt(SettingKey::WallLoops, 3.0).unwrap(), "3");
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let err = fmt(SettingKey::SupportType, "Organic").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::UnsupportedValue {
                key: "supportType",
                ..
            }
        ));
    }

    #[test]
    fn type_mismatches_are_rejected() {
        assert!(fmt(SettingKey::EnableSupports, 1).is_err());
        assert!(fmt(SettingKey::LayerHeight, "0.2").is_err());
        assert!(fmt(SettingKey::InfillPattern, 3).is_err());
        assert!(fmt(SettingKey::WallLoops, 2.5).is_err());
    }

    #[test]
    fn ranges_are_enforced() {
        assert!(matches!(
            fmt(SettingKey::InfillDensity, 101),
            Err(SettingsError::OutOfRange { max, .. }) if (max - 100.0).abs() < f64::EPSILON
        ));
        assert!(fmt(SettingKey::LayerHeight, -0.1).is_err());
        assert!(fmt(SettingKey::SupportOverhangAngle, 400).is_err());
        assert!(fmt(SettingKey::LayerHeight, f64::NAN).is_err());
        assert!(fmt(SettingKey::OriginX, -110.0).is_ok());
    }

    #[test]
    fn unmapped_keys_are_dropped_silently() {
        let record = SettingsRecord::new()
            .with(SettingKey::NozzleDiameter, 0.4)
            .with_named("somethingElse", "ignored")
            .with(SettingKey::WallLoops, 2);

        let mapped = map_settings(&record).unwrap();
        assert_eq!(
            mapped,
            vec![MappedSetting {
                key: "wall_loops",
                value: "2".to_string()
            }]
        );
    }

    #[test]
    fn unmapped_keys_are_not_validated() {
        let record = SettingsRecord::new().with(SettingKey::BedShape, "Hexagonal");
        assert!(map_settings(&record).unwrap().is_empty());
    }

    #[test]
    fn first_bad_value_fails_the_whole_record() {
        let record = SettingsRecord::new()
            .with(SettingKey::LayerHeight, 0.2)
            .with(SettingKey::SupportType, "Organic");
        assert!(map_settings(&record).is_err());
    }

    #[test]
    fn full_record_emits_each_key_once() {
        let mut record = SettingsRecord::new();
        for key in SettingKey::ALL {
            let value: SettingValue = match key.kind() {
                SettingKind::Toggle => true.into(),
                SettingKind::Choice(options) => options[0].into(),
                SettingKind::Count => 2.into(),
                _ => 10.0.into(),
            };
            record.insert(key, value);
        }

        let mapped = map_settings(&record).unwrap();
        let keys: HashSet<_> = mapped.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), mapped.len());
        assert_eq!(mapped.len(), 57);
        assert!(mapped
            .iter()
            .all(|m| SettingKey::ALL.iter().any(|k| k.external_key() == Some(m.key))));
    }
}
