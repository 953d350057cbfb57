//! Ordered settings record.

use std::fmt;

use crate::{SettingKey, SettingValue};

/// Name of a record entry: a known key, or any other string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingName {
    /// One of the closed set of settings keys.
    Known(SettingKey),
    /// A name outside the schema. Kept, but never emitted.
    Other(String),
}

impl SettingName {
    /// Resolve a raw name against the schema.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        SettingKey::from_name(name).map_or_else(|| Self::Other(name.to_string()), Self::Known)
    }

    /// The raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(key) => key.name(),
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat settings record that remembers insertion order.
///
/// Re-inserting an existing name replaces the value in place, keeping the
/// entry's original position. The mapper walks entries in this order, so the
/// emitted profile is deterministic for a given record.
///
/// # Example
///
/// ```
/// use project_settings::{SettingKey, SettingsRecord};
///
/// let record = SettingsRecord::new()
///     .with(SettingKey::LayerHeight, 0.2)
///     .with(SettingKey::InfillDensity, 15)
///     .with(SettingKey::EnableSupports, false);
///
/// assert_eq!(record.len(), 3);
/// assert_eq!(record.iter().next().map(|(name, _)| name.as_str()), Some("layerHeight"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsRecord {
    entries: Vec<(SettingName, SettingValue)>,
}

impl SettingsRecord {
    /// Create an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a known key, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: SettingKey,
        value: impl Into<SettingValue>,
    ) -> Option<SettingValue> {
        self.insert_entry(SettingName::Known(key), value.into())
    }

    /// Set a value by raw name. Names outside the schema are accepted.
    pub fn insert_named(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> Option<SettingValue> {
        self.insert_entry(SettingName::parse(name), value.into())
    }

    /// Builder form of [`SettingsRecord::insert`].
    #[must_use]
    pub fn with(mut self, key: SettingKey, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`SettingsRecord::insert_named`].
    #[must_use]
    pub fn with_named(mut self, name: &str, value: impl Into<SettingValue>) -> Self {
        self.insert_named(name, value);
        self
    }

    fn insert_entry(&mut self, name: SettingName, value: SettingValue) -> Option<SettingValue> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(std::mem::replace(slot, value))
        } else {
            self.entries.push((name, value));
            None
        }
    }

    /// Value stored for a known key.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == SettingName::Known(key))
            .map(|(_, value)| value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SettingName, &SettingValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    /// Number of entries, known and unknown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<SettingValue>> FromIterator<(SettingKey, V)> for SettingsRecord {
    fn from_iter<T: IntoIterator<Item = (SettingKey, V)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(feature = "serde")]
mod de {
    use super::{SettingName, SettingsRecord};
    use crate::SettingValue;
    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    /// Reads a JSON object entry by entry, so document order is kept without
    /// depending on the map type of the underlying format.
    struct RecordVisitor;

    impl<'de> Visitor<'de> for RecordVisitor {
        type Value = SettingsRecord;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of setting names to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut record = SettingsRecord::new();
            while let Some(raw) = map.next_key::<String>()? {
                let value = match SettingName::parse(&raw) {
                    SettingName::Known(_) => map.next_value::<Option<SettingValue>>()?,
                    SettingName::Other(_) => map.next_value::<Lenient>()?.0,
                };
                // Null means "not set"
                if let Some(value) = value {
                    record.insert_named(&raw, value);
                }
            }
            Ok(record)
        }
    }

    impl<'de> Deserialize<'de> for SettingsRecord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(RecordVisitor)
        }
    }

    /// Scalar value for names outside the schema; arrays and objects are skipped.
    struct Lenient(Option<SettingValue>);

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Lenient;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("any value")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Lenient(Some(SettingValue::Bool(v))))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Lenient(Some(SettingValue::Integer(v))))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Lenient(Some(
                i64::try_from(v).map_or(SettingValue::Number(v as f64), SettingValue::Integer),
            )))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Lenient(Some(SettingValue::Number(v))))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Lenient(Some(SettingValue::Text(v.to_string()))))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Lenient(None))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Lenient(None))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Lenient(None))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Lenient(None))
        }
    }

    impl<'de> Deserialize<'de> for Lenient {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LenientVisitor)
        }
    }
}
