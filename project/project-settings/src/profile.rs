//! Process-profile text rendering.

use crate::error::{SettingsError, SettingsResult};
use crate::{map_settings, MappedSetting, SettingsRecord};

/// Two-line header that names the profile and its base profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    /// Profile name, rendered as `[print:<name>]`.
    pub name: String,
    /// Base profile the generated one inherits from.
    pub inherits: String,
}

impl Default for ProfileHeader {
    fn default() -> Self {
        Self {
            name: "IntelliSlice AI Profile".to_string(),
            inherits: "0.20mm Standard @MyGenericPrinter".to_string(),
        }
    }
}

impl ProfileHeader {
    /// Create a header with the given name and base profile.
    #[must_use]
    pub fn new(name: impl Into<String>, inherits: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inherits: inherits.into(),
        }
    }

    /// Set the profile name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the inherited base profile.
    #[must_use]
    pub fn with_inherits(mut self, inherits: impl Into<String>) -> Self {
        self.inherits = inherits.into();
        self
    }

    /// Check that both fields fit on their header line.
    ///
    /// The name sits inside `[print:...]` and the base profile inside a
    /// quoted string, so neither may hold `"`, `]` or a line break.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHeader`] naming the offending field.
    pub fn validate(&self) -> SettingsResult<()> {
        for (field, value) in [("name", &self.name), ("inherits", &self.inherits)] {
            if value.contains(['"', ']', '\n', '\r']) {
                return Err(SettingsError::InvalidHeader {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Render mapped settings as profile text.
///
/// Output is the header followed by one `key = value` line per setting,
/// each terminated by `\n`. The header is written as given; callers with
/// untrusted header text go through [`settings_text`], which validates it.
///
/// # Example
///
/// ```
/// use project_settings::{render_profile, MappedSetting, ProfileHeader};
///
/// let text = render_profile(
///     &[MappedSetting { key: "layer_height", value: "0.2".into() }],
///     &ProfileHeader::default(),
/// );
/// assert_eq!(
///     text,
///     "[print:IntelliSlice AI Profile]\n\
///      inherits = \"0.20mm Standard @MyGenericPrinter\"\n\
///      layer_height = 0.2\n"
/// );
/// ```
#[must_use]
pub fn render_profile(settings: &[MappedSetting], header: &ProfileHeader) -> String {
    let mut text = format!(
        "[print:{}]\ninherits = \"{}\"\n",
        header.name, header.inherits
    );
    for setting in settings {
        text.push_str(setting.key);
        text.push_str(" = ");
        text.push_str(&setting.value);
        text.push('\n');
    }
    text
}

/// Map a record and render it in one step.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidHeader`] for a header that
/// [`ProfileHeader::validate`] rejects, and the errors of [`map_settings`].
pub fn settings_text(record: &SettingsRecord, header: &ProfileHeader) -> SettingsResult<String> {
    header.validate()?;
    Ok(render_profile(&map_settings(record)?, header))
}
