//! Parameters for package assembly.

use crate::opc::DEFAULT_MODEL_PART;

/// Product name written into model metadata and output file names.
pub const PRODUCT_NAME: &str = "IntelliSlice AI";

/// Parameters for package assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageParams {
    /// Deflate level for every part, 1 (fastest) to 9 (smallest). Default: 6
    pub compression_level: u8,

    /// Part paths that each receive a copy of the settings text.
    /// Default: `Metadata/Slicer_settings.config` and
    /// `Metadata/print_profile.config`
    pub settings_parts: Vec<String>,

    /// Part path of the serialized model. Default: `3D/3dmodel.model`
    pub model_part: String,

    /// Suffix appended to the original base name. Default: `IntelliSlice`
    pub product_suffix: String,

    /// Extension of the produced file name. Default: `3mf`
    pub package_extension: String,

    /// Designer recorded in model metadata. Default: `IntelliSlice AI`
    pub designer: String,

    /// Application recorded in model metadata. Default: `IntelliSlice AI`
    pub application: String,
}

impl Default for PackageParams {
    fn default() -> Self {
        Self {
            compression_level: 6,
            settings_parts: vec![
                "Metadata/Slicer_settings.config".to_string(),
                "Metadata/print_profile.config".to_string(),
            ],
            model_part: DEFAULT_MODEL_PART.to_string(),
            product_suffix: "IntelliSlice".to_string(),
            package_extension: "3mf".to_string(),
            designer: PRODUCT_NAME.to_string(),
            application: PRODUCT_NAME.to_string(),
        }
    }
}

impl PackageParams {
    /// Create params favoring speed over archive size.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            compression_level: 1,
            ..Default::default()
        }
    }

    /// Create params favoring archive size over speed.
    #[must_use]
    pub fn smallest() -> Self {
        Self {
            compression_level: 9,
            ..Default::default()
        }
    }

    /// Set the deflate level, clamped to 1..=9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level.clamp(1, 9);
        self
    }

    /// Replace the settings part paths.
    #[must_use]
    pub fn with_settings_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings_parts = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the product suffix used in output file names.
    #[must_use]
    pub fn with_product_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.product_suffix = suffix.into();
        self
    }

    /// Set the designer recorded in model metadata.
    #[must_use]
    pub fn with_designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    /// Metadata for a model with the given title.
    #[must_use]
    pub fn metadata(&self, title: impl Into<String>) -> ModelMetadata {
        ModelMetadata {
            title: title.into(),
            designer: self.designer.clone(),
            application: self.application.clone(),
        }
    }
}

/// Descriptive strings written into the model document.
///
/// Empty strings are omitted from the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Display name of the model.
    pub title: String,
    /// Who produced the model.
    pub designer: String,
    /// Program that wrote the document.
    pub application: String,
}

impl ModelMetadata {
    /// Create metadata with a title and the product name for the rest.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        PackageParams::default().metadata(title)
    }
}
