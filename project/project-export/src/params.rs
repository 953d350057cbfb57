//! Parameters for an export run.

use project_3mf::PackageParams;
use project_settings::ProfileHeader;

/// Parameters for an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportParams {
    /// Header of the rendered process profile.
    pub profile: ProfileHeader,
    /// Package layout and compression.
    pub package: PackageParams,
}

impl ExportParams {
    /// Create params favoring speed over archive size.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            package: PackageParams::fast(),
            ..Default::default()
        }
    }

    /// Set the profile header.
    #[must_use]
    pub fn with_profile(mut self, profile: ProfileHeader) -> Self {
        self.profile = profile;
        self
    }

    /// Set the package parameters.
    #[must_use]
    pub fn with_package(mut self, package: PackageParams) -> Self {
        self.package = package;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = ExportParams::default();
        assert_eq!(params.profile.name, "IntelliSlice AI Profile");
        assert_eq!(params.package.compression_level, 6);
    }

    #[test]
    fn builders() {
        let params = ExportParams::fast().with_profile(ProfileHeader::default().with_name("Fast"));
        assert_eq!(params.package.compression_level, 1);
        assert_eq!(params.profile.name, "Fast");
    }
}
