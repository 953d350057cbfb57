//! Project package assembly.

use tracing::debug;

use crate::error::{PackageError, PackageResult};
use crate::opc::{
    relationships_xml, MODEL_MEDIA_TYPE, PACKAGE_MEDIA_TYPE, RELATIONSHIPS_MEDIA_TYPE,
    ROOT_RELS_PART, TEXT_MEDIA_TYPE,
};
use crate::package::{Package, PackagePart};
use crate::params::PackageParams;

/// A finished project package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPackage {
    /// Suggested download name, `<basename>_<suffix>.<extension>`.
    pub file_name: String,
    /// Zip archive bytes.
    pub bytes: Vec<u8>,
}

impl ProjectPackage {
    /// Media type of the package bytes.
    pub const MEDIA_TYPE: &'static str = PACKAGE_MEDIA_TYPE;

    /// Size of the archive in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the archive is empty. Assembled packages never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Build a project package from a model document and settings text.
///
/// The package holds, in order: the content-type manifest, the root
/// relationships part, the model at `params.model_part`, and one copy of
/// `settings_text` under each of `params.settings_parts`.
///
/// `model_file_name` is the caller's original mesh file name; it only
/// determines [`ProjectPackage::file_name`].
///
/// # Errors
///
/// Returns [`PackageError::NoSettingsPart`] if `params.settings_parts` is
/// empty, path errors for unusable or colliding part names, and archive
/// errors from writing the zip.
pub fn assemble(
    model_markup: &str,
    settings_text: &str,
    model_file_name: &str,
    params: &PackageParams,
) -> PackageResult<ProjectPackage> {
    if params.settings_parts.is_empty() {
        return Err(PackageError::NoSettingsPart);
    }

    let mut package = Package::new();
    package.add_part(PackagePart::new(
        ROOT_RELS_PART,
        relationships_xml(&params.model_part)?,
        RELATIONSHIPS_MEDIA_TYPE,
    ))?;
    package.add_part(PackagePart::new(
        params.model_part.as_str(),
        model_markup,
        MODEL_MEDIA_TYPE,
    ))?;
    for path in &params.settings_parts {
        package.add_part(PackagePart::new(path.as_str(), settings_text, TEXT_MEDIA_TYPE))?;
    }

    let bytes = package.to_zip_bytes(params.compression_level)?;
    let file_name = output_file_name(
        model_file_name,
        &params.product_suffix,
        &params.package_extension,
    );

    debug!(
        file_name = %file_name,
        model_bytes = model_markup.len(),
        settings_bytes = settings_text.len(),
        package_bytes = bytes.len(),
        "Assembled project package"
    );
    Ok(ProjectPackage { file_name, bytes })
}

/// Base name of an uploaded file, without directories or extension.
///
/// Both `/` and `\` count as separators. A name that would come out empty
/// becomes `model`.
///
/// # Example
///
/// ```
/// use project_3mf::display_name;
///
/// assert_eq!(display_name("C:\\scans\\benchy.stl"), "benchy");
/// assert_eq!(display_name("bracket.v2.stl"), "bracket.v2");
/// assert_eq!(display_name(".stl"), "model");
/// ```
#[must_use]
pub fn display_name(original: &str) -> &str {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let stem = match base.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => base,
    };
    if stem.is_empty() {
        "model"
    } else {
        stem
    }
}

/// Output file name `<basename>_<suffix>.<extension>`.
///
/// # Example
///
/// ```
/// use project_3mf::output_file_name;
///
/// assert_eq!(output_file_name("benchy.stl", "IntelliSlice", "3mf"), "benchy_IntelliSlice.3mf");
/// ```
#[must_use]
pub fn output_file_name(original: &str, suffix: &str, extension: &str) -> String {
    format!("{}_{suffix}.{extension}", display_name(original))
}
