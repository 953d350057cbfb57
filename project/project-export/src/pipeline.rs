//! Single export runs.

use mesh_io::decode_stl;
use mesh_types::MeshTopology;
use project_3mf::{assemble, display_name, serialize_model, ProjectPackage};
use project_settings::{settings_text, SettingsRecord};
use tracing::{debug, info, warn};

use crate::error::ExportResult;
use crate::params::ExportParams;
use crate::stage::ExportStage;

/// Convert mesh bytes and a settings record into a project package.
///
/// The mesh may be binary or ASCII STL. `original_file_name` names the
/// upload; its base name becomes the model title and the prefix of
/// [`ProjectPackage::file_name`].
///
/// The run is all-or-nothing: on error no package is produced.
///
/// # Errors
///
/// Returns [`ExportError`](crate::ExportError) from the first stage that
/// fails; [`ExportError::stage`](crate::ExportError::stage) tells which.
///
/// # Example
///
/// ```
/// use project_export::{export_project, ExportParams};
/// use project_settings::{SettingKey, SettingsRecord};
///
/// let stl = "solid t
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid t";
///
/// let settings = SettingsRecord::new().with(SettingKey::LayerHeight, 0.2);
/// let package =
///     export_project(stl.as_bytes(), &settings, "t.stl", &ExportParams::default()).unwrap();
/// assert_eq!(package.file_name, "t_IntelliSlice.3mf");
/// ```
pub fn export_project(
    mesh_bytes: &[u8],
    settings: &SettingsRecord,
    original_file_name: &str,
    params: &ExportParams,
) -> ExportResult<ProjectPackage> {
    export_project_with_progress(mesh_bytes, settings, original_file_name, params, |_| {})
}

/// Like [`export_project`], reporting each stage as it is entered.
///
/// `on_stage` sees `Decoding`, `Serializing`, `Mapping` and `Assembling` in
/// order, then exactly one of `Done` or `Failed`.
///
/// # Errors
///
/// Same as [`export_project`].
pub fn export_project_with_progress<F>(
    mesh_bytes: &[u8],
    settings: &SettingsRecord,
    original_file_name: &str,
    params: &ExportParams,
    on_stage: F,
) -> ExportResult<ProjectPackage>
where
    F: FnMut(ExportStage),
{
    info!(
        file = original_file_name,
        mesh_bytes = mesh_bytes.len(),
        settings = settings.len(),
        "Starting project export"
    );

    let mut run = Run::new(on_stage);
    let result = run.execute(mesh_bytes, settings, original_file_name, params);

    match &result {
        Ok(package) => {
            run.enter(ExportStage::Done);
            info!(
                file = %package.file_name,
                package_bytes = package.len(),
                "Project export complete"
            );
        }
        Err(err) => {
            run.enter(ExportStage::Failed);
            warn!(stage = %err.stage(), error = %err, "Project export failed");
        }
    }
    result
}

struct Run<F> {
    stage: ExportStage,
    on_stage: F,
}

impl<F: FnMut(ExportStage)> Run<F> {
    const fn new(on_stage: F) -> Self {
        Self {
            stage: ExportStage::Idle,
            on_stage,
        }
    }

    fn enter(&mut self, stage: ExportStage) {
        debug!(from = %self.stage, to = %stage, "Export stage");
        self.stage = stage;
        (self.on_stage)(stage);
    }

    fn execute(
        &mut self,
        mesh_bytes: &[u8],
        settings: &SettingsRecord,
        original_file_name: &str,
        params: &ExportParams,
    ) -> ExportResult<ProjectPackage> {
        self.enter(ExportStage::Decoding);
        let mesh = decode_stl(mesh_bytes)?;
        debug!(triangles = mesh.triangle_count(), "Decoded mesh");

        self.enter(ExportStage::Serializing);
        let metadata = params.package.metadata(display_name(original_file_name));
        let model = serialize_model(&mesh, &metadata)?;

        self.enter(ExportStage::Mapping);
        let text = settings_text(settings, &params.profile)?;

        self.enter(ExportStage::Assembling);
        Ok(assemble(&model, &text, original_file_name, &params.package)?)
    }
}
