//! Parallel export of independent jobs.

use project_3mf::ProjectPackage;
use project_settings::SettingsRecord;
use rayon::prelude::*;
use tracing::info;

use crate::error::ExportResult;
use crate::params::ExportParams;
use crate::pipeline::export_project;

/// One conversion in a batch.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Original mesh file name.
    pub file_name: String,
    /// Raw mesh bytes.
    pub mesh_bytes: Vec<u8>,
    /// Settings for this mesh.
    pub settings: SettingsRecord,
}

impl ExportJob {
    /// Create a job.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        mesh_bytes: impl Into<Vec<u8>>,
        settings: SettingsRecord,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mesh_bytes: mesh_bytes.into(),
            settings,
        }
    }
}

/// Export every job on the rayon pool.
///
/// Jobs share nothing, so one failure does not affect the others. Results
/// come back in job order.
#[must_use]
pub fn export_batch(
    jobs: &[ExportJob],
    params: &ExportParams,
) -> Vec<ExportResult<ProjectPackage>> {
    info!(jobs = jobs.len(), "Starting batch export");

    let results: Vec<_> = jobs
        .par_iter()
        .map(|job| export_project(&job.mesh_bytes, &job.settings, &job.file_name, params))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(jobs = jobs.len(), failed, "Batch export complete");
    results
}
