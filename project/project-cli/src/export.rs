//! `export` command.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use project_3mf::output_file_name;
use project_export::{export_batch, ExportJob, ExportParams};
use project_settings::SettingsRecord;
use tracing::{debug, info};

#[derive(Args)]
pub struct ExportArgs {
    /// Mesh files (binary or ASCII STL)
    #[arg(name = "MESH", required = true)]
    pub meshes: Vec<PathBuf>,

    /// JSON object of settings keyed by camelCase name
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Directory for the produced packages
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Profile name written into the settings header
    #[arg(long)]
    pub profile_name: Option<String>,

    /// Base profile the generated profile inherits from
    #[arg(long)]
    pub inherits: Option<String>,

    /// Deflate level, 1 (fastest) to 9 (smallest)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,
}

impl ExportArgs {
    fn params(&self) -> ExportParams {
        let mut params = ExportParams::default();
        if let Some(name) = &self.profile_name {
            params.profile = params.profile.with_name(name.as_str());
        }
        if let Some(inherits) = &self.inherits {
            params.profile = params.profile.with_inherits(inherits.as_str());
        }
        if let Some(level) = self.compression_level {
            params.package = params.package.with_compression_level(level);
        }
        params
    }
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => SettingsRecord::new(),
    };

    let params = args.params();
    params.profile.validate()?;
    check_output_names(&args.meshes, &params)?;

    let jobs = args
        .meshes
        .iter()
        .map(|path| {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok(ExportJob::new(file_name(path), bytes, settings.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let results = export_batch(&jobs, &params);

    let mut failed = 0;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(package) => {
                let dest = args.out.join(&package.file_name);
                fs::write(&dest, &package.bytes)
                    .with_context(|| format!("failed to write {}", dest.display()))?;
                info!(path = %dest.display(), bytes = package.len(), "Wrote package");
                println!(
                    "{} {} -> {} ({} bytes)",
                    "✓".green(),
                    job.file_name,
                    dest.display(),
                    package.len()
                );
            }
            Err(err) => {
                failed += 1;
                eprintln!(
                    "{} {}: {} {}",
                    "✗".red(),
                    job.file_name,
                    err,
                    format!("[{}]", err.stage()).dimmed()
                );
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} exports failed", jobs.len());
    }
    Ok(())
}

/// Fail before exporting when two inputs would produce the same package name.
fn check_output_names(meshes: &[PathBuf], params: &ExportParams) -> Result<()> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for path in meshes {
        let name = output_file_name(
            &file_name(path),
            &params.package.product_suffix,
            &params.package.package_extension,
        );
        debug!(input = %path.display(), output = %name, "Planned package");
        if let Some(first) = seen.insert(name.clone(), path.as_path()) {
            bail!(
                "{} and {} would both be written as {name}",
                first.display(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Read a settings record from a JSON file.
pub fn load_settings(path: &Path) -> Result<SettingsRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid settings JSON in {}", path.display()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use project_settings::{SettingKey, SettingValue};

    use super::*;

    const TRIANGLE: &str = "solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid t\n";

    fn args(dir: &Path, meshes: Vec<PathBuf>, settings: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            meshes,
            settings,
            out: dir.join("out"),
            profile_name: Some("Bench".to_string()),
            inherits: None,
            compression_level: Some(3),
        }
    }

    #[test]
    fn settings_keep_json_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(
            &path,
            r#"{"infillDensity": 20, "layerHeight": 0.2, "unknown": [1, 2], "enableSupports": null}"#,
        )
        .unwrap();

        let record = load_settings(&path).unwrap();
        let names: Vec<_> = record.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["infillDensity", "layerHeight"]);
        assert_eq!(
            record.get(SettingKey::InfillDensity),
            Some(&SettingValue::Integer(20))
        );
    }

    #[test]
    fn params_follow_flags() {
        let dir = tempfile::tempdir().unwrap();
        let params = args(dir.path(), Vec::new(), None).params();
        assert_eq!(params.profile.name, "Bench");
        assert_eq!(params.package.compression_level, 3);
    }

    #[test]
    fn writes_package_next_to_flags() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = dir.path().join("wedge.stl");
        fs::write(&mesh, TRIANGLE).unwrap();
        let settings = dir.path().join("s.json");
        fs::write(&settings, r#"{"layerHeight": 0.2}"#).unwrap();

        run(&args(dir.path(), vec![mesh], Some(settings))).unwrap();
        assert!(dir.path().join("out/wedge_IntelliSlice.3mf").is_file());
    }

    #[test]
    fn same_base_name_is_refused_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        let first = dir.path().join("a/part.stl");
        let second = dir.path().join("b/part.stl");
        fs::write(&first, TRIANGLE).unwrap();
        fs::write(&second, TRIANGLE).unwrap();

        let err = run(&args(dir.path(), vec![first, second], None)).unwrap_err();
        assert!(err.to_string().contains("part_IntelliSlice.3mf"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn quote_in_inherits_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = dir.path().join("wedge.stl");
        fs::write(&mesh, TRIANGLE).unwrap();
        let mut args = args(dir.path(), vec![mesh], None);
        args.inherits = Some("Base\" extra".to_string());

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("inherits"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn failed_mesh_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = dir.path().join("bad.stl");
        fs::write(&mesh, b"not a mesh").unwrap();

        let err = run(&args(dir.path(), vec![mesh], None)).unwrap_err();
        assert!(err.to_string().contains("1 of 1"));
    }
}
