//! Generate a project.

use std::path::Path;

use eyre::{Context, Result};
use startfast_config::{Configuration, Preset};
use startfast_engine::{Error, Orchestrator, OverwritePolicy};
use startfast_fastapi::FastApi;

use crate::{
    progress::Progress,
    reports::{NewReport, NewResult, PreviewFile},
};

/// Options for project generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewOptions<'a> {
    /// Whether an existing output directory may be replaced.
    pub policy: OverwritePolicy,
    /// Render in memory and return every file instead of writing.
    pub dry_run: bool,
    /// Print one line per generator while running.
    pub progress: bool,
    /// Write the configuration as a preset once the tree is on disk.
    /// Dry runs never write it.
    pub save_preset: Option<&'a Path>,
}

/// Generate the project described by `config`.
pub fn new(config: &Configuration, options: NewOptions<'_>) -> Result<NewReport> {
    let orchestrator =
        Orchestrator::new(config, &FastApi).wrap_err("Failed to load FastAPI templates")?;

    if options.dry_run {
        let preview = orchestrator.preview().wrap_err("Failed to render project")?;
        let files = preview
            .files
            .iter()
            .map(|f| PreviewFile {
                path: f.path().to_string(),
                content: f.content().to_string(),
            })
            .collect();

        return Ok(NewReport {
            name: config.name().to_string(),
            generation: preview.report,
            result: NewResult::Preview(files),
        });
    }

    let orchestrator = if options.progress {
        orchestrator.plugin(Progress)
    } else {
        orchestrator
    };

    let output = config.output_path();
    let generation = match orchestrator.run(options.policy) {
        Ok(report) => report,
        Err(err @ Error::TargetExists { .. }) => {
            return Err(err).wrap_err("Refusing to overwrite without confirmation");
        }
        Err(err) => {
            return Err(err).wrap_err_with(|| {
                format!(
                    "Generation failed; '{}' may be partially populated",
                    output.display()
                )
            });
        }
    };

    if let Some(path) = options.save_preset {
        Preset::from_configuration(config)
            .write(path)
            .wrap_err_with(|| format!("Failed to save preset to '{}'", path.display()))?;
    }

    Ok(NewReport {
        name: config.name().to_string(),
        generation,
        result: NewResult::Written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("shop");
        let config = Configuration::builder("shop", output.clone())
            .build()
            .unwrap();

        let report = new(
            &config,
            NewOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(!output.exists());
        let NewResult::Preview(files) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), report.generation.file_count());
        assert!(files.iter().any(|f| f.path == "app/main.py"));
    }

    #[test]
    fn test_preset_saved_only_when_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("shop");
        let preset = dir.path().join("shop.toml");
        let config = Configuration::builder("shop", output.clone())
            .build()
            .unwrap();

        let options = NewOptions {
            dry_run: true,
            save_preset: Some(&preset),
            ..Default::default()
        };
        new(&config, options).unwrap();
        assert!(!preset.exists());

        let options = NewOptions {
            save_preset: Some(&preset),
            ..Default::default()
        };
        new(&config, options).unwrap();
        let saved = Preset::from_file(&preset).unwrap();
        assert_eq!(saved.project.name, "shop");
    }

    #[test]
    fn test_writes_project() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("shop");
        let config = Configuration::builder("shop", output.clone())
            .build()
            .unwrap();

        let report = new(&config, NewOptions::default()).unwrap();

        assert!(matches!(report.result, NewResult::Written));
        assert!(output.join("app/main.py").is_file());
        assert!(output.join("README.md").is_file());
    }

    #[test]
    fn test_existing_target_needs_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("shop");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep.txt"), "mine").unwrap();
        let config = Configuration::builder("shop", output.clone())
            .build()
            .unwrap();

        let err = new(&config, NewOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert!(output.join("keep.txt").exists());

        let options = NewOptions {
            policy: OverwritePolicy::Confirmed,
            ..Default::default()
        };
        new(&config, options).unwrap();
        assert!(!output.join("keep.txt").exists());
        assert!(output.join("app/main.py").is_file());
    }
}
