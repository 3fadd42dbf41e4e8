use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};
use startfast_engine::OverwritePolicy;

use super::{UnwrapOrExit, project::ProjectArgs};
use crate::{
    ops::{self, NewOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    #[command(flatten)]
    project: ProjectArgs,

    /// Replace an existing project directory without asking
    #[arg(short, long)]
    force: bool,

    /// Print every generated file instead of writing to disk
    #[arg(long)]
    dry_run: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    /// Also write the resolved configuration as a TOML preset (skipped with --dry-run)
    #[arg(long, value_name = "FILE")]
    save_preset: Option<PathBuf>,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.project.configuration().unwrap_or_exit();

        let target = config.output_path();
        let policy = if !target.exists() {
            OverwritePolicy::Refuse
        } else if self.force || self.dry_run || confirm_overwrite(target)? {
            OverwritePolicy::Confirmed
        } else {
            println!("Cancelled.");
            return Ok(());
        };

        let report = ops::new(
            &config,
            NewOptions {
                policy,
                dry_run: self.dry_run,
                progress: !self.json && !self.dry_run,
                save_preset: self.save_preset.as_deref(),
            },
        )?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.generation)
                .wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}

fn confirm_overwrite(target: &Path) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "'{}' already exists and will be replaced. Continue?",
            target.display()
        ))
        .default(false)
        .interact()
        .wrap_err("Failed to read confirmation")
}
