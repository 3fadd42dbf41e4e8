use clap::Args;
use eyre::{Context, Result};

use super::{UnwrapOrExit, project::ProjectArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    project: ProjectArgs,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.project.configuration().unwrap_or_exit();
        let report = ops::plan(&config)?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report.plan).wrap_err("Failed to serialize plan")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
