//! Plan command report data structures.

use startfast_engine::Plan;

use super::output::{Output, Report};

/// Which generators a configuration selects, and the directories it scaffolds.
#[derive(Debug)]
pub struct PlanReport {
    pub name: String,
    pub plan: Plan,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        let plan = &self.plan;
        out.title(&format!("Plan for {}", self.name));
        out.key_value("Target", plan.target);
        out.key_value("Path", &plan.output_dir.display().to_string());
        out.newline();

        out.section("Generators");
        for generator in &plan.generators {
            if generator.applicable {
                out.added_item(generator.name);
            } else {
                out.removed_item(&format!("{} (skipped)", generator.name));
            }
        }
        out.newline();

        out.section("Directories");
        for dir in &plan.directories {
            out.list_item(&format!("{}/", dir));
        }
    }
}
