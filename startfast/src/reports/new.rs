//! New command report data structures.

use startfast_engine::GenerationReport;

use super::output::{Output, Report};

/// Report data from project generation.
#[derive(Debug)]
pub struct NewReport {
    /// Project name.
    pub name: String,

    /// What the engine did (or would do, for a dry run).
    pub generation: GenerationReport,

    pub result: NewResult,
}

/// Result of project generation.
#[derive(Debug)]
pub enum NewResult {
    /// The tree was written to disk.
    Written,
    /// Dry-run preview with every file's content.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for NewReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            NewResult::Written => self.render_written(out),
            NewResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl NewReport {
    fn render_warnings(&self, out: &mut dyn Output) {
        for diag in self.generation.warnings() {
            out.warning(&format!("{}: {}", diag.source, diag.message));
        }
    }

    fn render_written(&self, out: &mut dyn Output) {
        self.render_warnings(out);

        let generation = &self.generation;
        out.title(&format!("Created {}", self.name));
        out.key_value("Path", &generation.output_dir.display().to_string());
        out.key_value("Files", &generation.file_count().to_string());
        out.newline();

        out.section("Generators");
        for name in &generation.applied {
            out.list_item(name);
        }
        if !generation.skipped.is_empty() {
            out.key_value("Skipped", &generation.skipped.join(", "));
        }
        out.newline();

        let notes: Vec<_> = generation.notes().collect();
        if !notes.is_empty() {
            out.section("Notes");
            for note in notes {
                out.list_item(&note.message);
            }
            out.newline();
        }

        out.section("Next steps");
        let mut steps = vec![
            format!("cd {}", generation.output_dir.display()),
            "cp .env.example .env".to_string(),
        ];
        if generation.files.contains_key("docker-compose.yml") {
            steps.push("docker compose up --build".to_string());
        } else {
            steps.push("pip install -r requirements.txt".to_string());
            steps.push("uvicorn app.main:app --reload".to_string());
        }
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
        self.render_warnings(out);
    }
}
