use startfast_engine::{Result, pipeline::Plugin};

/// Prints one line per generator as the run progresses.
pub struct Progress;

impl Plugin for Progress {
    fn name(&self) -> &'static str {
        "progress"
    }

    fn on_generator(&self, name: &str, applied: bool) -> Result<()> {
        if applied {
            eprintln!("  + {}", name);
        } else {
            eprintln!("  - {} (skipped)", name);
        }
        Ok(())
    }
}
