//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod new;
mod output;
mod plan;

pub use new::{NewReport, NewResult, PreviewFile};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use plan::PlanReport;
