//! Built-in pipeline phases.

mod finalize;
mod generate;
mod scaffold;

pub use finalize::{FINALIZE_OWNER, FinalizePhase};
pub use generate::GeneratePhase;
pub use scaffold::ScaffoldPhase;
