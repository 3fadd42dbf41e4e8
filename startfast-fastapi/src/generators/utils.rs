//! Helper modules shared by every archetype.

use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

const ARTIFACTS: &[Artifact] = &[
    ("app/utils/helpers.py", "utils/helpers.py.j2"),
    ("app/utils/logging.py", "utils/logging.py.j2"),
    ("app/utils/validation.py", "utils/validation.py.j2"),
];

pub struct UtilsGenerator;

impl Generator for UtilsGenerator {
    fn name(&self) -> &'static str {
        "utils"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, ARTIFACTS)
    }
}
