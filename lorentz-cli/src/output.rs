//! Legacy text rendering of the sample trace.

use lorentz_core::constants::{POSITION_UNIT, TIME_UNIT};
use lorentz_core::Sample;
use std::io::{self, Write};

/// One sample per line, two decimals, in the layout earlier tooling parses.
pub fn format_sample(sample: &Sample) -> String {
    format!(
        "TIME[{}]: {:.2},   POS[{}]: ({:.2}, {:.2}, {:.2}) ",
        TIME_UNIT,
        sample.time,
        POSITION_UNIT,
        sample.position.x,
        sample.position.y,
        sample.position.z
    )
}

pub fn write_trace<W: Write>(out: &mut W, samples: &[Sample]) -> io::Result<()> {
    for sample in samples {
        writeln!(out, "{}", format_sample(sample))?;
    }
    Ok(())
}
