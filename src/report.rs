use std::fmt;

use crate::harness::Summary;
use crate::runner::Phase;

/// Render the summary as the benchmark report. Integrity diagnostics, if
/// any, come first so they are not missed.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for err in self.violations.iter() {
            writeln!(f, "{}", err)?;
        }
        writeln!(
            f,
            "Using input size {} and averaged over {} runs.",
            self.size, self.runs
        )?;
        for phase in Phase::ALL.iter() {
            writeln!(
                f,
                "{:3.3}:\t{}\t{}",
                self.means[*phase],
                phase.op_count(self.size),
                phase.label()
            )?;
        }
        Ok(())
    }
}
