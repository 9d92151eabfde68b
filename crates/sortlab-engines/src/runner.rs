use std::time::Instant;

use serde::{Deserialize, Serialize};
use sortlab_core::{Instrumentation, Sequence, TraceSink};

use crate::Algorithm;

/// Per-invocation switches for the instrumentation side channels.
#[derive(Default)]
pub struct RunOptions<'a> {
    /// Trace sink to attach, or `None` to disable tracing.
    pub trace: Option<&'a mut dyn TraceSink>,
    /// Whether to count algorithm-defined steps.
    pub count_steps: bool,
}

/// Result of one timed sort invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,
    /// The sorted sequence. Same length as the input except for quick sort
    /// on duplicate-bearing input.
    pub sorted: Sequence,
    /// Wall-clock seconds spent inside the engine.
    pub elapsed_seconds: f64,
    /// Final step count, when counting was enabled.
    pub steps: Option<u64>,
}

/// Runs one algorithm over a copy of `data`, timing the engine invocation.
///
/// The caller keeps ownership of `data`; the engine works on its own copy.
/// Timing wraps only the engine call, so the reported seconds include trace
/// formatting when a sink is attached.
pub fn run_algorithm(algorithm: Algorithm, data: &[i64], options: RunOptions<'_>) -> RunOutcome {
    let engine = algorithm.engine();
    let mut instr = Instrumentation::new(options.trace, options.count_steps);

    let started = Instant::now();
    let sorted = engine.sort(data.to_vec(), &mut instr);
    let elapsed_seconds = started.elapsed().as_secs_f64();

    RunOutcome {
        algorithm,
        sorted,
        elapsed_seconds,
        steps: instr.steps(),
    }
}
