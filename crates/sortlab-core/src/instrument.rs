//! Step counting and the per-invocation instrumentation bundle.

use crate::trace::{TraceEvent, TraceSink};

/// Monotonic counter of algorithm-defined significant operations.
///
/// The increment points are part of each engine's contract, not a universal
/// complexity measure: the three engines count different things and their
/// totals are only comparable to themselves. A counter is scoped to one sort
/// invocation and read once at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    value: u64,
}

impl StepCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter by one.
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Returns the current count.
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Trace and step side channels attached to one sort invocation.
///
/// The two channels are orthogonal and independently toggleable; neither
/// affects the sorted result. Disabled channels cost nothing beyond the
/// toggle check: event payloads are built by a closure that is only invoked
/// when a sink is attached, and a disabled counter never accumulates.
///
/// The counter is threaded by `&mut` through the recursion with exactly one
/// writer per invocation.
#[derive(Default)]
pub struct Instrumentation<'a> {
    sink: Option<&'a mut dyn TraceSink>,
    steps: Option<StepCounter>,
}

impl std::fmt::Debug for Instrumentation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrumentation")
            .field("tracing", &self.sink.is_some())
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl<'a> Instrumentation<'a> {
    /// Creates an instrumentation bundle with the given channels.
    pub fn new(sink: Option<&'a mut dyn TraceSink>, count_steps: bool) -> Self {
        Self {
            sink,
            steps: count_steps.then(StepCounter::new),
        }
    }

    /// Creates a bundle with both channels disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns true when a trace sink is attached.
    pub fn tracing(&self) -> bool {
        self.sink.is_some()
    }

    /// Increments the step counter, if counting is enabled.
    pub fn step(&mut self) {
        if let Some(counter) = &mut self.steps {
            counter.increment();
        }
    }

    /// Emits a trace event, building the payload only when a sink is attached.
    pub fn emit_with(&mut self, make: impl FnOnce() -> TraceEvent) {
        if let Some(sink) = &mut self.sink {
            sink.record(make());
        }
    }

    /// Returns the final step count, or `None` when counting was disabled.
    pub fn steps(&self) -> Option<u64> {
        self.steps.map(|counter| counter.value())
    }
}
