#![deny(missing_docs)]

//! Shared primitives for the sortlab sorting laboratory: the sequence type,
//! the trace/step instrumentation side channels, structured errors,
//! deterministic randomness, and dataset file handling.

pub mod dataset;
pub mod errors;
pub mod instrument;
pub mod rng;
pub mod trace;

pub use errors::{ErrorInfo, SortError};
pub use instrument::{Instrumentation, StepCounter};
pub use rng::{derive_substream_seed, RngHandle};
pub use trace::{MemorySink, NoopSink, TextSink, TraceEvent, TraceSink};

/// Ordered, mutable, finite sequence of signed integers operated on by the
/// engines. Duplicates are legal input; ownership passes to an engine for
/// the duration of one sort invocation.
pub type Sequence = Vec<i64>;
