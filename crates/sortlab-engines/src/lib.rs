//! Instrumented sorting engines: merge, quick and heap sort over integer
//! sequences, plus the dispatch and timing harness that selects an engine by
//! tag and measures wall-clock time.
//!
//! Every engine consumes the same `(Sequence, Instrumentation)` pair and the
//! two side channels (trace events, step counts) never influence the sorted
//! result. The counting checkpoints are engine-specific contracts documented
//! on each engine.

mod heap;
mod merge;
mod quick;
mod runner;

use serde::{Deserialize, Serialize};
use sortlab_core::{Instrumentation, Sequence};

pub use heap::HeapSortEngine;
pub use merge::MergeSortEngine;
pub use quick::QuickSortEngine;
pub use runner::{run_algorithm, RunOptions, RunOutcome};

/// The three available sorting algorithms.
///
/// Selection is exhaustive by construction: there is no name-based dispatch
/// and no fallthrough for unrecognized algorithms anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Recursive top-down merge sort.
    Merge,
    /// Recursive quick sort partitioning by value around a middle pivot.
    Quick,
    /// In-place binary max-heap sort.
    Heap,
}

impl Algorithm {
    /// All algorithms in the fixed reporting order: merge, quick, heap.
    pub const ALL: [Algorithm; 3] = [Algorithm::Merge, Algorithm::Quick, Algorithm::Heap];

    /// Stable lowercase tag for the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Returns the engine implementing this algorithm.
    pub fn engine(&self) -> &'static dyn SortEngine {
        match self {
            Algorithm::Merge => &MergeSortEngine,
            Algorithm::Quick => &QuickSortEngine,
            Algorithm::Heap => &HeapSortEngine,
        }
    }
}

/// Contract shared by the three sorting engines.
pub trait SortEngine: Send + Sync {
    /// Stable lowercase name of the engine.
    fn name(&self) -> &'static str;

    /// Sorts the sequence ascending, emitting trace events and step counts
    /// through `instr` when those channels are enabled.
    ///
    /// The returned sequence has the same length as the input for merge and
    /// heap sort; quick sort may return fewer elements (see
    /// [`QuickSortEngine`]).
    fn sort(&self, data: Sequence, instr: &mut Instrumentation<'_>) -> Sequence;

    /// One-line instructional summary printed by the CLI in instruct mode.
    ///
    /// The wording is the historical classroom text, kept verbatim; for the
    /// actual equal-element guarantees see each engine's documentation.
    fn summary_note(&self) -> &'static str;
}
