//! Trace events and the sink abstraction engines emit them through.
//!
//! Tracing is a pure side channel: events describe algorithm progress in the
//! exact order the algorithm reaches the corresponding step and never affect
//! the sorted result. The default sink discards everything; the text sink
//! renders the human-readable instructional output; the memory sink records
//! events for inspection in tests.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::Sequence;

/// Structured snapshot of algorithm progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// Merge sort split a sub-sequence into two halves.
    Divide {
        /// The sub-sequence before the split.
        original: Sequence,
        /// The `[0, mid)` half.
        left: Sequence,
        /// The `[mid, len)` half.
        right: Sequence,
    },
    /// Merge sort finished merging two halves back together.
    Merge {
        /// The merged sub-sequence.
        merged: Sequence,
    },
    /// Quick sort partitioned a sub-sequence around a pivot.
    PivotSelect {
        /// The pivot value (middle-indexed element of the sub-sequence).
        pivot: i64,
        /// Elements strictly less than the pivot.
        left: Sequence,
        /// Elements strictly greater than the pivot.
        right: Sequence,
    },
    /// Heap sort completed a sift-down at the given index.
    Heapify {
        /// Index the sift-down was invoked on.
        index: usize,
        /// Heap contents up to the active heap size, after the sift-down.
        heap: Sequence,
    },
}

/// Receiver for [`TraceEvent`] values emitted during one sort invocation.
pub trait TraceSink {
    /// Records a single event. Events arrive in emission order and are never
    /// replayed or reordered.
    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that appends events to an in-memory list, for tests and inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<TraceEvent>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumes the sink and returns the recorded events.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceSink for MemorySink {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Sink that renders events as instructional text lines.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
}

impl TextSink<io::Stdout> {
    /// Creates a text sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    /// Creates a text sink over an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    fn record(&mut self, event: TraceEvent) {
        // Write failures on a diagnostic channel are deliberately ignored.
        let _ = match event {
            TraceEvent::Divide {
                original,
                left,
                right,
            } => writeln!(
                self.writer,
                "Dividing: {original:?} into\n  Left: {left:?}\n  Right: {right:?}"
            ),
            TraceEvent::Merge { merged } => writeln!(self.writer, "Merging: {merged:?}"),
            TraceEvent::PivotSelect { pivot, left, right } => writeln!(
                self.writer,
                "Pivot: {pivot}\nLeft: {left:?} Right: {right:?}"
            ),
            TraceEvent::Heapify { index, heap } => writeln!(
                self.writer,
                "Heapify called on index {index}, heap: {heap:?}"
            ),
        };
    }
}
