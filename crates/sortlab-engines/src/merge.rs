use sortlab_core::{Instrumentation, Sequence, TraceEvent};

use crate::SortEngine;

/// Recursive top-down merge sort.
///
/// Halves the sequence at `mid = len / 2`, recurses on each half, then merges
/// by repeatedly comparing the current heads and appending the smaller. On
/// equal heads the right-side element is appended first, so equal-valued
/// elements originating from different halves do NOT keep their input order:
/// despite the classroom summary line, this merge is not stable across
/// halves. Length is always preserved and auxiliary space is O(n).
///
/// Step checkpoints: one per division step, one per head-to-head comparison
/// during a merge, and one per element copied while draining the surviving
/// half. Trace: a `Divide` event before each recursive split and a `Merge`
/// event after each merge completes.
pub struct MergeSortEngine;

impl SortEngine for MergeSortEngine {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort(&self, mut data: Sequence, instr: &mut Instrumentation<'_>) -> Sequence {
        sort_slice(&mut data, instr);
        data
    }

    fn summary_note(&self) -> &'static str {
        "Merge Sort is stable and not in-place. Space Complexity: O(n)"
    }
}

fn sort_slice(data: &mut [i64], instr: &mut Instrumentation<'_>) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    let mut left: Sequence = data[..mid].to_vec();
    let mut right: Sequence = data[mid..].to_vec();

    instr.step();
    instr.emit_with(|| TraceEvent::Divide {
        original: data.to_vec(),
        left: left.clone(),
        right: right.clone(),
    });

    sort_slice(&mut left, instr);
    sort_slice(&mut right, instr);

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        instr.step();
        if left[i] < right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            // Ties take the right-side element; see the engine docs.
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i];
        i += 1;
        k += 1;
        instr.step();
    }
    while j < right.len() {
        data[k] = right[j];
        j += 1;
        k += 1;
        instr.step();
    }

    instr.emit_with(|| TraceEvent::Merge {
        merged: data.to_vec(),
    });
}
