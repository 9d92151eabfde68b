use sortlab_core::{Instrumentation, Sequence, TraceEvent};

use crate::SortEngine;

/// Recursive quick sort partitioning by value around a middle pivot.
///
/// The pivot is the element at index `len / 2` of the current sub-sequence.
/// Remaining elements are routed into Left (strictly less) and Right
/// (strictly greater); elements equal to the pivot value other than the one
/// retained pivot are dropped, so for every value chosen as a pivot at some
/// recursion level only a single occurrence survives. Sorting `[5, 3, 3, 1]`
/// therefore yields `[1, 3, 5]`. The output length is at most the input
/// length, with equality guaranteed only for duplicate-free input. This is
/// the engine's contract, pinned by tests; callers needing multiplicity
/// preserved should use merge or heap sort.
///
/// Step checkpoints: one per element compared against the pivot that is not
/// itself equal to the pivot (elements dropped for equaling the pivot are
/// not counted). Trace: one `PivotSelect` event per partition call.
///
/// Recursion depth is unbounded: partitioning by value degrades to O(n)
/// depth on adversarial or duplicate-heavy input. Known limitation, kept
/// because an iterative or rank-based rewrite would change the step-count
/// and duplicate contracts above.
pub struct QuickSortEngine;

impl SortEngine for QuickSortEngine {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort(&self, data: Sequence, instr: &mut Instrumentation<'_>) -> Sequence {
        sort_values(data, instr)
    }

    fn summary_note(&self) -> &'static str {
        "Quick Sort is not stable but in-place. Space Complexity: O(log n)"
    }
}

fn sort_values(data: Sequence, instr: &mut Instrumentation<'_>) -> Sequence {
    if data.len() <= 1 {
        return data;
    }

    let pivot = data[data.len() / 2];
    let mut left = Sequence::new();
    let mut right = Sequence::new();
    for &value in &data {
        if value != pivot {
            instr.step();
        }
        if value < pivot {
            left.push(value);
        } else if value > pivot {
            right.push(value);
        }
        // value == pivot: dropped; one pivot occurrence is re-inserted below.
    }

    instr.emit_with(|| TraceEvent::PivotSelect {
        pivot,
        left: left.clone(),
        right: right.clone(),
    });

    let mut sorted = sort_values(left, instr);
    sorted.push(pivot);
    sorted.extend(sort_values(right, instr));
    sorted
}
