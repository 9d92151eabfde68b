use sortlab_core::{Instrumentation, Sequence, TraceEvent};

use crate::SortEngine;

/// In-place binary max-heap sort.
///
/// Phase 1 builds the heap by sifting down every internal node from
/// `n / 2 - 1` to 0; phase 2 repeatedly swaps the root with the last active
/// element and sifts down over the shrinking heap. O(n log n) time, O(1)
/// auxiliary space, length always preserved.
///
/// Step checkpoints: one each time the sift-down candidate moves to the left
/// child, one each time it moves to the right child, and one per
/// swap-and-recurse. The root-with-last swaps of the extraction loop are not
/// counted. Trace: one `Heapify` event at the end of every sift-down
/// invocation carrying the index and the active heap contents, so a
/// recursive continuation's event precedes its parent's.
pub struct HeapSortEngine;

impl SortEngine for HeapSortEngine {
    fn name(&self) -> &'static str {
        "heap"
    }

    fn sort(&self, mut data: Sequence, instr: &mut Instrumentation<'_>) -> Sequence {
        let n = data.len();
        for i in (0..n / 2).rev() {
            sift_down(&mut data, n, i, instr);
        }
        for i in (1..n).rev() {
            data.swap(0, i);
            sift_down(&mut data, i, 0, instr);
        }
        data
    }

    fn summary_note(&self) -> &'static str {
        "Heap Sort is not stable but in-place. Space Complexity: O(1)"
    }
}

fn sift_down(data: &mut [i64], size: usize, index: usize, instr: &mut Instrumentation<'_>) {
    let mut largest = index;
    let left = 2 * index + 1;
    let right = 2 * index + 2;

    // The left child is checked against the node itself, the right child
    // against the updated candidate.
    if left < size && data[index] < data[left] {
        largest = left;
        instr.step();
    }
    if right < size && data[largest] < data[right] {
        largest = right;
        instr.step();
    }

    if largest != index {
        data.swap(index, largest);
        sift_down(data, size, largest, instr);
        instr.step();
    }

    instr.emit_with(|| TraceEvent::Heapify {
        index,
        heap: data[..size].to_vec(),
    });
}
