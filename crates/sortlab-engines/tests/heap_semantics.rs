use sortlab_core::{Instrumentation, MemorySink, TraceEvent};
use sortlab_engines::{HeapSortEngine, SortEngine};

fn sort_counted(data: Vec<i64>) -> (Vec<i64>, u64) {
    let mut instr = Instrumentation::new(None, true);
    let sorted = HeapSortEngine.sort(data, &mut instr);
    let steps = instr.steps().unwrap();
    (sorted, steps)
}

#[test]
fn sorts_with_duplicates_preserving_length() {
    let (sorted, steps) = sort_counted(vec![5, 3, 3, 1]);
    assert_eq!(sorted, vec![1, 3, 3, 5]);
    // Build phase finds [5, 3, 3, 1] already heap-ordered (0 steps); the
    // first extraction promotes the left child and recurses once (2 steps);
    // the remaining extractions change nothing.
    assert_eq!(steps, 2);
}

#[test]
fn empty_and_single_inputs_short_circuit() {
    assert_eq!(sort_counted(vec![]), (vec![], 0));
    assert_eq!(sort_counted(vec![3]), (vec![3], 0));
}

#[test]
fn extraction_swaps_are_not_counted() {
    // [2, 1] is already a max-heap; extraction swaps the root out and the
    // final sift-down sees a single-element heap. The swap itself is an
    // uncounted checkpoint, so the total stays zero.
    let (sorted, steps) = sort_counted(vec![2, 1]);
    assert_eq!(sorted, vec![1, 2]);
    assert_eq!(steps, 0);
}

#[test]
fn heapify_events_cover_build_and_extract_phases() {
    let mut sink = MemorySink::new();
    let mut instr = Instrumentation::new(Some(&mut sink), false);
    let sorted = HeapSortEngine.sort(vec![5, 3, 3, 1], &mut instr);
    assert_eq!(sorted, vec![1, 3, 3, 5]);

    let events = sink.into_events();
    assert_eq!(
        events,
        vec![
            // Build: indices n/2 - 1 down to 0 over the full heap.
            TraceEvent::Heapify {
                index: 1,
                heap: vec![5, 3, 3, 1],
            },
            TraceEvent::Heapify {
                index: 0,
                heap: vec![5, 3, 3, 1],
            },
            // Extract i = 3: root 5 moves out, sift-down recurses into the
            // promoted left child; the inner event precedes its caller's.
            TraceEvent::Heapify {
                index: 1,
                heap: vec![3, 1, 3],
            },
            TraceEvent::Heapify {
                index: 0,
                heap: vec![3, 1, 3],
            },
            // Extract i = 2 and i = 1: heap property already holds.
            TraceEvent::Heapify {
                index: 0,
                heap: vec![3, 1],
            },
            TraceEvent::Heapify {
                index: 0,
                heap: vec![1],
            },
        ]
    );
}

#[test]
fn tracing_does_not_change_result_or_steps() {
    let data = vec![9, -2, 4, 4, 0, 11];
    let (plain, steps_plain) = sort_counted(data.clone());

    let mut sink = MemorySink::new();
    let mut instr = Instrumentation::new(Some(&mut sink), true);
    let traced = HeapSortEngine.sort(data, &mut instr);
    assert_eq!(traced, plain);
    assert_eq!(instr.steps(), Some(steps_plain));
}
