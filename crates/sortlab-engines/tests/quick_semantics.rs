use sortlab_core::{Instrumentation, MemorySink, TraceEvent};
use sortlab_engines::{QuickSortEngine, SortEngine};

fn sort_counted(data: Vec<i64>) -> (Vec<i64>, u64) {
    let mut instr = Instrumentation::new(None, true);
    let sorted = QuickSortEngine.sort(data, &mut instr);
    let steps = instr.steps().unwrap();
    (sorted, steps)
}

#[test]
fn pivot_value_duplicates_are_dropped() {
    // Pivot is the middle-indexed element (index 2, value 3); the second 3
    // is excluded from both partitions, so only one survives.
    let (sorted, steps) = sort_counted(vec![5, 3, 3, 1]);
    assert_eq!(sorted, vec![1, 3, 5]);
    assert_eq!(steps, 2);
}

#[test]
fn duplicate_free_input_is_fully_preserved() {
    let (sorted, _) = sort_counted(vec![9, 1, 8, 2, 7, 3]);
    assert_eq!(sorted, vec![1, 2, 3, 7, 8, 9]);
}

#[test]
fn empty_and_single_inputs_are_returned_unchanged() {
    assert_eq!(sort_counted(vec![]), (vec![], 0));
    assert_eq!(sort_counted(vec![-5]), (vec![-5], 0));
}

#[test]
fn all_equal_input_collapses_to_one_element() {
    let (sorted, steps) = sort_counted(vec![7, 7, 7, 7, 7]);
    assert_eq!(sorted, vec![7]);
    // Every element equals the pivot, so no comparison is counted.
    assert_eq!(steps, 0);
}

#[test]
fn steps_count_only_non_pivot_elements() {
    // Pivot 8 (index 1): 2 and 5 are routed and counted, 8 is not.
    // Recursion on [2, 5]: pivot 5, one routed element.
    let (sorted, steps) = sort_counted(vec![2, 8, 5]);
    assert_eq!(sorted, vec![2, 5, 8]);
    assert_eq!(steps, 3);
}

#[test]
fn pivot_select_events_carry_both_partitions() {
    let mut sink = MemorySink::new();
    let mut instr = Instrumentation::new(Some(&mut sink), false);
    let sorted = QuickSortEngine.sort(vec![5, 3, 3, 1], &mut instr);
    assert_eq!(sorted, vec![1, 3, 5]);

    let events = sink.into_events();
    assert_eq!(
        events,
        vec![TraceEvent::PivotSelect {
            pivot: 3,
            left: vec![1],
            right: vec![5],
        }]
    );
}

#[test]
fn recursion_emits_one_event_per_partition_call() {
    let mut sink = MemorySink::new();
    let mut instr = Instrumentation::new(Some(&mut sink), false);
    QuickSortEngine.sort(vec![4, 1, 3, 2], &mut instr);

    // Top call partitions around 3 (index 2); only the left remainder
    // [1, 2] is long enough to partition again, around 2.
    let pivots: Vec<i64> = sink
        .into_events()
        .into_iter()
        .map(|event| match event {
            TraceEvent::PivotSelect { pivot, .. } => pivot,
            other => panic!("unexpected event: {other:?}"),
        })
        .collect();
    assert_eq!(pivots, vec![3, 2]);
}
