use sortlab_core::{Instrumentation, MemorySink, StepCounter, TraceEvent};

#[test]
fn disabled_bundle_reports_nothing() {
    let mut instr = Instrumentation::disabled();
    instr.step();
    instr.step();
    instr.emit_with(|| unreachable!("no sink is attached"));
    assert_eq!(instr.steps(), None);
    assert!(!instr.tracing());
}

#[test]
fn counting_accumulates_independently_of_tracing() {
    let mut instr = Instrumentation::new(None, true);
    for _ in 0..5 {
        instr.step();
    }
    instr.emit_with(|| unreachable!("no sink is attached"));
    assert_eq!(instr.steps(), Some(5));
}

#[test]
fn tracing_works_without_counting() {
    let mut sink = MemorySink::new();
    let mut instr = Instrumentation::new(Some(&mut sink), false);
    instr.step();
    instr.emit_with(|| TraceEvent::Merge { merged: vec![1, 2] });
    assert_eq!(instr.steps(), None);
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn counter_is_monotonic_from_zero() {
    let mut counter = StepCounter::new();
    assert_eq!(counter.value(), 0);
    counter.increment();
    counter.increment();
    assert_eq!(counter.value(), 2);
}
