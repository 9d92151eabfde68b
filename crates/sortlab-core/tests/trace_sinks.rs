use sortlab_core::{MemorySink, NoopSink, TextSink, TraceEvent, TraceSink};

fn sample_events() -> Vec<TraceEvent> {
    vec![
        TraceEvent::Divide {
            original: vec![5, 3, 3, 1],
            left: vec![5, 3],
            right: vec![3, 1],
        },
        TraceEvent::Merge {
            merged: vec![1, 3, 3, 5],
        },
        TraceEvent::PivotSelect {
            pivot: 3,
            left: vec![1],
            right: vec![5],
        },
        TraceEvent::Heapify {
            index: 0,
            heap: vec![3, 1, 3],
        },
    ]
}

#[test]
fn memory_sink_preserves_emission_order() {
    let mut sink = MemorySink::new();
    for event in sample_events() {
        sink.record(event);
    }
    assert_eq!(sink.events(), sample_events().as_slice());
}

#[test]
fn noop_sink_accepts_everything() {
    let mut sink = NoopSink;
    for event in sample_events() {
        sink.record(event);
    }
}

#[test]
fn text_sink_renders_instructional_lines() {
    let mut sink = TextSink::new(Vec::new());
    for event in sample_events() {
        sink.record(event);
    }
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let expected = "Dividing: [5, 3, 3, 1] into\n  Left: [5, 3]\n  Right: [3, 1]\n\
                    Merging: [1, 3, 3, 5]\n\
                    Pivot: 3\nLeft: [1] Right: [5]\n\
                    Heapify called on index 0, heap: [3, 1, 3]\n";
    assert_eq!(text, expected);
}

#[test]
fn events_roundtrip_through_json() {
    for event in sample_events() {
        let json = serde_json::to_string(&event).unwrap();
        let restored: TraceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}

#[test]
fn event_json_is_kind_tagged() {
    let json = serde_json::to_value(TraceEvent::PivotSelect {
        pivot: 3,
        left: vec![1],
        right: vec![5],
    })
    .unwrap();
    assert_eq!(json["kind"], "pivot-select");
}
