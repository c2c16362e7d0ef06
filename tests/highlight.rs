use ner_probe::highlight::{Segment, reconcile};
use ner_probe::types::EntitySpan;

fn span(start: i64, end: i64, label: &str) -> EntitySpan {
    EntitySpan {
        start: Some(start),
        end: Some(end),
        label: label.into(),
        text: None,
    }
}

fn contents(segments: &[Segment]) -> Vec<&str> {
    segments.iter().map(|s| s.content()).collect()
}

#[test]
fn no_entities_yields_one_whole_text_segment() {
    let segments = reconcile("Harry went to Hogwarts", &[]);
    assert_eq!(
        segments,
        vec![Segment::Text {
            content: "Harry went to Hogwarts".into()
        }]
    );

    // Even for empty text
    assert_eq!(
        reconcile("", &[]),
        vec![Segment::Text { content: "".into() }]
    );
}

#[test]
fn entities_interleave_with_gaps_and_trailing_text() {
    let text = "Harry went to Hogwarts";
    let segments = reconcile(text, &[span(0, 5, "PERSON"), span(14, 22, "GPE")]);
    assert_eq!(
        contents(&segments),
        vec!["Harry", " went to ", "Hogwarts"]
    );
    assert_eq!(
        segments[0],
        Segment::Entity {
            content: "Harry".into(),
            label: "PERSON".into(),
            start: 0,
            end: 5,
        }
    );
    assert!(matches!(segments[1], Segment::Text { .. }));
    assert_eq!(
        segments[2],
        Segment::Entity {
            content: "Hogwarts".into(),
            label: "GPE".into(),
            start: 14,
            end: 22,
        }
    );
}

#[test]
fn unsorted_spans_are_ordered_by_start() {
    let text = "Harry went to Hogwarts";
    let segments = reconcile(text, &[span(14, 22, "GPE"), span(0, 5, "PERSON")]);
    assert_eq!(contents(&segments), vec!["Harry", " went to ", "Hogwarts"]);
}

#[test]
fn out_of_bounds_and_missing_endpoints_are_clamped() {
    let text = "abc";
    // negative start, end past the text, inverted span, missing both
    let entities = vec![
        span(-4, 2, "A"),
        span(1, 99, "B"),
        EntitySpan {
            start: Some(2),
            end: Some(1),
            label: "C".into(),
            text: None,
        },
        EntitySpan {
            start: None,
            end: None,
            label: "D".into(),
            text: None,
        },
    ];
    let len = text.chars().count();
    for segment in reconcile(text, &entities) {
        if let Segment::Entity { start, end, content, .. } = segment {
            assert!(start <= end);
            assert!(end <= len);
            assert_eq!(content.chars().count(), end - start);
        }
    }
}

#[test]
fn non_overlapping_spans_partition_the_text() {
    let text = "one two three four";
    let segments = reconcile(text, &[span(4, 7, "A"), span(8, 13, "B")]);
    let glued: String = segments.iter().map(Segment::content).collect();
    assert_eq!(glued, text);

    // Positions are strictly increasing across entity segments
    let starts: Vec<usize> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Entity { start, .. } => Some(*start),
            Segment::Text { .. } => None,
        })
        .collect();
    assert_eq!(starts, vec![4, 8]);
}

#[test]
fn overlapping_spans_rerender_shared_characters() {
    let segments = reconcile("abcdef", &[span(0, 4, "A"), span(2, 6, "B")]);
    assert_eq!(contents(&segments), vec!["abcd", "cdef"]);
}

#[test]
fn ties_keep_input_order() {
    let segments = reconcile("xy", &[span(0, 1, "FIRST"), span(0, 2, "SECOND")]);
    let labels: Vec<&str> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Entity { label, .. } => Some(label.as_str()),
            Segment::Text { .. } => None,
        })
        .collect();
    assert_eq!(labels, vec!["FIRST", "SECOND"]);
}

#[test]
fn multibyte_text_clamps_on_char_boundaries() {
    let text = "héllo wörld";
    let segments = reconcile(text, &[span(6, 11, "X")]);
    let glued: String = segments.iter().map(Segment::content).collect();
    assert_eq!(glued, text);
    assert!(segments.iter().any(|s| s.content() == "wörld"));
}
