// Span reconciler: turns a flat, untrusted span annotation into an
// ordered run of renderable segments.
use crate::types::EntitySpan;
use ratatui::style::Color;

/// A contiguous piece of rendered output: plain text or one entity.
/// Indices are char positions into the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text {
        content: String,
    },
    Entity {
        content: String,
        label: String,
        start: usize,
        end: usize,
    },
}

impl Segment {
    /// The rendered characters of this segment.
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } | Segment::Entity { content, .. } => content,
        }
    }
}

/// Reconcile `(text, entities)` into an ordered segment sequence.
///
/// Spans are clamped to the text before slicing, so out-of-bounds or
/// missing endpoints never panic. The sort is stable on the reported
/// start (missing treated as 0); ties keep input order. Overlapping
/// spans are neither merged nor rejected: the overlapped characters
/// re-render inside the later span's segment, and the cursor moves to
/// that span's clamped end.
pub fn reconcile(text: &str, entities: &[EntitySpan]) -> Vec<Segment> {
    // Fast path: nothing to highlight, one segment covers everything.
    if entities.is_empty() {
        return vec![Segment::Text {
            content: text.to_owned(),
        }];
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let slice = |a: usize, b: usize| chars[a..b].iter().collect::<String>();

    let mut ordered: Vec<&EntitySpan> = entities.iter().collect();
    ordered.sort_by_key(|e| e.start.unwrap_or(0));

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for ent in ordered {
        let start = clamp_start(ent.start, len);
        let end = clamp_end(ent.end, start, len);
        if start > cursor {
            segments.push(Segment::Text {
                content: slice(cursor, start),
            });
        }
        segments.push(Segment::Entity {
            content: slice(start, end),
            label: ent.label.clone(),
            start,
            end,
        });
        cursor = end;
    }
    if cursor < len {
        segments.push(Segment::Text {
            content: slice(cursor, len),
        });
    }
    segments
}

/// Missing or negative starts become 0; anything past the end of the
/// text is pulled back to it.
fn clamp_start(start: Option<i64>, len: usize) -> usize {
    match start {
        Some(s) if s > 0 => (s as usize).min(len),
        _ => 0,
    }
}

/// Ends collapse to the clamped start when missing or smaller than it.
fn clamp_end(end: Option<i64>, start: usize, len: usize) -> usize {
    match end {
        Some(e) if e >= 0 && (e as usize) > start => (e as usize).min(len),
        _ => start,
    }
}

/// Static label-to-color table for entity rendering. Unknown labels
/// fall back to gray so any label renders without error.
pub fn label_color(label: &str) -> Color {
    match label {
        "PERSON" | "PER" => Color::Yellow,
        "ORG" => Color::Cyan,
        "GPE" | "LOC" => Color::Green,
        "DATE" | "TIME" => Color::Magenta,
        "MONEY" | "PERCENT" | "QUANTITY" | "CARDINAL" | "ORDINAL" => Color::Blue,
        "NORP" | "FAC" | "PRODUCT" | "EVENT" | "WORK_OF_ART" | "LAW" | "LANGUAGE" => {
            Color::LightRed
        }
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: i64, end: i64, label: &str) -> EntitySpan {
        EntitySpan {
            start: Some(start),
            end: Some(end),
            label: label.into(),
            text: None,
        }
    }

    #[test]
    fn overlap_rerenders_consumed_characters() {
        let text = "abcdef";
        let segments = reconcile(text, &[span(0, 4, "A"), span(2, 6, "B")]);
        assert_eq!(
            segments,
            vec![
                Segment::Entity {
                    content: "abcd".into(),
                    label: "A".into(),
                    start: 0,
                    end: 4,
                },
                Segment::Entity {
                    content: "cdef".into(),
                    label: "B".into(),
                    start: 2,
                    end: 6,
                },
            ]
        );
    }

    #[test]
    fn unknown_label_still_gets_a_color() {
        assert_eq!(label_color("WIZARDRY"), Color::Gray);
    }
}
