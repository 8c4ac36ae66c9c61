//! Output transcript state
//!
//! The presenter owns one `Transcript` and mutates it only through this
//! interface; the widget layer just reads spans each frame. The pane is
//! therefore never user-editable, and the check flow stays testable without
//! a live window.

/// Visual tag carried by a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanKind {
    /// Regular output text.
    #[default]
    Plain,
    /// Checker-reported errors (rendered red and strong).
    Error,
}

/// One appended block of text together with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

/// Contents of the read-only output pane.
///
/// A tag covers exactly the span it was appended with; appending never
/// restyles earlier spans.
#[derive(Debug, Default)]
pub struct Transcript {
    spans: Vec<Span>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Append an untagged block.
    pub fn append_plain(&mut self, text: impl Into<String>) {
        self.append_tagged(text, SpanKind::Plain);
    }

    /// Append a block carrying `kind`.
    pub fn append_tagged(&mut self, text: impl Into<String>, kind: SpanKind) {
        self.spans.push(Span {
            kind,
            text: text.into(),
        });
    }

    /// Spans in insertion order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Flattened text, for logging and assertions.
    pub fn to_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_text(), "");
    }

    #[test]
    fn appends_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append_plain("first\n");
        transcript.append_plain("second");
        assert_eq!(transcript.to_text(), "first\nsecond");
        assert_eq!(transcript.spans().len(), 2);
    }

    #[test]
    fn clear_drops_everything() {
        let mut transcript = Transcript::new();
        transcript.append_plain("output");
        transcript.append_tagged("errors", SpanKind::Error);
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_text(), "");
    }

    #[test]
    fn tags_cover_only_their_own_span() {
        let mut transcript = Transcript::new();
        transcript.append_plain("status\n");
        transcript.append_tagged("bad line\n", SpanKind::Error);
        transcript.append_plain("footer");

        let kinds: Vec<SpanKind> = transcript.spans().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SpanKind::Plain, SpanKind::Error, SpanKind::Plain]);
        assert_eq!(transcript.spans()[1].text, "bad line\n");
    }
}
