use eframe::egui::{self, Color32};

use crate::transcript::SpanKind;

/// Window and panel background.
pub const WINDOW_BG: Color32 = Color32::from_rgb(0xf0, 0xf4, 0xf8);

/// Default label text.
pub const TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Action button fill.
pub const BUTTON_BG: Color32 = Color32::from_rgb(0x4a, 0x90, 0xe2);

/// Action button fill while pressed.
pub const BUTTON_BG_ACTIVE: Color32 = Color32::from_rgb(0x35, 0x7a, 0xbd);

/// Action button label.
pub const BUTTON_FG: Color32 = Color32::WHITE;

/// Output pane background.
pub const OUTPUT_BG: Color32 = Color32::WHITE;

/// Output pane border.
pub const OUTPUT_BORDER: Color32 = Color32::from_rgb(0xc0, 0xc8, 0xd0);

/// Ordinary output text.
pub const OUTPUT_FG: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Diagnostic (stderr) text.
pub const ERROR: Color32 = Color32::from_rgb(0xd9, 0x53, 0x4f);

/// Light visuals tinted to the application palette.
pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = WINDOW_BG;
    visuals.window_fill = WINDOW_BG;
    visuals.widgets.active.weak_bg_fill = BUTTON_BG_ACTIVE;
    visuals
}

/// Text colour for a transcript span.
pub fn span_color(kind: SpanKind) -> Color32 {
    match kind {
        SpanKind::Plain => OUTPUT_FG,
        SpanKind::Error => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_spans_get_their_own_color() {
        assert_ne!(span_color(SpanKind::Plain), span_color(SpanKind::Error));
        assert_eq!(span_color(SpanKind::Error), ERROR);
    }
}
