use eframe::egui;

// ============================================================================
// Error dialog
// ============================================================================

/// Modal error dialog with a single OK button.
///
/// Returns true when the dialog should remain open.
pub fn show_error_dialog(ctx: &egui::Context, message: &str) -> bool {
    let mut open = true;

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    open = false;
                }
            });
        });

    open
}
