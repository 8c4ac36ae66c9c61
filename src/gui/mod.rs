pub mod app;
pub mod colors;
pub mod dialogs;

/// Entry point: launch the native GUI window
pub fn run(checker: crate::Checker) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("C Syntax Checker")
            .with_inner_size([820.0, 600.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "C Syntax Checker",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(colors::visuals());
            Ok(Box::new(app::CheckerApp::new(checker)))
        }),
    )
    .map_err(|e| crate::SyncheckError::Gui(e.to_string()))
}
