use eframe::egui::{self, RichText};
use std::path::{Path, PathBuf};

use crate::checker::{CheckMessage, CheckOutput, Checker, RunningCheck};
use crate::gui::{colors, dialogs};
use crate::logging;
use crate::transcript::{SpanKind, Transcript};

/// Dialog filters offered when picking a source file, most specific first.
const FILE_FILTERS: [(&str, &[&str]); 4] = [
    ("C files", &["c"]),
    ("C++ files", &["cpp"]),
    ("Text files", &["txt"]),
    ("All files", &["*"]),
];

/// Main application state
pub struct CheckerApp {
    /// The external checker to invoke
    checker: Checker,
    /// Everything shown in the output pane
    transcript: Transcript,
    /// In-flight check, at most one
    running: Option<RunningCheck>,
    /// Pending modal error message
    error_dialog: Option<String>,
    /// Last settled outcome, shown in the status bar
    status_message: String,
}

impl CheckerApp {
    pub fn new(checker: Checker) -> Self {
        Self {
            checker,
            transcript: Transcript::new(),
            running: None,
            error_dialog: None,
            status_message: String::new(),
        }
    }

    /// Open the native file picker.
    fn pick_source_file() -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new();
        for (label, extensions) in FILE_FILTERS {
            dialog = dialog.add_filter(label, extensions);
        }
        dialog.pick_file()
    }

    fn select_and_check(&mut self) {
        let picked = Self::pick_source_file();
        self.on_file_selected(picked);
    }

    /// A dismissed picker is a no-op; a chosen file starts a check.
    fn on_file_selected(&mut self, picked: Option<PathBuf>) {
        match picked {
            Some(path) => self.start_check(&path),
            None => logging::debug("GUI", "file selection cancelled"),
        }
    }

    /// Launch the checker. The pane only changes once the spawn succeeds, so
    /// a missing checker leaves earlier results readable behind the dialog.
    fn start_check(&mut self, source: &Path) {
        match self.checker.spawn(source) {
            Ok(run) => {
                self.transcript.clear();
                self.transcript.append_plain(format!(
                    "> Checking syntax for:\n{}\n\n",
                    source.display()
                ));
                self.status_message.clear();
                self.running = Some(run);
            }
            Err(e) => {
                logging::error("GUI", &format!("cannot start check: {e}"));
                self.error_dialog = Some(e.to_string());
            }
        }
    }

    /// Process background messages
    fn process_messages(&mut self) {
        let message = match &self.running {
            Some(run) => run.try_message(),
            None => None,
        };
        if let Some(message) = message {
            self.running = None;
            self.finish_check(message);
        }
    }

    fn finish_check(&mut self, message: CheckMessage) {
        match message {
            CheckMessage::Completed(output) => {
                self.present_output(&output);
                self.status_message = "Check finished".to_string();
            }
            CheckMessage::Cancelled => {
                self.transcript.append_plain("(check cancelled)\n");
                self.status_message = "Check cancelled".to_string();
            }
            CheckMessage::Failed(e) => {
                logging::error("GUI", &format!("check failed: {e}"));
                self.error_dialog = Some(e.to_string());
                self.status_message = "Check failed".to_string();
            }
        }
    }

    /// Append the captured streams, stderr tagged as diagnostics.
    fn present_output(&mut self, output: &CheckOutput) {
        if !output.stdout.is_empty() {
            self.transcript
                .append_plain(format!("✔ Output:\n{}\n", output.stdout));
        }
        if !output.stderr.is_empty() {
            self.transcript
                .append_tagged(format!("⚠ Errors:\n{}", output.stderr), SpanKind::Error);
        }
    }

    /// Render the title header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("C Syntax Checker GUI")
                    .size(26.0)
                    .strong()
                    .color(colors::TEXT),
            );
        });
        ui.add_space(10.0);
    }

    /// Render the action buttons
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let idle = self.running.is_none() && self.error_dialog.is_none();
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                RichText::new("Select File and Check Syntax")
                    .color(colors::BUTTON_FG)
                    .strong(),
            )
            .fill(colors::BUTTON_BG)
            .min_size(egui::vec2(240.0, 36.0));

            if ui.add_enabled(idle, button).clicked() {
                self.select_and_check();
            }

            if let Some(run) = &self.running {
                ui.add_space(4.0);
                if ui.button("Cancel").clicked() {
                    run.cancel();
                }
            }
        });
    }

    /// Render the read-only output pane
    fn render_transcript(&self, ui: &mut egui::Ui) {
        egui::Frame::default()
            .fill(colors::OUTPUT_BG)
            .stroke(egui::Stroke::new(1.0, colors::OUTPUT_BORDER))
            .inner_margin(6)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.spacing_mut().item_spacing.y = 0.0;
                        for span in self.transcript.spans() {
                            let mut text = RichText::new(&span.text)
                                .monospace()
                                .color(colors::span_color(span.kind));
                            if span.kind == SpanKind::Error {
                                text = text.strong();
                            }
                            ui.label(text);
                        }
                    });
            });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(run) = &self.running {
                    ui.spinner();
                    ui.label(format!("Checking {}...", run.source().display()));
                } else if self.status_message.is_empty() {
                    ui.label("Ready");
                } else {
                    ui.label(&self.status_message);
                }
            });
        });
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        if let Some(message) = &self.error_dialog {
            if !dialogs::show_error_dialog(ctx, message) {
                self.error_dialog = None;
            }
        }
    }
}

impl eframe::App for CheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        self.render_status_bar(ctx);
        self.render_error_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            self.render_controls(ui);
            ui.add_space(8.0);
            self.render_transcript(ui);
        });

        if self.running.is_some() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[cfg(unix)]
    fn write_stub(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("checker.sh");
        std::fs::write(&path, script).expect("write stub checker");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("make stub executable");
        path
    }

    /// Pump messages until the running check settles.
    fn settle(app: &mut CheckerApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.running.is_some() {
            assert!(Instant::now() < deadline, "check never settled");
            app.process_messages();
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn selection_cancelled_is_a_no_op() {
        let mut app = CheckerApp::new(Checker::new("unused"));
        app.on_file_selected(None);

        assert!(app.transcript.is_empty());
        assert!(app.running.is_none());
        assert!(app.error_dialog.is_none());
    }

    #[test]
    fn launch_failure_leaves_transcript_untouched() {
        let mut app = CheckerApp::new(Checker::new("/nonexistent/definitely-not-a-checker"));
        app.transcript.append_plain("earlier results\n");

        app.on_file_selected(Some(PathBuf::from("test.c")));

        assert!(app.running.is_none());
        assert_eq!(app.transcript.to_text(), "earlier results\n");
        let message = app.error_dialog.as_deref().expect("dialog must be pending");
        assert!(message.contains("not found. Did you compile it?"));
    }

    #[cfg(unix)]
    #[test]
    fn check_scenario_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = write_stub(dir.path(), "#!/bin/sh\nprintf 'OK'\n");

        let mut app = CheckerApp::new(Checker::new(&stub));
        app.on_file_selected(Some(PathBuf::from("test.c")));
        settle(&mut app);

        assert_eq!(
            app.transcript.to_text(),
            "> Checking syntax for:\ntest.c\n\n✔ Output:\nOK\n"
        );
        assert!(app
            .transcript
            .spans()
            .iter()
            .all(|span| span.kind == SpanKind::Plain));
        assert_eq!(app.status_message, "Check finished");
    }

    #[cfg(unix)]
    #[test]
    fn check_scenario_errors_tagged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = write_stub(
            dir.path(),
            "#!/bin/sh\nprintf 'line 3: unexpected token' >&2\nexit 1\n",
        );

        let mut app = CheckerApp::new(Checker::new(&stub));
        app.on_file_selected(Some(PathBuf::from("bad.c")));
        settle(&mut app);

        let spans = app.transcript.spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].kind, SpanKind::Plain);
        assert_eq!(spans[1].kind, SpanKind::Error);
        assert_eq!(spans[1].text, "⚠ Errors:\nline 3: unexpected token");
        assert!(app.error_dialog.is_none(), "a failing file is not an error");
    }

    #[cfg(unix)]
    #[test]
    fn empty_streams_leave_only_the_status_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = write_stub(dir.path(), "#!/bin/sh\nexit 0\n");

        let mut app = CheckerApp::new(Checker::new(&stub));
        app.on_file_selected(Some(PathBuf::from("quiet.c")));
        settle(&mut app);

        assert_eq!(app.transcript.to_text(), "> Checking syntax for:\nquiet.c\n\n");
        assert_eq!(app.status_message, "Check finished");
    }

    #[cfg(unix)]
    #[test]
    fn new_check_replaces_previous_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = write_stub(dir.path(), "#!/bin/sh\nprintf 'OK'\n");

        let mut app = CheckerApp::new(Checker::new(&stub));
        app.on_file_selected(Some(PathBuf::from("first.c")));
        settle(&mut app);
        app.on_file_selected(Some(PathBuf::from("second.c")));
        settle(&mut app);

        let text = app.transcript.to_text();
        assert!(!text.contains("first.c"));
        assert!(text.contains("second.c"));
    }

    #[cfg(unix)]
    #[test]
    fn cancelled_check_is_reported_in_the_pane() {
        let dir = tempfile::tempdir().expect("tempdir");
        // exec so the kill reaches the sleeping process itself
        let stub = write_stub(dir.path(), "#!/bin/sh\nexec sleep 30\n");

        let mut app = CheckerApp::new(Checker::new(&stub));
        app.on_file_selected(Some(PathBuf::from("slow.c")));
        if let Some(run) = &app.running {
            run.cancel();
        }
        settle(&mut app);

        assert!(app.transcript.to_text().ends_with("(check cancelled)\n"));
        assert_eq!(app.status_message, "Check cancelled");
    }
}
