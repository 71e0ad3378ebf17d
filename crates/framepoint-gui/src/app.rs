use std::sync::mpsc;

use framepoint_core::session::FramingSession;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{ConfigState, SessionState, UIState, ViewportState};
use crate::worker;

pub struct FramepointApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub framing: SessionState,
    pub config: ConfigState,
    pub show_about: bool,
}

impl FramepointApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            framing: SessionState::default(),
            config: ConfigState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    metrics,
                    pixels,
                    stored,
                } => {
                    let texture =
                        ctx.load_texture("photo", pixels, egui::TextureOptions::LINEAR);
                    self.viewport.texture = Some(texture);
                    self.viewport.metrics = Some(metrics);
                    self.viewport.image_path = Some(path.clone());

                    self.framing.session =
                        Some(FramingSession::new(metrics, stored, self.config.options));
                    self.framing.stored = stored;
                    self.framing.is_saving = false;

                    self.ui_state.load_error = None;
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}{})",
                        path.display(),
                        metrics.width(),
                        metrics.height(),
                        if stored.is_some() {
                            ", stored framing"
                        } else {
                            ""
                        }
                    ));
                }
                WorkerResult::LoadFailed { path, message } => {
                    self.viewport.clear();
                    self.framing.close();
                    self.ui_state
                        .add_log(format!("ERROR: {}: {message}", path.display()));
                    self.ui_state.load_error = Some((path, message));
                }
                WorkerResult::PositionSaved { position, sidecar } => {
                    self.framing.is_saving = false;
                    self.framing.stored = Some(position);
                    self.ui_state
                        .add_log(format!("Saved: {}", sidecar.display()));
                }
                WorkerResult::OptionsImported { path, options } => {
                    self.config.options = options;
                    if let Some(session) = self.framing.session.as_mut() {
                        session.set_options(options);
                    }
                    self.ui_state
                        .add_log(format!("Options imported from {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.framing.is_saving = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for FramepointApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Framepoint")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Framepoint");
                        ui.label("Photo framing for avatars and thumbnails");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
