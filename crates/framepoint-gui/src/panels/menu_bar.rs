use crate::app::FramepointApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut FramepointApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut)))
                    .clicked()
                {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                if ui.button("Import Options...").clicked() {
                    ui.close();
                    import_options(app);
                }

                if ui.button("Export Options...").clicked() {
                    ui.close();
                    export_options(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Position").clicked() {
                    ui.close();
                    if let Some(session) = app.framing.session.as_mut() {
                        session.reset();
                    }
                }
                if ui.button("Reset Options to Defaults").clicked() {
                    ui.close();
                    app.config.options = Default::default();
                    if let Some(session) = app.framing.session.as_mut() {
                        session.set_options(app.config.options);
                    }
                    app.ui_state.add_log("Options reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_image(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_image(app: &FramepointApp) {
    let cmd_tx = app.cmd_tx.clone();
    let options = app.config.options;
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"],
            )
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path, options });
        }
    });
}

fn import_options(app: &FramepointApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ImportOptions { path });
        }
    });
}

fn export_options(app: &FramepointApp) {
    let cmd_tx = app.cmd_tx.clone();
    let options = app.config.options;
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("framepoint.toml")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportOptions { path, options });
        }
    });
}
