use framepoint_core::position::FramePosition;

use crate::app::FramepointApp;
use crate::messages::WorkerCommand;
use crate::panels::{previews, section_header};

pub fn show(ctx: &egui::Context, app: &mut FramepointApp) {
    handle_shortcuts(ctx, app);

    egui::SidePanel::right("controls")
        .min_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);

            let dirty = app.framing.is_dirty();
            section_header(ui, "Framing", dirty.then_some("modified"));
            show_position_readout(ui, app);
            ui.add_space(4.0);
            show_zoom_controls(ui, app);

            ui.add_space(8.0);
            ui.separator();
            show_confirm_cancel(ui, app);

            ui.add_space(8.0);
            ui.separator();
            section_header(ui, "Previews", None);
            ui.add_space(4.0);
            previews::show(ui, app);
        });
}

fn show_position_readout(ui: &mut egui::Ui, app: &FramepointApp) {
    let position = app
        .framing
        .session
        .as_ref()
        .map(|s| s.position())
        .unwrap_or_default();
    ui.horizontal(|ui| {
        ui.monospace(format!(
            "x {:>5.1}   y {:>5.1}   zoom {:.1}x",
            position.x, position.y, position.scale
        ));
    });
}

fn show_zoom_controls(ui: &mut egui::Ui, app: &mut FramepointApp) {
    let enabled = app.framing.session.is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, egui::Button::new("−").min_size(egui::vec2(28.0, 24.0)))
            .on_hover_text("Zoom out")
            .clicked()
        {
            if let Some(session) = app.framing.session.as_mut() {
                session.zoom_out();
            }
        }
        if ui
            .add_enabled(enabled, egui::Button::new("+").min_size(egui::vec2(28.0, 24.0)))
            .on_hover_text("Zoom in")
            .clicked()
        {
            if let Some(session) = app.framing.session.as_mut() {
                session.zoom_in();
            }
        }
        if ui
            .add_enabled(enabled, egui::Button::new("Reset"))
            .on_hover_text("Back to centered, unzoomed")
            .clicked()
        {
            if let Some(session) = app.framing.session.as_mut() {
                session.reset();
            }
        }
    });
}

fn show_confirm_cancel(ui: &mut egui::Ui, app: &mut FramepointApp) {
    let enabled = app.framing.session.is_some() && !app.framing.is_saving;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, egui::Button::new("Confirm"))
            .on_hover_text("Save this framing next to the image")
            .clicked()
        {
            confirm(app);
        }
        if ui
            .add_enabled(enabled, egui::Button::new("Cancel"))
            .on_hover_text("Discard changes since the last confirm")
            .clicked()
        {
            cancel(app);
        }
    });
    if app.framing.is_saving {
        ui.small("Saving...");
    }
}

fn handle_shortcuts(ctx: &egui::Context, app: &mut FramepointApp) {
    if app.framing.session.is_none() {
        return;
    }

    let (zoom_in, zoom_out, reset, confirm_pressed) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
            i.key_pressed(egui::Key::Enter),
        )
    });

    if let Some(session) = app.framing.session.as_mut() {
        if zoom_in {
            session.zoom_in();
        }
        if zoom_out {
            session.zoom_out();
        }
        if reset {
            session.reset();
        }
    }
    if confirm_pressed && !app.framing.is_saving {
        confirm(app);
    }
}

fn confirm(app: &mut FramepointApp) {
    let Some(session) = app.framing.session.as_mut() else {
        return;
    };
    let position: FramePosition = session.confirm();
    let Some(image_path) = app.viewport.image_path.clone() else {
        return;
    };
    app.framing.is_saving = true;
    app.send_command(WorkerCommand::SavePosition {
        image_path,
        position,
    });
}

fn cancel(app: &mut FramepointApp) {
    if let Some(session) = app.framing.session.as_mut() {
        session.cancel();
    }
    app.ui_state
        .add_log("Cancelled: restored last confirmed framing".into());
}
