use framepoint_core::project::project;
use framepoint_core::session::{GestureEvent, PointerPos};

use crate::app::FramepointApp;
use crate::messages::WorkerCommand;

/// Contact id for the single mouse pointer egui reports. Touch contacts
/// beyond the first never reach the session.
const PRIMARY_CONTACT: u64 = 0;

/// Fraction of the shorter panel side used for the framing viewport.
const VIEWPORT_FRACTION: f32 = 0.8;

pub fn show(ctx: &egui::Context, app: &mut FramepointApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if let Some((path, message)) = app.ui_state.load_error.clone() {
            show_load_error(ui, app, &path, &message);
            return;
        }

        let texture_id = match app.viewport.texture.as_ref() {
            Some(texture) => texture.id(),
            None => {
                show_placeholder(ui);
                return;
            }
        };

        // Square viewport centered in the panel.
        let side = rect.width().min(rect.height()) * VIEWPORT_FRACTION;
        let frame_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(side, side));
        let response = ui.allocate_rect(frame_rect, egui::Sense::click_and_drag());

        handle_drag(&response, app, side);
        update_cursor(ctx, &response, app);

        if let (Some(session), Some(metrics)) =
            (app.framing.session.as_ref(), app.viewport.metrics.as_ref())
        {
            let projection = project(&session.position(), metrics);
            draw_framed_image(ui, texture_id, frame_rect, &projection);
            draw_frame_border(ui, frame_rect);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_drag(response: &egui::Response, app: &mut FramepointApp, side: f32) {
    let Some(session) = app.framing.session.as_mut() else {
        return;
    };
    session.set_viewport_side(side as f64);

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            session.handle_gesture(GestureEvent::Start {
                contact: PRIMARY_CONTACT,
                pos: PointerPos::new(pos.x as f64, pos.y as f64),
            });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            session.handle_gesture(GestureEvent::Move {
                contact: PRIMARY_CONTACT,
                pos: PointerPos::new(pos.x as f64, pos.y as f64),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        session.handle_gesture(GestureEvent::End {
            contact: PRIMARY_CONTACT,
        });
    }
}

fn update_cursor(ctx: &egui::Context, response: &egui::Response, app: &FramepointApp) {
    let Some(session) = app.framing.session.as_ref() else {
        return;
    };
    if session.is_dragging() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
}

/// Paint the framed region: the projection's source window becomes the uv
/// rect, so the viewport shows exactly the sub-region every other render
/// site shows.
fn draw_framed_image(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    frame_rect: egui::Rect,
    projection: &framepoint_core::project::Projection,
) {
    let window = projection.source_window();
    let uv = egui::Rect::from_min_max(
        egui::pos2(window.min_x as f32, window.min_y as f32),
        egui::pos2(window.max_x as f32, window.max_y as f32),
    );
    ui.painter()
        .image(texture_id, frame_rect, uv, egui::Color32::WHITE);
}

fn draw_frame_border(ui: &egui::Ui, frame_rect: egui::Rect) {
    ui.painter().rect_stroke(
        frame_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
        egui::epaint::StrokeKind::Outside,
    );
}

fn show_load_error(ui: &mut egui::Ui, app: &FramepointApp, path: &std::path::Path, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.label(
                egui::RichText::new("Could not read image")
                    .size(18.0)
                    .color(egui::Color32::from_rgb(220, 120, 120)),
            );
            ui.label(
                egui::RichText::new(message)
                    .size(13.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(8.0);
            if ui.button("Retry").clicked() {
                app.send_command(WorkerCommand::LoadImage {
                    path: path.to_path_buf(),
                    options: app.config.options,
                });
            }
        });
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to choose its framing")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
