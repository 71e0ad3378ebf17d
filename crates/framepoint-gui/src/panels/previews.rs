use framepoint_core::project::project;

use crate::app::FramepointApp;

/// The other places a framed photo shows up: a circular avatar, a square
/// gallery thumbnail, and a larger detail view. All three are drawn from the
/// same projection as the interactive viewport, so what the user sees here
/// is exactly what every display site renders later.
pub fn show(ui: &mut egui::Ui, app: &FramepointApp) {
    let (Some(session), Some(metrics), Some(texture)) = (
        app.framing.session.as_ref(),
        app.viewport.metrics.as_ref(),
        app.viewport.texture.as_ref(),
    ) else {
        ui.small("No image loaded");
        return;
    };

    let projection = project(&session.position(), metrics);
    let window = projection.source_window();
    let uv = egui::Rect::from_min_max(
        egui::pos2(window.min_x as f32, window.min_y as f32),
        egui::pos2(window.max_x as f32, window.max_y as f32),
    );
    let texture_id = texture.id();

    ui.horizontal(|ui| {
        preview(ui, texture_id, uv, 72.0, true, "Avatar");
        preview(ui, texture_id, uv, 72.0, false, "Thumbnail");
    });
    ui.add_space(4.0);
    preview(ui, texture_id, uv, 150.0, false, "Detail");
}

fn preview(
    ui: &mut egui::Ui,
    texture_id: egui::TextureId,
    uv: egui::Rect,
    side: f32,
    circular: bool,
    label: &str,
) {
    ui.vertical(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.image(texture_id, rect, uv, egui::Color32::WHITE);

        if circular {
            // Mask the corners with a thick ring in the panel color; the
            // painter clips it to the allocated square.
            let mask = ui.visuals().panel_fill;
            painter.circle_stroke(
                rect.center(),
                side * 0.65,
                egui::Stroke::new(side * 0.3 + 2.0, mask),
            );
            painter.circle_stroke(
                rect.center(),
                side * 0.5,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            );
        } else {
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
                egui::epaint::StrokeKind::Outside,
            );
        }

        ui.small(label);
    });
}
