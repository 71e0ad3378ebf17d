use crate::app::FramepointApp;

pub fn show(ctx: &egui::Context, app: &mut FramepointApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(metrics) = app.viewport.metrics.as_ref() {
                ui.label(format!("{}x{}", metrics.width(), metrics.height()));
                ui.separator();
                ui.label(format!("aspect {:.3}", metrics.aspect_ratio()));
                ui.separator();
            }
            if let Some(session) = app.framing.session.as_ref() {
                let p = session.position();
                ui.label(format!("Zoom: {:.0}%", p.scale * 100.0));
                if session.is_dragging() {
                    ui.separator();
                    ui.label("dragging");
                }
            }
        });

        ui.add_space(2.0);
    });
}
