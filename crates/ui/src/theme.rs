use bevy_egui::{egui, EguiContexts};

/// Light panels that sit on the pale map background.
pub fn apply_map_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    ctx.set_visuals(egui::Visuals::light());
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(252, 252, 250);
    let inactive = egui::Color32::from_rgb(235, 236, 238);
    let hover = egui::Color32::from_rgb(220, 226, 235);
    let active = egui::Color32::from_rgb(0, 84, 166);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(4);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
