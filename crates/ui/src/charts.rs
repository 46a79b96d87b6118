//! Small painter-based charts for the station card.

use bevy_egui::egui;

pub const CHART_WIDTH: f32 = 320.0;
pub const CHART_HEIGHT: f32 = 90.0;

const CHART_BG: egui::Color32 = egui::Color32::from_gray(245);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_gray(160);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_gray(90);
const LABEL_SIZE: f32 = 10.0;

/// Slice colors, reused in order.
pub const PALETTE: [egui::Color32; 6] = [
    egui::Color32::from_rgb(218, 41, 28),
    egui::Color32::from_rgb(255, 205, 0),
    egui::Color32::from_rgb(0, 130, 200),
    egui::Color32::from_rgb(60, 170, 90),
    egui::Color32::from_rgb(150, 90, 180),
    egui::Color32::from_rgb(140, 140, 140),
];

/// Largest value, or 1 when every value is zero or the slice is empty, so
/// charts never divide by zero.
pub fn value_ceiling(values: &[f32]) -> f32 {
    let max = values.iter().copied().fold(0.0_f32, f32::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Start and end angles (radians, clockwise from 12 o'clock) of each slice.
/// Non-positive values get an empty slice.
pub fn slice_angles(values: &[f32]) -> Vec<(f32, f32)> {
    let total: f32 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let sweep = if total > 0.0 && v > 0.0 {
                v / total * std::f32::consts::TAU
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn label(painter: &egui::Painter, pos: egui::Pos2, anchor: egui::Align2, text: &str) {
    painter.text(
        pos,
        anchor,
        text,
        egui::FontId::proportional(LABEL_SIZE),
        LABEL_COLOR,
    );
}

/// Vertical bars with an optional label under every `label_every`-th bar.
/// Returns the index of the hovered bar.
pub fn bar_chart(
    ui: &mut egui::Ui,
    values: &[f32],
    labels: &[String],
    label_every: usize,
    color: egui::Color32,
) -> Option<usize> {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT + LABEL_SIZE + 4.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let plot = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), CHART_HEIGHT));
    painter.rect_filled(plot, 2.0, CHART_BG);

    if values.is_empty() {
        return None;
    }
    let ceiling = value_ceiling(values);
    let slot = plot.width() / values.len() as f32;
    let hovered = response
        .hover_pos()
        .filter(|p| plot.x_range().contains(p.x))
        .map(|p| (((p.x - plot.min.x) / slot) as usize).min(values.len() - 1));

    for (i, &value) in values.iter().enumerate() {
        let height = (value.max(0.0) / ceiling) * (plot.height() - 4.0);
        let x = plot.min.x + i as f32 * slot;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x + slot * 0.15, plot.max.y - height),
            egui::pos2(x + slot * 0.85, plot.max.y),
        );
        let fill = if hovered == Some(i) {
            color.gamma_multiply(0.6)
        } else {
            color
        };
        painter.rect_filled(bar, 1.0, fill);

        if label_every > 0 && i % label_every == 0 {
            if let Some(text) = labels.get(i) {
                label(
                    &painter,
                    egui::pos2(x + slot / 2.0, plot.max.y + 2.0),
                    egui::Align2::CENTER_TOP,
                    text,
                );
            }
        }
    }
    hovered
}

/// Two bars per slot, `first` then `second`, sharing one scale.
pub fn paired_bar_chart(
    ui: &mut egui::Ui,
    pairs: &[(f32, f32)],
    labels: &[String],
    colors: (egui::Color32, egui::Color32),
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT + LABEL_SIZE + 4.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let plot = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), CHART_HEIGHT));
    painter.rect_filled(plot, 2.0, CHART_BG);

    if pairs.is_empty() {
        return;
    }
    let flat: Vec<f32> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
    let ceiling = value_ceiling(&flat);
    let slot = plot.width() / pairs.len() as f32;
    let bar_width = slot * 0.35;

    for (i, &(first, second)) in pairs.iter().enumerate() {
        let x = plot.min.x + i as f32 * slot + slot * 0.15;
        for (offset, value, color) in [(0.0, first, colors.0), (bar_width, second, colors.1)] {
            let height = (value.max(0.0) / ceiling) * (plot.height() - 4.0);
            let bar = egui::Rect::from_min_max(
                egui::pos2(x + offset, plot.max.y - height),
                egui::pos2(x + offset + bar_width, plot.max.y),
            );
            painter.rect_filled(bar, 1.0, color);
        }
        if let Some(text) = labels.get(i) {
            label(
                &painter,
                egui::pos2(plot.min.x + (i as f32 + 0.5) * slot, plot.max.y + 2.0),
                egui::Align2::CENTER_TOP,
                text,
            );
        }
    }
}

/// Polyline through `(label, value)` points with a dot per point, adapted
/// from the sparkline style.
pub fn line_chart(ui: &mut egui::Ui, points: &[(String, f32)], color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT + LABEL_SIZE + 4.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let plot = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), CHART_HEIGHT));
    painter.rect_filled(plot, 2.0, CHART_BG);
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(1.0, AXIS_COLOR),
    );

    if points.is_empty() {
        return;
    }
    let values: Vec<f32> = points.iter().map(|(_, v)| *v).collect();
    let ceiling = value_ceiling(&values);
    let inner = plot.shrink(8.0);
    let step = if points.len() > 1 {
        inner.width() / (points.len() - 1) as f32
    } else {
        0.0
    };

    let positions: Vec<egui::Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if points.len() > 1 {
                inner.min.x + i as f32 * step
            } else {
                inner.center().x
            };
            let y = inner.max.y - (v.max(0.0) / ceiling) * inner.height();
            egui::pos2(x, y)
        })
        .collect();

    for window in positions.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
    for (pos, (text, value)) in positions.iter().zip(points) {
        painter.circle_filled(*pos, 2.5, color);
        label(
            &painter,
            *pos - egui::vec2(0.0, 4.0),
            egui::Align2::CENTER_BOTTOM,
            &format!("{:.1}", value),
        );
        label(
            &painter,
            egui::pos2(pos.x, plot.max.y + 2.0),
            egui::Align2::CENTER_TOP,
            text,
        );
    }
}

/// Filled pie, one slice per value, colored from [`PALETTE`].
pub fn pie_chart(ui: &mut egui::Ui, values: &[f32], radius: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    // Each slice is drawn as a fan of thin convex wedges.
    const WEDGE: f32 = 0.1;
    for (i, (start, end)) in slice_angles(values).into_iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let mut angle = start;
        while angle < end {
            let next = (angle + WEDGE).min(end);
            let at = |a: f32| center + radius * egui::vec2(a.sin(), -a.cos());
            painter.add(egui::Shape::convex_polygon(
                vec![center, at(angle), at(next)],
                color,
                egui::Stroke::NONE,
            ));
            angle = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ceiling_never_zero() {
        assert_eq!(value_ceiling(&[]), 1.0);
        assert_eq!(value_ceiling(&[0.0, 0.0]), 1.0);
        assert_eq!(value_ceiling(&[2.0, 7.5, 3.0]), 7.5);
    }

    #[test]
    fn test_slices_cover_the_full_circle() {
        let slices = slice_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].0, 0.0);
        assert!((slices[1].1 - std::f32::consts::PI).abs() < 1e-5);
        assert!((slices[2].1 - std::f32::consts::TAU).abs() < 1e-5);
    }

    #[test]
    fn test_empty_values_get_empty_slices() {
        let slices = slice_angles(&[0.0, 3.0, -1.0]);
        assert_eq!(slices[0].0, slices[0].1);
        assert!((slices[1].1 - std::f32::consts::TAU).abs() < 1e-5);
        assert_eq!(slices[2].0, slices[2].1);
    }
}
