//! Station card: rankings and delay charts for the selected station.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::routes::RouteRegistry;
use simulation::stats::{SelectedStationStats, StationStats};
use simulation::{SelectStation, SelectionSource};

use crate::charts;

const MONTHS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

fn line_color(registry: &RouteRegistry, line: &str) -> egui::Color32 {
    registry.line(line).map_or(egui::Color32::GRAY, |l| {
        let [r, g, b] = l.color;
        egui::Color32::from_rgb(r, g, b)
    })
}

pub fn station_card_ui(
    mut contexts: EguiContexts,
    stats: Res<SelectedStationStats>,
    registry: Res<RouteRegistry>,
    mut select: EventWriter<SelectStation>,
) {
    let Some(stats) = stats.0.as_ref() else {
        return;
    };
    let color = line_color(&registry, &stats.station.line);

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new("Station")
        .id(egui::Id::new("station_card"))
        .open(&mut open)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .default_width(charts::CHART_WIDTH + 16.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(&stats.station.name);
            ui.colored_label(color, format!("{} line", stats.station.line));
            ui.separator();

            if !stats.has_data() {
                ui.label("No data");
            } else {
                egui::ScrollArea::vertical().max_height(560.0).show(ui, |ui| {
                    station_body(ui, stats, color);
                });
            }

            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        select.send(SelectStation::clear(SelectionSource::Dismiss));
    }
}

fn station_body(ui: &mut egui::Ui, stats: &StationStats, color: egui::Color32) {
    match &stats.ranks {
        Some(ranks) => {
            egui::Grid::new("station_ranks").num_columns(2).striped(true).show(ui, |ui| {
                ui.label("Danger rank");
                ui.label(format!("#{}", ranks.danger_rank));
                ui.end_row();
                ui.label("Incidents");
                ui.label(ranks.incident_count.to_string());
                ui.end_row();
                ui.label("Daily riders");
                ui.label(format!("{:.0}", ranks.usage));
                ui.end_row();
                ui.label("Usage rank");
                ui.label(format!("#{}", ranks.usage_rank));
                ui.end_row();
            });
        }
        None => {
            ui.label("No ranking data");
        }
    }

    ui.add_space(6.0);
    ui.strong("Delay likelihood by hour");
    let hourly: Vec<f32> = stats.hourly.iter().map(|h| h.percent as f32).collect();
    let hours: Vec<String> = stats.hourly.iter().map(|h| h.hour.to_string()).collect();
    match charts::bar_chart(ui, &hourly, &hours, 3, color) {
        Some(i) => {
            let h = &stats.hourly[i];
            ui.label(format!("{:02}:00  {:.1}% of days delayed", h.hour, h.percent));
        }
        None => {
            if let Some(peak) = stats
                .hourly
                .iter()
                .max_by(|a, b| a.percent.total_cmp(&b.percent))
                .filter(|h| h.percent > 0.0)
            {
                ui.label(format!("Most likely at {:02}:00 ({:.1}%)", peak.hour, peak.percent));
            }
        }
    }

    if !stats.incident_groups.is_empty() {
        ui.add_space(6.0);
        ui.strong("Incidents by cause");
        ui.horizontal(|ui| {
            let counts: Vec<f32> = stats.incident_groups.iter().map(|g| g.count as f32).collect();
            charts::pie_chart(ui, &counts, 48.0);
            ui.vertical(|ui| {
                for (i, group) in stats.incident_groups.iter().enumerate() {
                    let swatch = charts::PALETTE[i % charts::PALETTE.len()];
                    ui.horizontal(|ui| {
                        ui.colored_label(swatch, "■");
                        ui.label(format!("{} ({})", group.description, group.count));
                    });
                }
            });
        });
    }

    if !stats.yearly.is_empty() {
        ui.add_space(6.0);
        ui.strong("Average delay by year (min)");
        let points: Vec<(String, f32)> = stats
            .yearly
            .iter()
            .map(|y| (y.year.to_string(), y.average_delay as f32))
            .collect();
        charts::line_chart(ui, &points, color);
    }

    if stats.monthly.iter().any(|m| m.first.incidents + m.second.incidents > 0) {
        let (first, second) = stats.comparison_years;
        ui.add_space(6.0);
        ui.strong(format!("Incidents per month, {} vs {}", first, second));
        let pairs: Vec<(f32, f32)> = stats
            .monthly
            .iter()
            .map(|m| (m.first.incidents as f32, m.second.incidents as f32))
            .collect();
        let labels: Vec<String> = MONTHS.iter().map(|m| m.to_string()).collect();
        let second_color = egui::Color32::from_gray(120);
        charts::paired_bar_chart(ui, &pairs, &labels, (color, second_color));
        ui.horizontal(|ui| {
            ui.colored_label(color, format!("■ {}", first));
            ui.colored_label(second_color, format!("■ {}", second));
        });
    }

    if !stats.top_incidents.is_empty() {
        ui.add_space(6.0);
        ui.collapsing("Longest delays", |ui| {
            egui::Grid::new("top_incidents").num_columns(3).striped(true).show(ui, |ui| {
                for incident in &stats.top_incidents {
                    ui.label(format!("{} {}", incident.date, incident.time));
                    ui.label(&incident.description);
                    ui.label(format!("{:.0} min", incident.min_delay));
                    ui.end_row();
                }
            });
        });
    }
}
