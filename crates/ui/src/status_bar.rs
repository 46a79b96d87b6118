use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::geolocation::LocateRequest;
use simulation::routes::RouteRegistry;
use simulation::status::{StatusKind, StatusMessage};
use simulation::SelectedStation;

use crate::about::AboutVisible;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(190, 30, 30);

pub fn status_bar_ui(
    mut contexts: EguiContexts,
    status: Res<StatusMessage>,
    selected: Res<SelectedStation>,
    registry: Res<RouteRegistry>,
    mut about: ResMut<AboutVisible>,
    mut locate: EventWriter<LocateRequest>,
) {
    egui::TopBottomPanel::bottom("status_bar").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            if ui.button("Locate me").clicked() {
                locate.send(LocateRequest);
            }
            if ui.button("About").clicked() {
                about.0 = !about.0;
            }
            ui.separator();

            match status.current() {
                Some((StatusKind::Error, text)) => {
                    ui.colored_label(ERROR_COLOR, text);
                }
                Some((StatusKind::Info, text)) => {
                    ui.label(text);
                }
                None => match selected.key() {
                    Some(key) => {
                        ui.label(format!("{} ({})", key.name, key.line));
                    }
                    None => {
                        ui.weak(format!(
                            "{} stations on {} lines",
                            registry.station_count(),
                            registry.lines_by_name().len()
                        ));
                    }
                },
            }
        });
    });
}
