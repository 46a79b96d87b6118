use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::routes::RouteRegistry;
use simulation::{SelectStation, SelectedStation, SelectionSource, StationKey};

/// Line picked in the selector's first combo box.
#[derive(Resource, Default, Debug, Clone)]
pub struct SelectorLine(pub Option<String>);

/// Follow selections made elsewhere (map click, navigation) so the combo
/// boxes show the selected station's line.
pub fn sync_selector_line(selected: Res<SelectedStation>, mut line: ResMut<SelectorLine>) {
    if !selected.is_changed() {
        return;
    }
    if let Some(key) = selected.key() {
        if line.0.as_deref() != Some(key.line.as_str()) {
            line.0 = Some(key.line.clone());
        }
    }
}

pub fn station_selector_ui(
    mut contexts: EguiContexts,
    registry: Res<RouteRegistry>,
    selected: Res<SelectedStation>,
    mut line: ResMut<SelectorLine>,
    mut select: EventWriter<SelectStation>,
) {
    egui::Window::new("Find a station")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(true)
        .show(contexts.ctx_mut(), |ui| {
            let mut chosen_line = line.0.clone();
            egui::ComboBox::from_label("Line")
                .selected_text(chosen_line.as_deref().unwrap_or("Choose a line"))
                .show_ui(ui, |ui| {
                    for id in registry.lines_by_name().keys() {
                        ui.selectable_value(&mut chosen_line, Some(id.clone()), id);
                    }
                });
            if chosen_line != line.0 {
                line.0 = chosen_line;
            }

            let Some(current) = line.0.as_deref().and_then(|id| registry.line(id)) else {
                return;
            };
            let selected_name = selected
                .key()
                .filter(|key| key.line == current.id)
                .map(|key| key.name.as_str());

            let mut picked: Option<&str> = None;
            egui::ComboBox::from_label("Station")
                .selected_text(selected_name.unwrap_or("Choose a station"))
                .height(320.0)
                .show_ui(ui, |ui| {
                    for station in &current.stations {
                        let is_selected = selected_name == Some(station.name.as_str());
                        if ui.selectable_label(is_selected, &station.name).clicked() {
                            picked = Some(station.name.as_str());
                        }
                    }
                });

            if let Some(name) = picked {
                select.send(SelectStation::station(
                    StationKey::new(current.id.as_str(), name),
                    SelectionSource::Selector,
                ));
            }
        });
}
