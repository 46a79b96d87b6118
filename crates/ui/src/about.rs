use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

#[derive(Resource, Debug, Clone, Copy)]
pub struct AboutVisible(pub bool);

impl Default for AboutVisible {
    fn default() -> Self {
        Self(true)
    }
}

const CONTROLS: [(&str, &str); 6] = [
    ("Click a station", "open its delay card"),
    ("Arrow keys / wheel / swipe", "step to the nearest station that way"),
    ("Ctrl + wheel / pinch / + -", "zoom"),
    ("Escape", "close the card"),
    ("Locate me", "jump to the nearest station"),
    ("F1", "show or hide this window"),
];

pub fn about_keybind(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<AboutVisible>) {
    if keys.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

pub fn about_ui(mut contexts: EguiContexts, mut visible: ResMut<AboutVisible>) {
    if !visible.0 {
        return;
    }
    let mut open = true;
    egui::Window::new("TTC Subway Delays")
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                "How likely is your subway station to make you late? Each station \
                 card summarises years of TTC delay logs: when delays happen, what \
                 causes them and how the station has trended.",
            );
            ui.add_space(8.0);
            egui::Grid::new("about_controls").num_columns(2).show(ui, |ui| {
                for (input, action) in CONTROLS {
                    ui.strong(input);
                    ui.label(action);
                    ui.end_row();
                }
            });
            ui.add_space(8.0);
            ui.small("Data: City of Toronto Open Data, TTC subway delay data.");
        });
    if !open {
        visible.0 = false;
    }
}
