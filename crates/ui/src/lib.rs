use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod about;
pub mod charts;
pub mod station_card;
pub mod station_selector;
pub mod status_bar;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<station_selector::SelectorLine>()
            .init_resource::<about::AboutVisible>()
            .add_systems(Startup, theme::apply_map_theme)
            .add_systems(
                Update,
                (
                    station_selector::sync_selector_line,
                    about::about_keybind,
                    // Panels before windows so windows avoid the status bar.
                    status_bar::status_bar_ui,
                    station_selector::station_selector_ui,
                    station_card::station_card_ui,
                    about::about_ui,
                )
                    .chain()
                    .after(simulation::stats::refresh_selected_stats),
            );
    }
}
