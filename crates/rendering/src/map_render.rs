//! Static route meshes (line polylines and station dots) plus the gizmo ring
//! around the selected station.

use bevy::prelude::*;

use simulation::routes::RouteRegistry;
use simulation::{SelectedStation, StationKey};

use crate::camera::map_to_world;

const LINE_WIDTH: f32 = 4.0;
const STATION_RADIUS: f32 = 3.5;
const STATION_RING_WIDTH: f32 = 1.25;
const SELECTION_RING_RADIUS: f32 = 7.0;
const SELECTION_PULSE: f32 = 1.5;

const LINE_Z: f32 = 0.0;
const STATION_Z: f32 = 1.0;

pub const BACKGROUND: Color = Color::srgb(0.96, 0.96, 0.94);
const STATION_FILL: Color = Color::WHITE;
const SELECTION_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

#[derive(Component)]
pub struct LineSegmentMesh;

/// A station dot; the outer ring takes the line color.
#[derive(Component, Debug, Clone)]
pub struct StationMarker {
    pub key: StationKey,
}

/// Spawn one rectangle per polyline segment, a round joint at every vertex,
/// and a ringed dot per station.
pub fn spawn_route_meshes(
    mut commands: Commands,
    registry: Res<RouteRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let joint = meshes.add(Circle::new(LINE_WIDTH / 2.0));
    let station_ring = meshes.add(Circle::new(STATION_RADIUS));
    let station_fill = meshes.add(Circle::new(STATION_RADIUS - STATION_RING_WIDTH));
    let fill_material = materials.add(ColorMaterial::from(STATION_FILL));

    let mut segments = 0;
    for line in registry.lines_by_name().values() {
        let material = materials.add(ColorMaterial::from(line.color()));

        for pair in line.points().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let delta = b - a;
            let length = delta.length();
            if length <= f32::EPSILON {
                continue;
            }
            // Map y points down, so the world-space heading is mirrored.
            let rotation = Quat::from_rotation_z(-delta.y.atan2(delta.x));
            commands.spawn((
                LineSegmentMesh,
                Mesh2d(meshes.add(Rectangle::new(length, LINE_WIDTH))),
                MeshMaterial2d(material.clone()),
                Transform::from_translation(map_to_world((a + b) / 2.0, LINE_Z))
                    .with_rotation(rotation),
            ));
            segments += 1;
        }

        for &point in line.points() {
            commands.spawn((
                LineSegmentMesh,
                Mesh2d(joint.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_translation(map_to_world(point, LINE_Z)),
            ));
        }

        for station in &line.stations {
            let position = line.position_at(station.distance);
            commands
                .spawn((
                    StationMarker {
                        key: StationKey::new(&line.id, &station.name),
                    },
                    Mesh2d(station_ring.clone()),
                    MeshMaterial2d(material.clone()),
                    Transform::from_translation(map_to_world(position, STATION_Z)),
                    Name::new(format!("{} ({})", station.name, line.id)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Mesh2d(station_fill.clone()),
                        MeshMaterial2d(fill_material.clone()),
                        Transform::from_xyz(0.0, 0.0, 0.1),
                    ));
                });
        }
    }
    info!(
        "Spawned {} line segments and {} stations",
        segments,
        registry.station_count()
    );
}

/// Pulsing ring around the selected station.
pub fn draw_selection_ring(
    time: Res<Time>,
    selected: Res<SelectedStation>,
    registry: Res<RouteRegistry>,
    mut gizmos: Gizmos,
) {
    let Some(position) = selected.key().and_then(|key| registry.station_position(key)) else {
        return;
    };
    let pulse = (time.elapsed_secs() * std::f32::consts::TAU).sin() * 0.5 + 0.5;
    let radius = SELECTION_RING_RADIUS + pulse * SELECTION_PULSE;
    let center = map_to_world(position, 0.0).truncate();
    gizmos.circle_2d(Isometry2d::from_translation(center), radius, SELECTION_COLOR);
}
