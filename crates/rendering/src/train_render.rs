use bevy::prelude::*;

use simulation::config::{CARS_PER_TRAIN, CAR_LENGTH, CAR_WIDTH};
use simulation::routes::RouteRegistry;
use simulation::trains::{CarPose, Train};

use crate::camera::map_to_world;

const TRAIN_Z: f32 = 2.0;
const CAR_FALLBACK_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);

/// One drawn car, pointing back at the simulated train it belongs to.
#[derive(Component, Debug, Clone, Copy)]
pub struct TrainCarSprite {
    pub train: Entity,
    pub index: usize,
}

/// Car entities spawned for a train, in car order.
#[derive(Component, Debug, Clone, Copy)]
pub struct TrainCars(pub [Entity; CARS_PER_TRAIN]);

/// Place a car sprite at a pose. Map headings are measured with y down, so
/// the world rotation runs the other way.
fn car_transform(pose: &CarPose) -> Transform {
    Transform::from_translation(map_to_world(pose.position, TRAIN_Z))
        .with_rotation(Quat::from_rotation_z(-pose.angle_degrees.to_radians()))
}

pub fn spawn_train_cars(
    mut commands: Commands,
    registry: Res<RouteRegistry>,
    trains: Query<(Entity, &Train), Without<TrainCars>>,
) {
    for (entity, train) in &trains {
        let line = registry.line(&train.state.line);
        let color = line.map_or(CAR_FALLBACK_COLOR, |l| l.color().darker(0.15));
        let poses = line.map(|l| train.state.car_poses(l));

        let cars = std::array::from_fn(|index| {
            let transform = poses
                .as_ref()
                .map_or(Transform::from_xyz(0.0, 0.0, TRAIN_Z), |p| car_transform(&p[index]));
            commands
                .spawn((
                    TrainCarSprite {
                        train: entity,
                        index,
                    },
                    Sprite::from_color(color, Vec2::new(CAR_LENGTH, CAR_WIDTH)),
                    transform,
                ))
                .id()
        });
        commands.entity(entity).insert(TrainCars(cars));
    }
}

/// Move every car to its current pose.
pub fn update_train_cars(
    registry: Res<RouteRegistry>,
    trains: Query<(&Train, &TrainCars), Changed<Train>>,
    mut transforms: Query<&mut Transform, With<TrainCarSprite>>,
) {
    for (train, cars) in &trains {
        let Some(line) = registry.line(&train.state.line) else {
            continue;
        };
        let poses = train.state.car_poses(line);
        for (pose, &car) in poses.iter().zip(cars.0.iter()) {
            if let Ok(mut transform) = transforms.get_mut(car) {
                *transform = car_transform(pose);
            }
        }
    }
}

/// Remove cars whose train was despawned.
pub fn despawn_orphaned_cars(
    mut commands: Commands,
    trains: Query<(), With<Train>>,
    cars: Query<(Entity, &TrainCarSprite)>,
) {
    for (entity, car) in &cars {
        if !trains.contains(car.train) {
            commands.entity(entity).despawn();
        }
    }
}
