//! Tracked surfaces
//!
//! Stand-in for the surfaces a camera tracking session would detect: a
//! floor and a few boxes. Only entities tagged [`TrackedSurface`] can be
//! hit by a touch, so markers and labels never catch a ray.

use bevy::prelude::*;

use crate::ui::theme::{FLOOR_COLOR, PROP_COLOR};

const FLOOR_SIZE: f32 = 4.0;

/// (size, center) of each box on the floor
const PROPS: [(Vec3, Vec3); 3] = [
    (Vec3::new(0.4, 0.3, 0.4), Vec3::new(-0.5, 0.15, -0.3)),
    (Vec3::new(0.2, 0.6, 0.2), Vec3::new(0.45, 0.3, 0.1)),
    (Vec3::new(0.8, 0.05, 0.5), Vec3::new(0.1, 0.025, 0.6)),
];

/// Marker component for meshes the hit-test may resolve points on
#[derive(Component, Debug, Default)]
pub struct TrackedSurface;

pub struct TrackedScenePlugin;

impl Plugin for TrackedScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_tracked_surfaces);
    }
}

pub fn spawn_tracked_surfaces(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(FLOOR_COLOR)),
        Transform::default(),
        TrackedSurface,
    ));

    let prop_material = materials.add(PROP_COLOR);
    for (size, center) in PROPS {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(prop_material.clone()),
            Transform::from_translation(center),
            TrackedSurface,
        ));
    }

    info!("Spawned {} tracked surfaces", PROPS.len() + 1);
}
