//! Camera system for the measuring view
//!
//! A single perspective camera looks at the tracked scene. On a device the
//! camera pose would come from tracking; here the arrow keys orbit it
//! around the scene center so points can be picked from different angles.
//!
//! Default lighting is added alongside the camera so tracked surfaces and
//! markers are shaded.

use bevy::prelude::*;

// Constants for camera positioning
const ORBIT_RADIUS: f32 = 1.8;
const ORBIT_HEIGHT: f32 = 1.2;
const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 0.2, 0.0);
/// Radians per second while an arrow key is held
const ORBIT_SPEED: f32 = 1.2;
const AMBIENT_BRIGHTNESS: f32 = 400.0;
/// Lux, roughly an overcast day
const SUN_ILLUMINANCE: f32 = 1_000.0;

//------------------------------------------------------------------------------
// Camera Components
//------------------------------------------------------------------------------

/// Component that marks the camera used for hit-testing and label layout
#[derive(Component)]
pub struct MeasureCamera;

/// Current orbit angle around the scene center
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CameraOrbit {
    pub yaw: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbit>()
            .insert_resource(AmbientLight {
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_systems(Startup, (spawn_measure_camera, spawn_default_lighting))
            .add_systems(Update, orbit_camera);
    }
}

//------------------------------------------------------------------------------
// Camera Setup Functions
//------------------------------------------------------------------------------

/// Camera transform for a given orbit angle
pub fn orbit_transform(yaw: f32) -> Transform {
    let position = Vec3::new(
        ORBIT_RADIUS * yaw.sin(),
        ORBIT_HEIGHT,
        ORBIT_RADIUS * yaw.cos(),
    );
    Transform::from_translation(position).looking_at(ORBIT_TARGET, Vec3::Y)
}

pub fn spawn_measure_camera(mut commands: Commands, orbit: Res<CameraOrbit>) {
    commands.spawn((
        Camera3d::default(),
        orbit_transform(orbit.yaw),
        MeasureCamera,
    ));
}

pub fn spawn_default_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

//------------------------------------------------------------------------------
// Camera Control System
//------------------------------------------------------------------------------

/// Left and right arrows orbit the camera around the scene
pub fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<CameraOrbit>,
    mut camera_query: Query<&mut Transform, With<MeasureCamera>>,
) {
    let mut direction = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) {
        direction -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        direction += 1.0;
    }
    if direction == 0.0 {
        return;
    }

    orbit.yaw += direction * ORBIT_SPEED * time.delta_secs();
    for mut transform in camera_query.iter_mut() {
        *transform = orbit_transform(orbit.yaw);
    }
}
