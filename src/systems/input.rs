//! Touch and mouse input for the measuring view
//!
//! A new touch (or left click) is turned into a ray from the measuring
//! camera, cast against tracked surfaces, and the hit point is fed to the
//! selection session. Only the first new press of a frame is used.

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::settings::MeasureSettings;
use crate::core::tracking::TrackingSession;
use crate::geometry::WorldPoint;
use crate::measure::{CommandQueue, HitTest, SelectionSession};
use crate::rendering::cameras::MeasureCamera;
use crate::rendering::tracked_scene::TrackedSurface;
use crate::systems::system_sets::MeasureSets;

/// The selection session of the measuring view
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct MeasureSession(pub SelectionSession);

/// Hit-testing against meshes tagged [`TrackedSurface`]
pub struct MeshHitTest<'a, 'w, 's> {
    pub ray_cast: &'a mut MeshRayCast<'w, 's>,
    /// True for entities the ray may land on
    pub is_surface: &'a dyn Fn(Entity) -> bool,
    /// Screen position to world ray, usually through the measuring camera
    pub screen_ray: &'a dyn Fn(Vec2) -> Option<Ray3d>,
}

impl HitTest for MeshHitTest<'_, '_, '_> {
    fn hit_test(&mut self, screen: Vec2) -> Option<WorldPoint> {
        let ray = (self.screen_ray)(screen)?;

        let is_surface = self.is_surface;
        let settings = MeshRayCastSettings::default().with_filter(&is_surface);

        self.ray_cast
            .cast_ray(ray, &settings)
            .first()
            .map(|(_, hit)| WorldPoint::from_vec3(hit.point))
    }
}

pub struct MeasureInputPlugin;

impl Plugin for MeasureInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeasureSession>()
            .add_systems(Startup, init_measure_session)
            .add_systems(
                Update,
                (handle_touch_input, reset_on_key, exit_on_esc)
                    .chain()
                    .in_set(MeasureSets::Input),
            );
    }
}

/// Build the session with the label format chosen on the command line
pub fn init_measure_session(
    mut commands: Commands,
    settings: Res<MeasureSettings>,
) {
    commands.insert_resource(MeasureSession(SelectionSession::new(
        settings.label_format,
    )));
    debug!(
        "[init_measure_session] Label format: {:?}",
        settings.label_format
    );
}

/// Screen position of the press to handle this frame. Touches win over the
/// mouse, matching a device where the mouse is emulated from touch.
pub fn pressed_screen_position(
    first_new_touch: Option<Vec2>,
    mouse_just_pressed: bool,
    cursor: Option<Vec2>,
) -> Option<Vec2> {
    first_new_touch.or(if mouse_just_pressed { cursor } else { None })
}

#[allow(clippy::too_many_arguments)]
pub fn handle_touch_input(
    touches: Res<Touches>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MeasureCamera>>,
    surfaces: Query<(), With<TrackedSurface>>,
    mut ray_cast: MeshRayCast,
    tracking: Res<TrackingSession>,
    mut session: ResMut<MeasureSession>,
    mut queue: ResMut<CommandQueue>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let Some(screen) = pressed_screen_position(
        touches.iter_just_pressed().next().map(|touch| touch.position()),
        mouse.just_pressed(MouseButton::Left),
        cursor,
    ) else {
        return;
    };

    if !tracking.is_running() {
        debug!(
            "[handle_touch_input] Tracking paused, ignoring press at {:?}",
            screen
        );
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        warn!("[handle_touch_input] No measuring camera, ignoring press");
        return;
    };

    let is_surface = |entity: Entity| surfaces.contains(entity);
    let screen_ray = |screen: Vec2| {
        camera.viewport_to_world(camera_transform, screen).ok()
    };
    let mut hit_test = MeshHitTest {
        ray_cast: &mut ray_cast,
        is_surface: &is_surface,
        screen_ray: &screen_ray,
    };

    if let Some(outcome) =
        session.handle_touch(screen, &mut hit_test, &mut *queue)
    {
        debug!("[handle_touch_input] {:?} -> {:?}", screen, outcome);
    }
}

/// `R` clears every point, marker and the label
pub fn reset_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<MeasureSession>,
    mut queue: ResMut<CommandQueue>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        session.reset(&mut *queue);
    }
}

/// System to exit the application when the Escape key is pressed
pub fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{SceneCommand, SessionPhase};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::mesh::MeshAabb;
    use bevy::render::primitives::Aabb;

    /// Spawn a cuboid with the bounds and visibility the render plugins
    /// would normally compute
    fn spawn_box(app: &mut App, size: f32, center: Vec3) -> EntityWorldMut<'_> {
        let mesh = Mesh::from(Cuboid::from_length(size));
        let aabb: Aabb = mesh.compute_aabb().expect("cuboid has positions");
        let handle = app.world_mut().resource_mut::<Assets<Mesh>>().add(mesh);

        let mut view_visibility = ViewVisibility::HIDDEN;
        view_visibility.set();
        let transform = Transform::from_translation(center);
        app.world_mut().spawn((
            Mesh3d(handle),
            transform,
            GlobalTransform::from(transform),
            aabb,
            InheritedVisibility::VISIBLE,
            view_visibility,
        ))
    }

    /// Tap once along the measuring camera's forward axis, tilted up by `pitch`
    fn tap_from_camera(app: &mut App, pitch: f32) {
        app.world_mut()
            .run_system_once(
                move |mut ray_cast: MeshRayCast,
                      eye: Query<&GlobalTransform, With<MeasureCamera>>,
                      surfaces: Query<(), With<TrackedSurface>>,
                      mut session: ResMut<MeasureSession>,
                      mut queue: ResMut<CommandQueue>| {
                    let eye = eye.single().expect("one measuring camera");
                    let direction = Quat::from_rotation_x(pitch) * *eye.forward();
                    let ray = Dir3::new(direction)
                        .ok()
                        .map(|dir| Ray3d::new(eye.translation(), dir));

                    let is_surface = |entity: Entity| surfaces.contains(entity);
                    let screen_ray = |_: Vec2| ray;
                    let mut hit_test = MeshHitTest {
                        ray_cast: &mut ray_cast,
                        is_surface: &is_surface,
                        screen_ray: &screen_ray,
                    };
                    session.handle_touch(Vec2::ZERO, &mut hit_test, &mut *queue);
                },
            )
            .expect("tap system should run");
    }

    /// A tracked box at the origin with an untagged box between it and the
    /// camera on the +Z axis
    fn hit_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<MeasureSession>()
            .init_resource::<CommandQueue>();

        spawn_box(&mut app, 1.0, Vec3::ZERO).insert(TrackedSurface);
        spawn_box(&mut app, 0.4, Vec3::new(0.0, 0.0, 2.0));

        // Off the face diagonal, straight down -Z
        let eye = Transform::from_xyz(0.1, 0.05, 5.0)
            .looking_at(Vec3::new(0.1, 0.05, 0.0), Vec3::Y);
        app.world_mut()
            .spawn((MeasureCamera, eye, GlobalTransform::from(eye)));
        app
    }

    #[test]
    fn test_hits_land_on_tracked_surfaces_only() {
        let mut app = hit_test_app();
        tap_from_camera(&mut app, 0.0);

        let session = app.world().resource::<MeasureSession>();
        assert_eq!(session.phase(), SessionPhase::OneSelected);
        let point = session.points()[0].to_vec3();
        assert!(
            (point - Vec3::new(0.1, 0.05, 0.5)).length() < 1e-4,
            "ray should pass the untagged box and stop on the tracked face, got {point:?}"
        );

        let commands: Vec<_> = app
            .world_mut()
            .resource_mut::<CommandQueue>()
            .drain()
            .collect();
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], SceneCommand::Attach { .. }));
    }

    #[test]
    fn test_miss_leaves_session_empty() {
        let mut app = hit_test_app();
        // Tilted up, the ray clears both boxes
        tap_from_camera(&mut app, std::f32::consts::FRAC_PI_4);

        assert_eq!(
            app.world().resource::<MeasureSession>().phase(),
            SessionPhase::Empty
        );
        assert!(app.world().resource::<CommandQueue>().is_empty());
    }

    #[test]
    fn test_touch_wins_over_mouse() {
        let touch = Some(Vec2::new(10.0, 20.0));
        let cursor = Some(Vec2::new(300.0, 400.0));
        assert_eq!(pressed_screen_position(touch, true, cursor), touch);
        assert_eq!(pressed_screen_position(None, true, cursor), cursor);
        assert_eq!(pressed_screen_position(None, false, cursor), None);
        assert_eq!(pressed_screen_position(None, true, None), None);
    }

    #[test]
    fn test_reset_key_clears_session() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<MeasureSession>()
            .init_resource::<CommandQueue>()
            .add_systems(Update, reset_on_key);

        {
            let world = app.world_mut();
            let mut queue = CommandQueue::new();
            let mut session = world.resource_mut::<MeasureSession>();
            session.select(WorldPoint::ORIGIN, &mut queue);
            session.select(WorldPoint::new(0.0, 0.0, 1.0), &mut queue);
            assert_eq!(session.phase(), SessionPhase::Measured);
        }

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();

        assert_eq!(
            app.world().resource::<MeasureSession>().phase(),
            SessionPhase::Empty
        );
        assert_eq!(
            app.world().resource::<CommandQueue>().len(),
            3,
            "reset should detach two markers and the label"
        );
    }
}
