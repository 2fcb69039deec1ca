//! Materializing scene commands
//!
//! Drains the [`CommandQueue`] filled by the measurement core and turns
//! each command into an entity spawn or despawn. Markers become red sphere
//! meshes; labels become text nodes that `labels` keeps positioned over
//! their world location.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::measure::{
    CommandQueue, LabelDescriptor, MarkerDescriptor, NodeDescriptor,
    NodeHandle, SceneCommand,
};
use crate::rendering::labels::{layout_labels, label_font_size, MeasurementLabel};
use crate::systems::system_sets::MeasureSets;

/// Marker component for anchored point spheres
#[derive(Component, Debug, Default)]
pub struct MeasurementMarker;

/// Entities currently attached, by handle. The only link between a core
/// [`NodeHandle`] and its entity.
#[derive(Resource, Debug, Default)]
pub struct SceneNodeIndex {
    entities: HashMap<NodeHandle, Entity>,
}

impl SceneNodeIndex {
    pub fn get(&self, handle: NodeHandle) -> Option<Entity> {
        self.entities.get(&handle).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub struct SceneNodesPlugin;

impl Plugin for SceneNodesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandQueue>()
            .init_resource::<SceneNodeIndex>()
            .add_systems(
                Update,
                apply_scene_commands.in_set(MeasureSets::SceneSync),
            )
            .add_systems(Update, layout_labels.in_set(MeasureSets::Layout));
    }
}

/// Spawn or despawn one entity per queued command, in order
pub fn apply_scene_commands(
    mut commands: Commands,
    mut queue: ResMut<CommandQueue>,
    mut index: ResMut<SceneNodeIndex>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if queue.is_empty() {
        return;
    }

    for command in queue.drain() {
        match command {
            SceneCommand::Attach { handle, descriptor } => {
                let entity = match descriptor {
                    NodeDescriptor::Marker(marker) => spawn_marker(
                        &mut commands,
                        &marker,
                        &mut meshes,
                        &mut materials,
                    ),
                    NodeDescriptor::Label(label) => {
                        spawn_label(&mut commands, label)
                    }
                };
                index.entities.insert(handle, entity);
                debug!(
                    "[apply_scene_commands] Attached {:?} as {:?}",
                    handle, entity
                );
            }
            SceneCommand::Detach { handle } => {
                match index.entities.remove(&handle) {
                    Some(entity) => {
                        commands.entity(entity).despawn();
                        debug!("[apply_scene_commands] Detached {:?}", handle);
                    }
                    None => warn!(
                        "[apply_scene_commands] Detach of unknown node {:?}",
                        handle
                    ),
                }
            }
        }
    }
}

fn spawn_marker(
    commands: &mut Commands,
    marker: &MarkerDescriptor,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(marker.radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: marker.color,
                ..default()
            })),
            Transform::from_translation(marker.position.to_vec3()),
            MeasurementMarker,
        ))
        .id()
}

fn spawn_label(commands: &mut Commands, label: LabelDescriptor) -> Entity {
    commands
        .spawn((
            Text::new(label.text.clone()),
            TextFont {
                font_size: label_font_size(label.scale),
                ..default()
            },
            TextColor(label.color),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            // Shown once the layout pass has projected it
            Visibility::Hidden,
            MeasurementLabel {
                world_position: label.position.to_vec3(),
            },
        ))
        .id()
}
