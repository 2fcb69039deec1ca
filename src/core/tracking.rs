//! Tracking session lifecycle
//!
//! The tracked scene only accepts touches while the view is on screen. The
//! session runs when the window gains focus and pauses when it loses it.

use bevy::prelude::*;
use bevy::window::WindowFocused;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Running,
    Paused,
}

#[derive(Resource, Debug, Default)]
pub struct TrackingSession {
    state: TrackingState,
}

impl TrackingSession {
    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TrackingState::Running
    }

    pub fn run(&mut self) {
        if self.state != TrackingState::Running {
            info!("Tracking session resumed");
        }
        self.state = TrackingState::Running;
    }

    pub fn pause(&mut self) {
        if self.state != TrackingState::Paused {
            info!("Tracking session paused");
        }
        self.state = TrackingState::Paused;
    }
}

pub struct TrackingPlugin;

impl Plugin for TrackingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackingSession>()
            .add_event::<WindowFocused>()
            .add_systems(PreUpdate, follow_window_focus);
    }
}

/// Run the session while the window has focus
pub fn follow_window_focus(
    mut focus_events: EventReader<WindowFocused>,
    mut tracking: ResMut<TrackingSession>,
) {
    for event in focus_events.read() {
        if event.focused {
            tracking.run();
        } else {
            tracking.pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_drives_tracking_state() {
        let mut app = App::new();
        app.add_plugins(TrackingPlugin);
        let window = app.world_mut().spawn_empty().id();

        assert!(app.world().resource::<TrackingSession>().is_running());

        app.world_mut().send_event(WindowFocused {
            window,
            focused: false,
        });
        app.update();
        assert_eq!(
            app.world().resource::<TrackingSession>().state(),
            TrackingState::Paused
        );

        app.world_mut().send_event(WindowFocused {
            window,
            focused: true,
        });
        app.update();
        assert!(app.world().resource::<TrackingSession>().is_running());
    }
}
