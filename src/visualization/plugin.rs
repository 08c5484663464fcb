//! Visualization plugin for Bevy.

use bevy::ecs::schedule::SystemConfigs;
use bevy::prelude::*;

use super::resources::{DirectorRes, GraphRes, InputRes};
use super::setup::setup_scene;
use super::systems;
use crate::camera::CameraDirector;
use crate::config::Config;
use crate::interaction::InputDispatcher;
use crate::models::GraphData;

/// Plugin that renders a graph under an orbiting, click-to-focus camera.
pub struct VisualizationPlugin {
    /// Graph to display.
    pub graph: GraphData,
    /// Resolved configuration.
    pub config: Config,
}

impl VisualizationPlugin {
    pub fn new(graph: GraphData, config: Config) -> Self {
        Self { graph, config }
    }
}

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        let director = CameraDirector::new(
            self.config.orbit_state(),
            self.config.director_settings(),
        );

        app.insert_resource(DirectorRes(director))
            .insert_resource(InputRes(InputDispatcher::new(
                self.config.controls.toggle_key,
            )))
            .insert_resource(GraphRes(self.graph.clone()))
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    input_systems(),
                    systems::camera_director_system,
                    (
                        systems::update_toggle_label_system,
                        systems::update_button_hover_system,
                        systems::update_search_field_system,
                        systems::update_node_highlight_system,
                        systems::update_hover_label_system,
                    ),
                )
                    .chain(),
            );
    }
}

/// Input handling in a fixed order: button presses and clicks settle input
/// focus before the frame's key presses are routed.
fn input_systems() -> SystemConfigs {
    (
        systems::control_button_system,
        systems::pointer_input_system,
        systems::keyboard_input_system,
    )
        .chain()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FocusState;
    use crate::interaction::InputFocus;
    use crate::visualization::components::SearchField;
    use bevy::input::keyboard::{Key, KeyboardInput};
    use bevy::input::ButtonState;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<KeyboardInput>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(DirectorRes(CameraDirector::default()))
            .insert_resource(InputRes(InputDispatcher::default()))
            .insert_resource(GraphRes(GraphData::default()))
            .add_systems(Update, input_systems());
        app
    }

    fn press(app: &mut App, c: char) {
        app.world_mut().send_event(KeyboardInput {
            key_code: KeyCode::KeyF,
            logical_key: Key::Character(c.to_string().into()),
            state: ButtonState::Pressed,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
    }

    #[test]
    fn test_search_click_and_key_in_same_frame_types_into_field() {
        let mut app = app();
        app.world_mut().spawn((SearchField, Interaction::Pressed));
        press(&mut app, 'f');
        app.update();

        let input = &app.world().resource::<InputRes>().0;
        assert_eq!(input.focus(), InputFocus::SearchField);
        assert_eq!(input.query(), "f");
        assert_eq!(
            app.world().resource::<DirectorRes>().0.state(),
            FocusState::Orbiting
        );
    }

    #[test]
    fn test_hotkey_toggles_without_search_focus() {
        let mut app = app();
        press(&mut app, 'F');
        app.update();

        assert_eq!(
            app.world().resource::<DirectorRes>().0.state(),
            FocusState::PausedIdle
        );
    }
}
