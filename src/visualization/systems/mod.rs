//! ECS systems for graph visualization.
//!
//! Systems are functions that operate on components and resources each frame.

pub mod camera;
pub mod interaction;
pub mod ui;

pub use camera::camera_director_system;
pub use interaction::{control_button_system, keyboard_input_system, pointer_input_system};
pub use ui::{
    update_button_hover_system, update_hover_label_system, update_node_highlight_system,
    update_search_field_system, update_toggle_label_system,
};
