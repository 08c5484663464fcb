//! Interaction surface.
//!
//! Translates raw user input (pointer clicks and hovers, key presses, the
//! toggle button, the search field) into [`Command`]s for the camera
//! director. Keyboard input is routed by [`InputFocus`], so the pause hotkey
//! is never seen while the search field is being typed into.

mod dispatcher;

pub use dispatcher::{Command, InputDispatcher, InputEvent, InputFocus, KeyInput};
