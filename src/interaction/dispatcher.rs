//! Focus-aware input dispatcher.

use crate::camera::CameraDirector;
use crate::models::GraphData;

/// Which control receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    /// The 3D viewport: hotkeys are live.
    #[default]
    Viewport,
    /// The search field: keys edit the query.
    SearchField,
}

/// A key press, already decoded from the windowing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Escape,
}

/// Raw input delivered by the renderer adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    /// Primary click in the viewport, with the node under the pointer.
    Click(Option<String>),
    /// Pointer moved onto (or off) a node.
    Hover(Option<String>),
    /// The pause/resume button was pressed.
    ToggleButton,
    /// The search field was clicked.
    SearchFieldClicked,
}

/// Camera director request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Focus the node with this id.
    Select(String),
    /// Pause or resume the orbit.
    Toggle,
    /// Update the hovered node.
    Hover(Option<String>),
}

impl Command {
    /// Execute against the director. Selections of ids missing from `graph`
    /// are dropped.
    pub fn apply(self, director: &mut CameraDirector, graph: &GraphData, now_ms: f64) {
        match self {
            Command::Select(id) => match graph.get(&id) {
                Some(node) => director.select(&node.id, node.position(), now_ms),
                None => tracing::debug!("Ignoring selection of unknown node {}", id),
            },
            Command::Toggle => director.toggle(now_ms),
            Command::Hover(id) => director.set_hover(id),
        }
    }
}

/// Routes input by focus and owns the search query buffer.
#[derive(Clone, Debug)]
pub struct InputDispatcher {
    focus: InputFocus,
    query: String,
    toggle_key: char,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new('f')
    }
}

impl InputDispatcher {
    /// Create a dispatcher with the given pause/resume hotkey.
    pub fn new(toggle_key: char) -> Self {
        Self {
            focus: InputFocus::Viewport,
            query: String::new(),
            toggle_key,
        }
    }

    pub fn focus(&self) -> InputFocus {
        self.focus
    }

    /// Current contents of the search field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Translate one input event into at most one director command.
    pub fn handle(&mut self, event: InputEvent, graph: &GraphData) -> Option<Command> {
        match event {
            InputEvent::Key(key) => match self.focus {
                InputFocus::Viewport => self.handle_viewport_key(key),
                InputFocus::SearchField => self.handle_search_key(key, graph),
            },
            InputEvent::Click(node) => {
                self.set_focus(InputFocus::Viewport);
                node.map(Command::Select)
            }
            InputEvent::Hover(node) => Some(Command::Hover(node)),
            InputEvent::ToggleButton => {
                self.set_focus(InputFocus::Viewport);
                Some(Command::Toggle)
            }
            InputEvent::SearchFieldClicked => {
                self.set_focus(InputFocus::SearchField);
                None
            }
        }
    }

    fn handle_viewport_key(&mut self, key: KeyInput) -> Option<Command> {
        match key {
            KeyInput::Char(c) if c.to_lowercase().eq(self.toggle_key.to_lowercase()) => {
                Some(Command::Toggle)
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyInput, graph: &GraphData) -> Option<Command> {
        match key {
            KeyInput::Char(c) => {
                if !c.is_control() {
                    self.query.push(c);
                }
                None
            }
            KeyInput::Backspace => {
                self.query.pop();
                None
            }
            KeyInput::Enter => self.submit(graph),
            KeyInput::Escape => {
                self.set_focus(InputFocus::Viewport);
                None
            }
        }
    }

    /// Submit the query. Misses are dropped silently; the field is cleared
    /// either way unless the query was blank.
    fn submit(&mut self, graph: &GraphData) -> Option<Command> {
        if self.query.trim().is_empty() {
            return None;
        }

        let query = std::mem::take(&mut self.query);
        match graph.find(&query) {
            Some(node) => Some(Command::Select(node.id.clone())),
            None => {
                tracing::debug!("No node matches search {:?}", query.trim());
                None
            }
        }
    }

    fn set_focus(&mut self, focus: InputFocus) {
        if self.focus != focus {
            tracing::trace!("Input focus {:?} -> {:?}", self.focus, focus);
        }
        self.focus = focus;
    }
}
