//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/orbitgraph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.orbitgraph.toml`
//! 4. Environment variables: `ORBITGRAPH_*`, nested with `__`
//!    (e.g. `ORBITGRAPH_ORBIT__RADIUS=900`)
//!
//! # Example
//!
//! ```toml
//! [graph]
//! source = "datasets/blocks.json"
//!
//! [orbit]
//! radius = 1300.0
//! elevation = 0.0
//!
//! [focus]
//! standoff = 40.0
//! transition_ms = 3000.0
//!
//! [controls]
//! toggle_key = "f"
//! ```

use std::f32::consts::{PI, TAU};
use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::camera::{DirectorSettings, OrbitState};
use crate::error::AppError;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".orbitgraph.toml";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub orbit: OrbitConfig,
    pub focus: FocusConfig,
    pub controls: ControlsConfig,
    pub window: WindowConfig,
}

/// Where graph data comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Path to the JSON graph file, used when no path is given on the command line.
    pub source: PathBuf,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("datasets/blocks.json"),
        }
    }
}

/// Idle orbit parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Distance from the vertical axis through the origin.
    pub radius: f32,
    /// Constant camera height.
    pub elevation: f32,
    /// Radians advanced per frame.
    pub speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 1300.0,
            elevation: 0.0,
            speed: PI / 40_000.0,
        }
    }
}

/// Focus move parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Extra distance beyond a node at which the camera parks.
    pub standoff: f32,
    /// Duration of focus and return moves in milliseconds.
    pub transition_ms: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            standoff: 40.0,
            transition_ms: 3000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Pause/resume hotkey, matched case-insensitively.
    pub toggle_key: char,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { toggle_key: 'f' }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OrbitGraph".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, AppError> {
        let config: Config = Self::figment().extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// The layered provider stack behind [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            .merge(Env::prefixed("ORBITGRAPH_").split("__"))
    }

    /// Reject values the camera cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        fn invalid(field: &'static str, reason: &str) -> AppError {
            AppError::InvalidConfig {
                field,
                reason: reason.to_string(),
            }
        }

        if !(self.orbit.radius.is_finite() && self.orbit.radius > 0.0) {
            return Err(invalid("orbit.radius", "must be a positive number"));
        }
        if !self.orbit.elevation.is_finite() {
            return Err(invalid("orbit.elevation", "must be finite"));
        }
        if !(self.orbit.speed > 0.0 && self.orbit.speed < TAU) {
            return Err(invalid("orbit.speed", "must be between 0 and 2π radians per tick"));
        }
        if !(self.focus.standoff.is_finite() && self.focus.standoff > 0.0) {
            return Err(invalid("focus.standoff", "must be a positive number"));
        }
        if !(self.focus.transition_ms.is_finite() && self.focus.transition_ms >= 0.0) {
            return Err(invalid("focus.transition_ms", "must not be negative"));
        }
        if self.controls.toggle_key.is_whitespace() || self.controls.toggle_key.is_control() {
            return Err(invalid("controls.toggle_key", "must be a printable character"));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(invalid("window", "dimensions must be positive"));
        }
        Ok(())
    }

    pub fn orbit_state(&self) -> OrbitState {
        OrbitState::new(self.orbit.radius, self.orbit.elevation, self.orbit.speed)
    }

    pub fn director_settings(&self) -> DirectorSettings {
        DirectorSettings {
            standoff: self.focus.standoff,
            transition_ms: self.focus.transition_ms,
        }
    }

    /// User config path: ~/.config/orbitgraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("orbitgraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("orbitgraph").join("config.toml"))
            .unwrap_or_default()
    }
}
