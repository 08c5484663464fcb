//! orbitgraph - 3D graph viewer with an idle orbit camera
//!
//! The camera slowly circles the scene until a node is clicked or searched
//! for, then flies to it; resuming flies back and the orbit carries on from
//! where it left off.

pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod models;
pub mod visualization;
