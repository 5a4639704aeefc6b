//! Drawing helpers and rotatable shapes over an immediate-mode 2D surface.
//!
//! [`draw::Renderer`] wraps a [`draw::Surface`] (Cairo in practice) with
//! retained fill/stroke state and a `draw` entry point for shapes that carry
//! their own position and rotation. [`config`] loads the defaults the
//! `easel` binary renders with.

pub mod config;
pub mod draw;

pub use config::Config;
