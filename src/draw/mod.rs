//! Drawing layer over an immediate-mode 2D surface (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Renderer`]: retained fill/stroke state plus line, ellipse, rect and text helpers
//! - [`Shape`]: rotatable [`Rectangle`] and [`Polygon`] drawn through [`Renderer::draw`]
//! - [`Surface`]: the host rasterizer, implemented by [`CairoSurface`] and [`RecordingSurface`]
//! - [`ColorSpec`]: gray, RGB or token color arguments

pub mod cairo_surface;
pub mod color;
pub mod font;
pub mod point;
pub mod recording;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::{CairoSurface, SurfaceError, write_png};
pub use color::{Color, ColorSpec};
pub use font::FontDescriptor;
pub use point::Point;
pub use recording::RecordingSurface;
pub use render::{Baseline, Renderer};
pub use shape::{Paint, Polygon, Rectangle, Render, Shape};
pub use surface::{SavedFrame, Surface, Transform};

// Palette constants for callers building colors directly
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
