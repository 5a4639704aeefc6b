//! Host drawing surface abstraction.
//!
//! [`Surface`] mirrors an HTML5-canvas style immediate-mode context: a current
//! path, a current transform, retained paint styles and a save/restore stack.
//! All geometry the [`Renderer`](super::Renderer) and shapes produce goes
//! through this trait, so the same drawing code runs against Cairo
//! ([`CairoSurface`](super::CairoSurface)) or an in-memory recorder
//! ([`RecordingSurface`](super::RecordingSurface)).

use super::color::ColorSpec;
use std::ops::{Deref, DerefMut};

/// Affine transform in canvas/Cairo layout.
///
/// Maps `(x, y)` to `(xx * x + xy * y + x0, yx * x + yy * y + y0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        }
    }

    /// Returns this transform with a translation applied in its local space.
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        Self {
            x0: self.x0 + self.xx * tx + self.xy * ty,
            y0: self.y0 + self.yx * tx + self.yy * ty,
            ..self
        }
    }

    /// Returns this transform with a rotation (radians, clockwise in
    /// y-down space) applied in its local space.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            xx: self.xx * cos + self.xy * sin,
            yx: self.yx * cos + self.yy * sin,
            xy: self.xy * cos - self.xx * sin,
            yy: self.yy * cos - self.yx * sin,
            ..self
        }
    }

    /// Maps a local-space point to device space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.xx * x + self.xy * y + self.x0,
            self.yx * x + self.yy * y + self.y0,
        )
    }
}

/// An immediate-mode 2D rasterizer.
///
/// Path construction and style setters never fail; painting, clearing and
/// the state stack report the host's own error type unchanged.
pub trait Surface {
    /// Detached path object that can be painted without touching the
    /// current path.
    type Path;
    type Error: std::error::Error + 'static;

    /// Width and height of the drawable area in device units.
    fn size(&self) -> (f64, f64);

    // Path construction

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    /// Adds a line to `(x, y)`; on an empty path this starts the subpath.
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );
    fn close_path(&mut self);
    /// Snapshots the current path.
    fn copy_path(&self) -> Result<Self::Path, Self::Error>;

    // Transform

    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_transform(&mut self, transform: Transform);
    fn transform(&self) -> Transform;

    // Style

    fn set_fill_style(&mut self, color: &ColorSpec);
    fn set_stroke_style(&mut self, color: &ColorSpec);
    /// Zero, negative and non-finite widths are ignored.
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    // Paint

    /// Fills `path`, or the current path when `None`. The current path is
    /// kept either way.
    fn fill(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error>;
    /// Strokes `path`, or the current path when `None`. The current path is
    /// kept either way.
    fn stroke(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error>;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;
    /// Draws text whose first baseline starts at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;

    // State stack

    /// Pushes transform and style state.
    fn save(&mut self) -> Result<(), Self::Error>;
    /// Pops state pushed by [`save`](Surface::save). Popping an empty stack
    /// is a no-op.
    fn restore(&mut self) -> Result<(), Self::Error>;
}

/// Scoped `save`/`restore` bracket around a surface.
///
/// [`SavedFrame::exit`] restores and reports the result. If the frame is
/// dropped without `exit` (early return or unwinding) the state is still
/// restored and a failure is only logged.
pub struct SavedFrame<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    active: bool,
}

impl<'a, S: Surface + ?Sized> SavedFrame<'a, S> {
    pub fn enter(surface: &'a mut S) -> Result<Self, S::Error> {
        surface.save()?;
        Ok(Self {
            surface,
            active: true,
        })
    }

    pub fn exit(mut self) -> Result<(), S::Error> {
        self.active = false;
        self.surface.restore()
    }
}

impl<S: Surface + ?Sized> Deref for SavedFrame<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedFrame<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedFrame<'_, S> {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = self.surface.restore() {
                log::warn!("Failed to restore surface state: {}", err);
            }
        }
    }
}
