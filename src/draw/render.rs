//! Immediate-mode drawing helpers with retained fill/stroke state.

use super::color::ColorSpec;
use super::shape::{Paint, Render};
use super::surface::{SavedFrame, Surface, Transform};
use log::{debug, trace};
use std::f64::consts::PI;

/// Style restored by [`Renderer::clear`].
#[derive(Clone, Debug, PartialEq)]
pub struct Baseline {
    /// Fill and stroke color
    pub color: ColorSpec,
    /// Stroke width in device units
    pub line_width: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            color: ColorSpec::BLACK,
            line_width: 1.0,
        }
    }
}

/// Drawing front end over a single [`Surface`].
///
/// Holds whether fill and stroke are enabled; both start enabled and stay as
/// set until toggled or until [`clear`](Renderer::clear). Primitive helpers
/// paint immediately. Shapes go through [`draw`](Renderer::draw).
///
/// Errors from the surface are returned unchanged.
pub struct Renderer<S: Surface> {
    surface: S,
    paint: Paint,
    baseline: Baseline,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_baseline(surface, Baseline::default())
    }

    pub fn with_baseline(surface: S, baseline: Baseline) -> Self {
        Self {
            surface,
            paint: Paint::default(),
            baseline,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current fill/stroke enablement.
    pub fn paint_state(&self) -> Paint {
        self.paint
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Fills then strokes `path` (or the current path), as enabled.
    ///
    /// Stroke always lands on top of fill.
    pub fn paint(&mut self, path: Option<&S::Path>) -> Result<(), S::Error> {
        self.paint_with(self.paint, path)
    }

    fn paint_with(&mut self, paint: Paint, path: Option<&S::Path>) -> Result<(), S::Error> {
        trace!("paint fill={} stroke={}", paint.fill, paint.stroke);
        if paint.fill {
            self.surface.fill(path)?;
        }
        if paint.stroke {
            self.surface.stroke(path)?;
        }
        Ok(())
    }

    /// Enables fill, optionally changing the fill style.
    ///
    /// `None` re-enables fill and keeps the previous style.
    pub fn fill(&mut self, color: Option<ColorSpec>) {
        if let Some(color) = color {
            self.surface.set_fill_style(&color);
        }
        self.paint.fill = true;
    }

    /// Enables stroke, optionally changing the stroke style.
    ///
    /// `None` re-enables stroke and keeps the previous style.
    pub fn stroke(&mut self, color: Option<ColorSpec>) {
        if let Some(color) = color {
            self.surface.set_stroke_style(&color);
        }
        self.paint.stroke = true;
    }

    /// Disables fill. The fill style is kept for a later [`fill`](Renderer::fill).
    pub fn no_fill(&mut self) {
        self.paint.fill = false;
    }

    /// Disables stroke. The stroke style is kept for a later [`stroke`](Renderer::stroke).
    pub fn no_stroke(&mut self) {
        self.paint.stroke = false;
    }

    /// Draws a segment from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), S::Error> {
        self.surface.begin_path();
        self.surface.move_to(x1, y1);
        self.surface.line_to(x2, y2);
        self.surface.close_path();
        self.paint(None)
    }

    /// Draws a full ellipse centred on `(x, y)`.
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
    ) -> Result<(), S::Error> {
        self.surface.begin_path();
        self.surface.ellipse(x, y, radius_x, radius_y, 0.0, 0.0, PI * 2.0);
        self.surface.close_path();
        self.paint(None)
    }

    /// Draws an axis-aligned rectangle with its top-left corner at `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), S::Error> {
        self.surface.begin_path();
        self.surface.rect(x, y, width, height);
        self.surface.close_path();
        self.paint(None)
    }

    /// Wipes the surface and returns to the baseline style.
    ///
    /// Resets the transform, clears every pixel, sets fill and stroke to the
    /// baseline color, sets the baseline line width and enables both fill
    /// and stroke.
    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.surface.set_transform(Transform::IDENTITY);
        let (width, height) = self.surface.size();
        debug!("Clearing {}x{} surface", width, height);
        self.surface.clear_rect(0.0, 0.0, width, height)?;

        let color = self.baseline.color.clone();
        self.fill(Some(color.clone()));
        self.stroke(Some(color));
        self.stroke_width(self.baseline.line_width);
        Ok(())
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.surface.translate(x, y);
    }

    pub fn reset_transform(&mut self) {
        self.surface.set_transform(Transform::IDENTITY);
    }

    pub fn stroke_width(&mut self, width: f64) {
        self.surface.set_line_width(width);
    }

    /// Sets the font used by [`text`](Renderer::text). The string format is
    /// whatever the surface understands (Pango descriptions for Cairo).
    pub fn font(&mut self, font: &str) {
        self.surface.set_font(font);
    }

    /// Draws filled text, then outlined text, as enabled.
    pub fn text(&mut self, text: &str, x: f64, y: f64) -> Result<(), S::Error> {
        if self.paint.fill {
            self.surface.fill_text(text, x, y)?;
        }
        if self.paint.stroke {
            self.surface.stroke_text(text, x, y)?;
        }
        Ok(())
    }

    /// Renders `shape` inside a save/restore frame, then paints its path.
    ///
    /// The surface's transform and style are restored even when `render`
    /// fails, so nothing a shape does leaks into later calls. The path the
    /// shape built survives the restore and is painted with
    /// [`Render::paint`] applied to the current enablement.
    pub fn draw<T: Render>(&mut self, shape: &T) -> Result<(), S::Error> {
        let ambient = self.paint;
        trace!("Drawing shape at {:?}", shape.position());

        let mut frame = SavedFrame::enter(&mut self.surface)?;
        let rendered = shape.render(&mut *frame, ambient);
        let restored = frame.exit();
        rendered?;
        restored?;

        self.paint_with(shape.paint(ambient), None)
    }
}
