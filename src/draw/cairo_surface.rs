//! [`Surface`] implementation over a Cairo context, with Pango text.
//!
//! Cairo differs from a 2D canvas in a few places this adapter smooths over:
//! - `fill`/`stroke` consume the path in Cairo; here the path is kept.
//! - Cairo has a single source; fill and stroke colors are kept separately
//!   and installed right before each paint.
//! - `clear_rect`, text and explicit-path paints leave the current path alone.
//! - `restore` without a matching `save` is ignored instead of putting the
//!   context into an error state.

use super::color::{BLACK, Color, ColorSpec};
use super::surface::{Surface, Transform};
use log::{debug, warn};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors reported by [`CairoSurface`].
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to create output file: {0}")]
    File(#[from] std::io::Error),
}

/// Style state Cairo's own save/restore does not cover.
#[derive(Clone)]
struct Style {
    fill: Color,
    stroke: Color,
    font: pango::FontDescription,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: BLACK,
            stroke: BLACK,
            font: pango::FontDescription::from_string("Sans 10"),
        }
    }
}

/// Canvas-style surface drawing into a `cairo::Context`.
pub struct CairoSurface {
    ctx: cairo::Context,
    width: f64,
    height: f64,
    style: Style,
    saved: Vec<Style>,
}

impl CairoSurface {
    /// Wraps an existing context whose target is `width` x `height` device units.
    pub fn new(ctx: cairo::Context, width: f64, height: f64) -> Self {
        ctx.set_line_width(1.0);
        Self {
            ctx,
            width,
            height,
            style: Style::default(),
            saved: Vec::new(),
        }
    }

    /// Creates a surface drawing into `image`.
    pub fn for_image(image: &cairo::ImageSurface) -> Result<Self, SurfaceError> {
        let ctx = cairo::Context::new(image)?;
        Ok(Self::new(ctx, image.width() as f64, image.height() as f64))
    }

    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    /// Runs `draw` on an empty path, then puts the current path back.
    fn isolated<F>(&self, draw: F) -> Result<(), SurfaceError>
    where
        F: FnOnce(&cairo::Context) -> Result<(), cairo::Error>,
    {
        let ambient = self.ctx.copy_path()?;
        self.ctx.new_path();
        let result = draw(&self.ctx);
        self.ctx.new_path();
        self.ctx.append_path(&ambient);
        result.map_err(SurfaceError::from)
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn layout(&self, text: &str) -> (pango::Layout, f64) {
        let layout = pangocairo::functions::create_layout(&self.ctx);
        layout.set_font_description(Some(&self.style.font));
        layout.set_text(text);
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        (layout, baseline)
    }
}

/// Writes `image` to `path` as PNG.
pub fn write_png(image: &cairo::ImageSurface, path: &Path) -> Result<(), SurfaceError> {
    image.flush();
    let mut file = File::create(path)?;
    image.write_to_png(&mut file)?;
    debug!("Wrote {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn resolve(spec: &ColorSpec, kind: &str) -> Option<Color> {
    let color = spec.to_color();
    if color.is_none() {
        warn!("Ignoring unrecognized {} style '{}'", kind, spec);
    }
    color
}

impl Surface for CairoSurface {
    type Path = cairo::Path;
    type Error = SurfaceError;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rectangle(x, y, width, height);
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        // A zero scale would leave the context with a singular matrix. The
        // arc collapses onto an axis, so only its start point joins the path.
        if radius_x == 0.0 || radius_y == 0.0 {
            let (sin_r, cos_r) = rotation.sin_cos();
            let local_x = radius_x * start_angle.cos();
            let local_y = radius_y * start_angle.sin();
            self.ctx.line_to(
                x + local_x * cos_r - local_y * sin_r,
                y + local_x * sin_r + local_y * cos_r,
            );
            return;
        }

        let matrix = self.ctx.matrix();
        self.ctx.translate(x, y);
        self.ctx.rotate(rotation);
        self.ctx.scale(radius_x, radius_y);
        self.ctx.arc(0.0, 0.0, 1.0, start_angle, end_angle);
        self.ctx.set_matrix(matrix);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn copy_path(&self) -> Result<Self::Path, Self::Error> {
        Ok(self.ctx.copy_path()?)
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ctx.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle);
    }

    fn set_transform(&mut self, transform: Transform) {
        self.ctx.set_matrix(cairo::Matrix::new(
            transform.xx,
            transform.yx,
            transform.xy,
            transform.yy,
            transform.x0,
            transform.y0,
        ));
    }

    fn transform(&self) -> Transform {
        let m = self.ctx.matrix();
        Transform::new(m.xx(), m.yx(), m.xy(), m.yy(), m.x0(), m.y0())
    }

    fn set_fill_style(&mut self, color: &ColorSpec) {
        if let Some(color) = resolve(color, "fill") {
            self.style.fill = color;
        }
    }

    fn set_stroke_style(&mut self, color: &ColorSpec) {
        if let Some(color) = resolve(color, "stroke") {
            self.style.stroke = color;
        }
    }

    fn set_line_width(&mut self, width: f64) {
        // Same rule as a 2D canvas: zero, negative and non-finite widths are ignored
        if width.is_finite() && width > 0.0 {
            self.ctx.set_line_width(width);
        } else {
            debug!("Ignoring line width {}", width);
        }
    }

    fn set_font(&mut self, font: &str) {
        self.style.font = pango::FontDescription::from_string(font);
    }

    fn fill(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error> {
        self.set_source(self.style.fill);
        match path {
            Some(path) => self.isolated(|ctx| {
                ctx.append_path(path);
                ctx.fill()
            }),
            None => Ok(self.ctx.fill_preserve()?),
        }
    }

    fn stroke(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error> {
        self.set_source(self.style.stroke);
        match path {
            Some(path) => self.isolated(|ctx| {
                ctx.append_path(path);
                ctx.stroke()
            }),
            None => Ok(self.ctx.stroke_preserve()?),
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error> {
        self.isolated(|ctx| {
            ctx.save()?;
            ctx.set_operator(cairo::Operator::Clear);
            ctx.rectangle(x, y, width, height);
            let cleared = ctx.fill();
            ctx.restore()?;
            cleared
        })
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        let (layout, baseline) = self.layout(text);
        self.set_source(self.style.fill);
        self.isolated(|ctx| {
            ctx.move_to(x, y - baseline);
            pangocairo::functions::show_layout(ctx, &layout);
            ctx.status()
        })
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        let (layout, baseline) = self.layout(text);
        self.set_source(self.style.stroke);
        self.isolated(|ctx| {
            ctx.move_to(x, y - baseline);
            pangocairo::functions::layout_path(ctx, &layout);
            ctx.stroke()
        })
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        self.ctx.save()?;
        self.saved.push(self.style.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        match self.saved.pop() {
            Some(style) => {
                self.style = style;
                self.ctx.restore()?;
            }
            None => warn!("restore() without matching save(); ignoring"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLUE;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn surface(width: i32, height: i32) -> (cairo::ImageSurface, CairoSurface) {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let surface = CairoSurface::for_image(&image).unwrap();
        (image, surface)
    }

    #[test]
    fn size_matches_image() {
        let (_image, surface) = surface(64, 32);
        assert_eq!(surface.size(), (64.0, 32.0));
    }

    #[test]
    fn paint_keeps_current_path() {
        let (_image, mut surface) = surface(20, 20);
        surface.rect(2.0, 2.0, 5.0, 5.0);
        surface.fill(None).unwrap();
        surface.stroke(None).unwrap();
        assert!(surface.context().has_current_point().unwrap());
    }

    #[test]
    fn clear_rect_leaves_current_path_alone() {
        let (_image, mut surface) = surface(20, 20);
        surface.move_to(3.0, 4.0);
        surface.line_to(9.0, 4.0);
        surface.clear_rect(0.0, 0.0, 20.0, 20.0).unwrap();
        assert_eq!(surface.context().current_point().unwrap(), (9.0, 4.0));
    }

    #[test]
    fn transform_round_trips_through_cairo_matrix() {
        let (_image, mut surface) = surface(10, 10);
        surface.translate(3.0, 4.0);
        surface.rotate(FRAC_PI_2);
        let expected = Transform::IDENTITY.translate(3.0, 4.0).rotate(FRAC_PI_2);
        let actual = surface.transform();
        for (a, e) in [
            (actual.xx, expected.xx),
            (actual.yx, expected.yx),
            (actual.xy, expected.xy),
            (actual.yy, expected.yy),
            (actual.x0, expected.x0),
            (actual.y0, expected.y0),
        ] {
            assert!((a - e).abs() < 1e-9);
        }

        surface.set_transform(Transform::IDENTITY);
        assert_eq!(surface.transform(), Transform::IDENTITY);
    }

    #[test]
    fn restore_brings_back_styles_and_ignores_underflow() {
        let (_image, mut surface) = surface(10, 10);
        surface.save().unwrap();
        surface.set_fill_style(&ColorSpec::Rgb(255.0, 0.0, 0.0));
        surface.set_line_width(6.0);
        surface.restore().unwrap();

        assert_eq!(surface.style.fill, BLACK);
        assert_eq!(surface.context().line_width(), 1.0);
        assert!(surface.restore().is_ok());
        assert!(surface.context().status().is_ok());
    }

    #[test]
    fn unknown_tokens_and_invalid_widths_are_ignored() {
        let (_image, mut surface) = surface(10, 10);
        surface.set_stroke_style(&ColorSpec::Token("#00f".into()));
        surface.set_stroke_style(&ColorSpec::Token("nonsense".into()));
        assert_eq!(surface.style.stroke, BLUE);

        surface.set_line_width(0.0);
        surface.set_line_width(f64::NAN);
        assert_eq!(surface.context().line_width(), 1.0);
    }

    #[test]
    fn zero_radius_ellipse_adds_only_its_start_point() {
        let (_image, mut surface) = surface(10, 10);
        surface.ellipse(5.0, 5.0, 0.0, 3.0, 0.0, FRAC_PI_2, PI);
        let (x, y) = surface.context().current_point().unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 8.0).abs() < 1e-9);
        assert!(surface.context().status().is_ok());

        // Joined to an open subpath by a straight segment, rotation applied
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.ellipse(5.0, 5.0, 2.0, 0.0, FRAC_PI_2, 0.0, PI);
        let (x, y) = surface.context().current_point().unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 7.0).abs() < 1e-9);
    }
}
