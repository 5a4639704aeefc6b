//! Drawable shape definitions.
//!
//! A shape builds its geometry in local space: it moves the surface transform
//! to `position + origin`, rotates about that pivot and then emits a path
//! relative to the pivot. Painting is left to the caller
//! ([`Renderer::draw`](super::Renderer::draw)), which brackets the render in a
//! save/restore so the transform never leaks.

use super::point::Point;
use super::surface::Surface;

/// Fill/stroke enablement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub fill: bool,
    pub stroke: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: true,
            stroke: true,
        }
    }
}

/// Anything the [`Renderer`](super::Renderer) can draw.
pub trait Render {
    /// Canvas position of the shape.
    fn position(&self) -> Point;

    /// Emits the shape's path onto `surface`, mutating its transform as
    /// needed. `paint` carries the renderer's current enablement.
    fn render<S: Surface>(&self, surface: &mut S, paint: Paint) -> Result<(), S::Error>;

    /// Paint applied to the emitted path. Defaults to the renderer's own.
    fn paint(&self, ambient: Paint) -> Paint {
        ambient
    }
}

/// Translates to the pivot and rotates about it.
fn enter_local_space<S: Surface>(surface: &mut S, position: Point, origin: Point, rotation: f64) {
    surface.translate(position.x + origin.x, position.y + origin.y);
    surface.rotate(rotation);
}

/// Axis-aligned box in local space, rotated about `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Top-left corner before rotation
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation in radians, clockwise
    pub rotation: f64,
    /// Pivot relative to `position`. Set to the box centre on construction
    /// and left alone by later field edits (see [`Rectangle::set_size`]).
    pub origin: Point,
}

impl Rectangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            rotation: 0.0,
            origin: Point::new(width / 2.0, height / 2.0),
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Resizes the box and moves the pivot back to its centre.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.origin = Point::new(width / 2.0, height / 2.0);
    }
}

impl Render for Rectangle {
    fn position(&self) -> Point {
        self.position
    }

    fn render<S: Surface>(&self, surface: &mut S, _paint: Paint) -> Result<(), S::Error> {
        surface.begin_path();
        enter_local_space(surface, self.position, self.origin, self.rotation);
        surface.rect(-self.origin.x, -self.origin.y, self.width, self.height);
        Ok(())
    }
}

/// Polyline through local-space vertices, optionally closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub position: Point,
    /// Vertices relative to `position`, in edge order
    pub points: Vec<Point>,
    /// Rotation in radians, clockwise
    pub rotation: f64,
    /// Pivot relative to `position`
    pub origin: Point,
    /// Fill override; `None` follows the renderer
    pub fill: Option<bool>,
    /// Stroke override; `None` follows the renderer
    pub stroke: Option<bool>,
    /// Join the last vertex back to the first
    pub close_path: bool,
}

impl Polygon {
    pub fn new(position: Point, points: Vec<Point>) -> Self {
        Self {
            position,
            points,
            rotation: 0.0,
            origin: Point::ORIGIN,
            fill: None,
            stroke: None,
            close_path: true,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: bool) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Leaves the path open (no closing edge).
    pub fn open(mut self) -> Self {
        self.close_path = false;
        self
    }
}

impl Render for Polygon {
    fn position(&self) -> Point {
        self.position
    }

    fn render<S: Surface>(&self, surface: &mut S, _paint: Paint) -> Result<(), S::Error> {
        surface.begin_path();
        enter_local_space(surface, self.position, self.origin, self.rotation);
        for point in &self.points {
            surface.line_to(point.x - self.origin.x, point.y - self.origin.y);
        }
        if self.close_path {
            surface.close_path();
        }
        Ok(())
    }

    fn paint(&self, ambient: Paint) -> Paint {
        Paint {
            fill: self.fill.unwrap_or(ambient.fill),
            stroke: self.stroke.unwrap_or(ambient.stroke),
        }
    }
}

/// The built-in drawable shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl Render for Shape {
    fn position(&self) -> Point {
        match self {
            Shape::Rectangle(rect) => rect.position(),
            Shape::Polygon(polygon) => polygon.position(),
        }
    }

    fn render<S: Surface>(&self, surface: &mut S, paint: Paint) -> Result<(), S::Error> {
        match self {
            Shape::Rectangle(rect) => rect.render(surface, paint),
            Shape::Polygon(polygon) => polygon.render(surface, paint),
        }
    }

    fn paint(&self, ambient: Paint) -> Paint {
        match self {
            Shape::Rectangle(rect) => rect.paint(ambient),
            Shape::Polygon(polygon) => polygon.paint(ambient),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
