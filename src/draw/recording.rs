//! In-memory surface that records every call.
//!
//! Models the canvas state machine (current path, transform, styles and the
//! save/restore stack) without rasterizing anything, so call order and state
//! round-trips can be asserted directly.

use super::color::ColorSpec;
use super::surface::{Surface, Transform};
use thiserror::Error;

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Ellipse {
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    Translate(f64, f64),
    Rotate(f64),
    SetTransform(Transform),
    /// Style as formatted by [`ColorSpec`]'s `Display`
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetFont(String),
    /// `explicit` is true when a detached path was painted
    Fill { explicit: bool },
    Stroke { explicit: bool },
    ClearRect(f64, f64, f64, f64),
    FillText(String, f64, f64),
    StrokeText(String, f64, f64),
    Save,
    Restore,
}

/// Path element in device space (transform already applied).
#[derive(Clone, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Ellipse {
        center: (f64, f64),
        radius_x: f64,
        radius_y: f64,
    },
    Close,
}

/// Error injected with [`RecordingSurface::fail_on`].
#[derive(Debug, Error, PartialEq)]
pub enum RecordingError {
    #[error("injected failure in {0}")]
    Injected(&'static str),
}

/// Transform and style state saved by `save`.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub transform: Transform,
    pub fill_style: ColorSpec,
    pub stroke_style: ColorSpec,
    pub line_width: f64,
    pub font: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            fill_style: ColorSpec::Token("#000000".to_string()),
            stroke_style: ColorSpec::Token("#000000".to_string()),
            line_width: 1.0,
            font: "Sans 10".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<Call>,
    path: Vec<PathOp>,
    state: State,
    stack: Vec<State>,
    fail_on: Option<&'static str>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            path: Vec::new(),
            state: State::default(),
            stack: Vec::new(),
            fail_on: None,
        }
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Returns and forgets the calls recorded so far.
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn path(&self) -> &[PathOp] {
        &self.path
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Makes every later call of the named fallible operation (`"fill"`,
    /// `"stroke"`, `"clear_rect"`, `"fill_text"`, `"stroke_text"`, `"save"`,
    /// `"restore"`, `"copy_path"`) fail after being recorded.
    pub fn fail_on(&mut self, op: &'static str) {
        self.fail_on = Some(op);
    }

    fn check(&self, op: &'static str) -> Result<(), RecordingError> {
        match self.fail_on {
            Some(failing) if failing == op => Err(RecordingError::Injected(op)),
            _ => Ok(()),
        }
    }

    fn device(&self, x: f64, y: f64) -> (f64, f64) {
        self.state.transform.apply(x, y)
    }
}

impl Surface for RecordingSurface {
    type Path = Vec<PathOp>;
    type Error = RecordingError;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
        let (dx, dy) = self.device(x, y);
        self.path.push(PathOp::MoveTo(dx, dy));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
        let (dx, dy) = self.device(x, y);
        if self.path.is_empty() {
            self.path.push(PathOp::MoveTo(dx, dy));
        } else {
            self.path.push(PathOp::LineTo(dx, dy));
        }
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(Call::Rect(x, y, width, height));
        let corners = [
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ];
        for (i, (cx, cy)) in corners.into_iter().enumerate() {
            let (dx, dy) = self.device(cx, cy);
            self.path.push(if i == 0 {
                PathOp::MoveTo(dx, dy)
            } else {
                PathOp::LineTo(dx, dy)
            });
        }
        self.path.push(PathOp::Close);
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
        self.calls.push(Call::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        });
        let center = self.device(x, y);
        self.path.push(PathOp::Ellipse {
            center,
            radius_x,
            radius_y,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
        if !self.path.is_empty() {
            self.path.push(PathOp::Close);
        }
    }

    fn copy_path(&self) -> Result<Self::Path, Self::Error> {
        self.check("copy_path")?;
        Ok(self.path.clone())
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.calls.push(Call::Translate(x, y));
        self.state.transform = self.state.transform.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        self.calls.push(Call::Rotate(angle));
        self.state.transform = self.state.transform.rotate(angle);
    }

    fn set_transform(&mut self, transform: Transform) {
        self.calls.push(Call::SetTransform(transform));
        self.state.transform = transform;
    }

    fn transform(&self) -> Transform {
        self.state.transform
    }

    fn set_fill_style(&mut self, color: &ColorSpec) {
        self.calls.push(Call::SetFillStyle(color.to_string()));
        self.state.fill_style = color.clone();
    }

    fn set_stroke_style(&mut self, color: &ColorSpec) {
        self.calls.push(Call::SetStrokeStyle(color.to_string()));
        self.state.stroke_style = color.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::SetLineWidth(width));
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::SetFont(font.to_string()));
        self.state.font = font.to_string();
    }

    fn fill(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error> {
        self.calls.push(Call::Fill {
            explicit: path.is_some(),
        });
        self.check("fill")
    }

    fn stroke(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error> {
        self.calls.push(Call::Stroke {
            explicit: path.is_some(),
        });
        self.check("stroke")
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error> {
        self.calls.push(Call::ClearRect(x, y, width, height));
        self.check("clear_rect")
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        self.calls.push(Call::FillText(text.to_string(), x, y));
        self.check("fill_text")
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        self.calls.push(Call::StrokeText(text.to_string(), x, y));
        self.check("stroke_text")
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Save);
        self.check("save")?;
        self.stack.push(self.state.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Restore);
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.check("restore")
    }
}
