use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};

use super::transition::Interpolate;
use crate::domain::errors::{PlotError, PlotResult};

/// Value Object - 2D point or vector in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, From, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Value Object - rectangle size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "{}x{}", width, height)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Value Object - pan/zoom state mapping canvas space into viewport space
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "translate{} scale({})", translate, scale)]
pub struct Transform {
    pub scale: f64,
    pub translate: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { scale: 1.0, translate: Point::ORIGIN };

    /// Horizontal-only transform as produced by the needle plot gestures.
    pub fn horizontal(scale: f64, translate_x: f64) -> Self {
        Self::new(scale, Point::new(translate_x, 0.0))
    }

    /// Canvas point to its on-screen position.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.translate.x,
            point.y * self.scale + self.translate.y,
        )
    }

    /// On-screen position back to the canvas point under it.
    pub fn invert(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.translate.x) / self.scale,
            (point.y - self.translate.y) / self.scale,
        )
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({},{})scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

impl Interpolate for Transform {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Transform::new(
            self.scale.interpolate(&to.scale, t),
            Point::new(
                self.translate.x.interpolate(&to.translate.x, t),
                self.translate.y.interpolate(&to.translate.y, t),
            ),
        )
    }
}

/// Value Object - allowed zoom range. `min < max`, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl ZoomBounds {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !(min > 0.0 && min.is_finite() && max.is_finite() && min < max) {
            return Err(PlotError::InvalidZoomBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Canvas large enough to host the content at both zoom extremes:
    /// `max(viewport * max, viewport / min)` per axis.
    pub fn canvas_for(&self, viewport: Size) -> Size {
        Size::new(
            (viewport.width * self.max).max(viewport.width / self.min),
            (viewport.height * self.max).max(viewport.height / self.min),
        )
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}
