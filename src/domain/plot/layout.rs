//! Render-ready geometry of one plot frame.
//!
//! Everything here is plain data in SVG user units, produced by
//! `PlotScalingEngine::layout` and consumed by the view.

use serde::Serialize;

use super::axis::Tick;
use super::value_objects::Paddings;

/// Content group transform: `translate(position, 0) scale(scale, 1)`.
/// Only the positional axis is stretched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentTransform {
    pub position: f64,
    pub scale: f64,
}

impl ContentTransform {
    pub fn to_svg(&self) -> String {
        format!("translate({}, 0)scale({}, 1)", self.position, self.scale)
    }

    /// Screen-space x (relative to the left padding) of a content x.
    pub fn screen_x(&self, x: f64) -> f64 {
        self.position + self.scale * x
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadLayout {
    /// Horizontal fan-out offset, zero unless the head's group is expanded.
    pub offset_x: f64,
    pub y: f64,
    pub radius: f64,
    pub font_size: f64,
    pub dx: f64,
    pub dy: f64,
    pub fill: Option<String>,
    /// Size of the overlapping group, only set for clustered heads.
    pub label: Option<String>,
    pub label_color: &'static str,
    /// Counters the horizontal stretch of the content group.
    pub vertical_scale: f64,
}

impl HeadLayout {
    pub fn transform_svg(&self) -> String {
        format!("translate({},{})scale(1, {})", self.offset_x, self.y, self.vertical_scale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeedleLayout {
    pub id: usize,
    pub position: f64,
    pub value: f64,
    pub category: String,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub stroke_width: f64,
    pub head: HeadLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLayout {
    pub start: f64,
    pub end: f64,
    pub kind: String,
    pub css_class: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    /// Triangle marker on top of the box, centered horizontally.
    pub shape_x: f64,
    pub shape_scale: (f64, f64),
}

impl SiteLayout {
    pub fn shape_svg(&self) -> String {
        format!(
            "translate({},-2)scale({},{})",
            self.shape_x, self.shape_scale.0, self.shape_scale.1
        )
    }
}

/// Upward triangle of the given area centered on the origin, as drawn by
/// d3's `triangle-up` symbol.
pub fn triangle_up_path(area: f64) -> String {
    let sqrt3 = 3f64.sqrt();
    let rx = (area / sqrt3).sqrt();
    let ry = rx * sqrt3 / 2.0;
    format!("M0,{}L{},{} {},{}Z", -ry, rx, ry, -rx, ry)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Degrees, applied about `(x, y)`.
    pub rotate: f64,
}

impl LegendLayout {
    pub fn transform_svg(&self) -> String {
        format!("translate({} {}) rotate({})", self.x, self.y, self.rotate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub paddings: Paddings,
    pub content: ContentTransform,
    pub baseline_y: f64,
    pub x_ticks: Vec<Tick>,
    pub x_tick_size: f64,
    pub y_ticks: Vec<Tick>,
    pub needles: Vec<NeedleLayout>,
    pub sites: Vec<SiteLayout>,
    pub x_legend: Option<LegendLayout>,
    pub y_legend: Option<LegendLayout>,
}

impl PlotLayout {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn needle(&self, id: usize) -> Option<&NeedleLayout> {
        self.needles.iter().find(|needle| needle.id == id)
    }

    /// Screen-space x of a needle's head, fan-out included.
    pub fn head_screen_x(&self, id: usize) -> Option<f64> {
        self.needle(id)
            .map(|needle| self.content.screen_x(needle.x + needle.head.offset_x))
    }
}
