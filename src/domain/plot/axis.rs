//! Axis scales, tick generation and label formatting.
//!
//! Tick and nice rules follow the d3 (v3) conventions the plot was designed
//! around, so labels land on 1/2/5·10^k steps.

use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Ticks requested from the positional axis when not fully zoomed in.
pub const COARSE_TICKS: usize = 10;
/// Ticks requested from the positional axis at maximum zoom.
pub const FINE_TICKS: usize = 20;
/// Vertical pixels reserved per label on a logarithmic axis.
pub const LOG_LABEL_SPACING_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Log,
}

/// One labelled tick: data value and its pixel offset along the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

/// A logical axis: full data domain, currently visible window and the pixel
/// range it is drawn into.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    kind: ScaleKind,
    start: f64,
    end: f64,
    visible: (f64, f64),
    range: (f64, f64),
    /// Lowest tick of a log axis whose domain had to start at `MIN_POSITIVE`.
    tick_floor: Option<f64>,
}

impl Axis {
    pub fn linear(start: f64, end: f64) -> Self {
        let mut axis = Self {
            kind: ScaleKind::Linear,
            start,
            end,
            visible: (start, end),
            range: (0.0, 1.0),
            tick_floor: None,
        };
        axis.set_domain(start, end);
        axis
    }

    /// Base-10 log axis. A non-positive minimum is replaced by the smallest
    /// positive normal `f64`, log(0) being undefined.
    pub fn log(start: f64, end: f64) -> Self {
        let mut axis = Self::linear(start, end);
        axis.kind = ScaleKind::Log;
        axis.set_domain(start, end);
        axis
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Keep log ticks at or above `floor` while the domain itself reaches
    /// down to the positive minimum. Ignored on linear axes.
    pub fn set_tick_floor(&mut self, floor: f64) {
        if self.kind == ScaleKind::Log && floor > 0.0 && floor.is_finite() {
            self.tick_floor = Some(floor.min(self.end));
        }
    }

    pub fn tick_floor(&self) -> Option<f64> {
        self.tick_floor
    }

    pub fn set_domain(&mut self, start: f64, end: f64) {
        let start = match self.kind {
            ScaleKind::Log if !(start > 0.0) => f64::MIN_POSITIVE,
            _ => start,
        };
        self.start = start;
        self.end = end;
        self.visible = (start, end);
    }

    pub fn set_range(&mut self, r0: f64, r1: f64) {
        self.range = (r0, r1);
    }

    /// Full data domain `[start, end]`.
    pub fn full_domain(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Currently visible data window.
    pub fn domain(&self) -> (f64, f64) {
        self.visible
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Data units visible at `scale`.
    pub fn coverage(&self, scale: f64) -> f64 {
        self.end / scale
    }

    /// Show `[start_pos, start_pos + coverage]`.
    pub fn move_to(&mut self, start_pos: f64, scale: f64) {
        self.visible = (start_pos, start_pos + self.coverage(scale));
    }

    /// Furthest (negative) start offset that still keeps the window inside
    /// the sequence.
    pub fn shift_limit(&self, scale: f64) -> f64 {
        self.coverage(scale) - self.end
    }

    fn project(&self, value: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => value,
            // zero values sit on the floor of the axis
            ScaleKind::Log => value.max(f64::MIN_POSITIVE).log10(),
        }
    }

    fn unproject(&self, value: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => value,
            ScaleKind::Log => 10f64.powf(value),
        }
    }

    /// Data value to pixel, through the visible window.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = (self.project(self.visible.0), self.project(self.visible.1));
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (self.project(value) - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel back to data value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = (self.project(self.visible.0), self.project(self.visible.1));
        let (r0, r1) = self.range;
        if r1 == r0 {
            return self.visible.0;
        }
        self.unproject(d0 + (pixel - r0) / (r1 - r0) * (d1 - d0))
    }

    /// Extend the domain outwards to round values.
    pub fn nice(&mut self) {
        let (start, end) = match self.kind {
            ScaleKind::Linear => {
                let step = tick_step(self.start, self.end, COARSE_TICKS);
                if step > 0.0 {
                    ((self.start / step).floor() * step, (self.end / step).ceil() * step)
                } else {
                    (self.start, self.end)
                }
            }
            ScaleKind::Log => {
                let start = 10f64.powi(self.start.log10().floor() as i32);
                let end = 10f64.powi(self.end.log10().ceil() as i32);
                self.tick_floor = self.tick_floor.map(|floor| 10f64.powi(floor.log10().floor() as i32));
                (if start > 0.0 { start } else { self.start }, end)
            }
        };
        self.set_domain(start, end);
    }

    /// Tick values inside the visible window.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.visible;
        match self.kind {
            ScaleKind::Linear => linear_ticks(d0, d1, count),
            ScaleKind::Log => log_ticks(self.tick_floor.map_or(d0, |floor| d0.max(floor)), d1),
        }
    }

    /// Positional axis ticks, labelled with step-derived precision.
    pub fn linear_tick_marks(&self, count: usize) -> Vec<Tick> {
        let (d0, d1) = self.visible;
        let decimals = step_decimals(tick_step(d0, d1, count));
        self.ticks(count)
            .into_iter()
            .map(|value| Tick { value, offset: self.map(value), label: format_grouped(value, decimals) })
            .collect()
    }

    /// Value axis ticks with integer labels; fractional ticks stay unlabeled.
    pub fn integer_tick_marks(&self, count: usize) -> Vec<Tick> {
        self.ticks(count)
            .into_iter()
            .map(|value| Tick { value, offset: self.map(value), label: format_integer(value) })
            .collect()
    }

    /// Log axis ticks, thinned to about one label per 40px of `axis_height`
    /// and formatted as percentages.
    pub fn percent_tick_marks(&self, axis_height: f64) -> Vec<Tick> {
        let ticks = self.ticks(COARSE_TICKS);
        let stride = label_stride(ticks.len(), axis_height);
        ticks
            .into_iter()
            .enumerate()
            .map(|(i, value)| Tick {
                value,
                offset: self.map(value),
                label: if i % stride == 0 { format_percent(value) } else { String::new() },
            })
            .collect()
    }
}

/// d3 v3 tick step: a power of ten times 1, 2 or 5.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if count == 0 || !(span > 0.0) || !span.is_finite() {
        return 0.0;
    }
    let count = count as f64;
    let mut step = 10f64.powi((span / count).log10().floor() as i32);
    let err = count / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    step
}

pub fn linear_ticks(d0: f64, d1: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let step = tick_step(lo, hi, count);
    if step == 0.0 {
        return if lo.is_finite() { vec![lo] } else { Vec::new() };
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// `k·10^i` for `k` in 1..=9 over every decade touching the domain.
pub fn log_ticks(d0: f64, d1: f64) -> Vec<f64> {
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    if !(lo > 0.0) || !hi.is_finite() {
        return Vec::new();
    }
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    let tolerance = |v: f64| v * 1e-12;
    let mut ticks = Vec::new();
    for exponent in first..last {
        let decade = 10f64.powi(exponent);
        for k in 1..10 {
            ticks.push(decade * k as f64);
        }
    }
    ticks.push(10f64.powi(last));
    ticks.retain(|&t| t >= lo - tolerance(lo) && t <= hi + tolerance(hi));
    ticks
}

/// Every `stride`-th log tick gets a label.
pub fn label_stride(tick_count: usize, axis_height: f64) -> usize {
    let labels = axis_height / LOG_LABEL_SPACING_PX;
    if labels > 0.0 && tick_count as f64 > labels {
        ((tick_count as f64 / labels).round() as usize).max(1)
    } else {
        1
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn step_decimals(step: f64) -> usize {
    if !(step > 0.0) {
        return 0;
    }
    (-(step.log10() + 0.01).floor()).max(0.0) as usize
}

/// Fixed precision with thousands separators: `12,500.5`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && fraction.is_none_or(|f| f.chars().all(|c| c == '0')) {
        ""
    } else {
        sign
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Integer label, empty for fractional values.
pub fn format_integer(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        String::new()
    }
}

/// Percent label whose precision grows as the value shrinks. `value` is
/// already expressed in percent.
pub fn format_percent(value: f64) -> String {
    let fraction = value / 100.0;
    if fraction < 0.0001 {
        format!("{:.3}%", value)
    } else if fraction < 0.001 {
        format!("{:.2}%", value)
    } else if fraction < 0.01 {
        format!("{:.1}%", value)
    } else {
        format!("{:.0}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_step_picks_round_values() {
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 393.0, 10), 50.0);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn coverage_and_shift_limit_follow_scale() {
        let axis = Axis::linear(0.0, 400.0);
        assert_eq!(axis.coverage(4.0), 100.0);
        assert_eq!(axis.shift_limit(4.0), -300.0);
        assert_eq!(axis.shift_limit(1.0), 0.0);
    }

    #[test]
    fn move_to_narrows_window() {
        let mut axis = Axis::linear(0.0, 400.0);
        axis.set_range(0.0, 800.0);
        axis.move_to(100.0, 2.0);
        assert_eq!(axis.domain(), (100.0, 300.0));
        assert_eq!(axis.map(200.0), 400.0);
        assert_eq!(axis.invert(400.0), 200.0);
    }

    #[test]
    fn log_axis_never_starts_at_zero() {
        let mut axis = Axis::log(0.0, 50.0);
        assert!(axis.full_domain().0 > 0.0);
        axis.nice();
        assert!(axis.full_domain().0 > 0.0);
        assert_eq!(axis.full_domain().1, 100.0);
    }

    #[test]
    fn tick_floor_bounds_log_ticks() {
        let mut axis = Axis::log(0.0, 40.0);
        axis.set_tick_floor(40.0);
        axis.nice();
        assert_eq!(axis.tick_floor(), Some(10.0));
        assert!(axis.full_domain().0 < 1e-300);
        let ticks = axis.ticks(COARSE_TICKS);
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&100.0));
    }

    #[test]
    fn tick_floor_is_linear_noop() {
        let mut axis = Axis::linear(0.0, 40.0);
        axis.set_tick_floor(5.0);
        assert_eq!(axis.tick_floor(), None);
    }

    #[test]
    fn log_ticks_cover_decades() {
        let ticks = log_ticks(1.0, 100.0);
        assert_eq!(ticks.len(), 19);
        assert_eq!(ticks.first(), Some(&1.0));
        assert_eq!(ticks.last(), Some(&100.0));
    }

    #[test]
    fn percent_tiers() {
        assert_eq!(format_percent(0.005), "0.005%");
        assert_eq!(format_percent(0.05), "0.05%");
        assert_eq!(format_percent(0.5), "0.5%");
        assert_eq!(format_percent(50.0), "50%");
    }

    #[test]
    fn grouped_labels() {
        assert_eq!(format_grouped(1250.0, 0), "1,250");
        assert_eq!(format_grouped(-1234567.25, 2), "-1,234,567.25");
        assert_eq!(format_grouped(0.5, 1), "0.5");
        assert_eq!(format_grouped(-0.0, 0), "0");
    }

    #[test]
    fn stride_thins_dense_log_axes() {
        assert_eq!(label_stride(19, 400.0), 2);
        assert_eq!(label_stride(5, 400.0), 1);
    }
}
