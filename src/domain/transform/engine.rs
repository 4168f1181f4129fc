use super::transition::{Easing, TransitionHandle, TransitionScheduler};
use super::value_objects::{Point, Size, Transform, ZoomBounds};
use crate::domain::errors::{PlotError, PlotResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// Default duration of `set_scale`, in milliseconds.
pub const ZOOM_ANIMATION_MS: f64 = 600.0;

/// Result of a committed transform mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformChange {
    pub previous: Transform,
    pub current: Transform,
    pub duration_ms: f64,
    pub handle: TransitionHandle,
}

impl TransformChange {
    pub fn is_animated(&self) -> bool {
        self.duration_ms > 0.0
    }
}

/// Keeps the authoritative `(scale, translate)` pair consistent with the
/// canvas/viewport geometry.
///
/// The canvas is derived from the viewport and the zoom bounds so that at
/// every allowed scale `canvas * scale >= viewport`. Until a non-empty
/// viewport is supplied the engine is unsized: translations are stored
/// unclamped and conversions yield `None`.
#[derive(Debug, Clone)]
pub struct CoordinateTransformEngine {
    bounds: ZoomBounds,
    viewport: Option<Size>,
    canvas: Option<Size>,
    transform: Transform,
    scheduler: TransitionScheduler<Transform>,
    easing: Easing,
    zoom_duration_ms: f64,
}

impl CoordinateTransformEngine {
    pub fn new(bounds: ZoomBounds) -> Self {
        Self {
            bounds,
            viewport: None,
            canvas: None,
            transform: Transform::new(bounds.clamp(1.0), Point::ORIGIN),
            scheduler: TransitionScheduler::new(),
            easing: Easing::default(),
            zoom_duration_ms: ZOOM_ANIMATION_MS,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_zoom_duration(mut self, duration_ms: f64) -> Self {
        self.zoom_duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    pub fn canvas(&self) -> Option<Size> {
        self.canvas
    }

    /// Settled transform (the target of any running animation).
    pub fn current(&self) -> Transform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Transform to draw at `now_ms`, interpolated while animating.
    pub fn rendered(&self, now_ms: f64) -> Transform {
        self.scheduler.sample(now_ms).unwrap_or(self.transform)
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Advance the running animation; `None` when nothing is in flight.
    pub fn tick(&mut self, now_ms: f64) -> Option<Transform> {
        self.scheduler.tick(now_ms)
    }

    /// Replace the zoom bounds. Invalid bounds are logged and ignored.
    pub fn set_zoom_bounds(&mut self, min: f64, max: f64) -> bool {
        match ZoomBounds::new(min, max) {
            Ok(bounds) => {
                self.bounds = bounds;
                if let Some(viewport) = self.viewport {
                    self.canvas = Some(bounds.canvas_for(viewport));
                }
                let rescaled = Transform::new(bounds.clamp(self.transform.scale), self.transform.translate);
                self.commit(rescaled, 0.0, 0.0);
                true
            }
            Err(err) => {
                log_warn!(LogComponent::Domain("Transform"), "ignoring zoom bounds: {}", err);
                false
            }
        }
    }

    /// Recompute the canvas for a new viewport and re-apply the current
    /// transform under the new geometry. A zero-sized viewport is deferred.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> Option<TransformChange> {
        let viewport = Size::new(width, height);
        if viewport.is_empty() {
            log_warn!(
                LogComponent::Domain("Transform"),
                "deferring sizing: viewport {} is empty",
                viewport
            );
            return None;
        }
        self.viewport = Some(viewport);
        self.canvas = Some(self.bounds.canvas_for(viewport));
        log_debug!(
            LogComponent::Domain("Transform"),
            "viewport {} -> canvas {}",
            viewport,
            self.bounds.canvas_for(viewport)
        );
        Some(self.commit(self.transform, 0.0, 0.0))
    }

    /// Clamp the translation so no empty space shows inside the viewport:
    /// `viewport - canvas * scale <= translate <= 0` per axis.
    pub fn clamp(&self, transform: Transform) -> Transform {
        let (Some(viewport), Some(canvas)) = (self.viewport, self.canvas) else {
            return transform;
        };
        let scale = transform.scale;
        let clamp_axis = |value: f64, viewport: f64, canvas: f64| {
            value.max(viewport - canvas * scale).min(0.0)
        };
        Transform::new(
            scale,
            Point::new(
                clamp_axis(transform.translate.x, viewport.width, canvas.width),
                clamp_axis(transform.translate.y, viewport.height, canvas.height),
            ),
        )
    }

    /// The single mutation primitive. `duration_ms == 0` applies immediately,
    /// otherwise an interpolation starts from the currently drawn transform
    /// and supersedes whatever was in flight.
    pub fn transform(&mut self, translate: Point, scale: f64, duration_ms: f64, now_ms: f64) -> TransformChange {
        self.commit(Transform::new(scale, translate), duration_ms, now_ms)
    }

    fn commit(&mut self, requested: Transform, duration_ms: f64, now_ms: f64) -> TransformChange {
        let previous = self.transform;
        let target = self.clamp(requested);
        let from = self.rendered(now_ms);
        self.transform = target;
        let handle = self.scheduler.schedule(from, target, duration_ms, self.easing, now_ms);
        TransformChange { previous, current: target, duration_ms: duration_ms.max(0.0), handle }
    }

    /// Zoom keeping the viewport center fixed. Skipped when the clamped scale
    /// equals the current one.
    pub fn set_scale(&mut self, new_scale: f64, silent: bool, now_ms: f64) -> Option<TransformChange> {
        let old_scale = self.transform.scale;
        let new_scale = self.bounds.clamp(new_scale);
        if new_scale == old_scale {
            return None;
        }
        let factor = old_scale - new_scale;
        let translate = match self.canvas {
            Some(canvas) => Point::new(
                self.transform.translate.x + factor * canvas.width / 2.0,
                self.transform.translate.y + factor * canvas.height / 2.0,
            ),
            None => self.transform.translate,
        };
        let duration = if silent { 0.0 } else { self.zoom_duration_ms };
        Some(self.transform(translate, new_scale, duration, now_ms))
    }

    /// Move without touching the scale.
    pub fn set_translate(&mut self, translate: Point) -> TransformChange {
        self.commit(Transform::new(self.transform.scale, translate), 0.0, 0.0)
    }

    pub fn viewport_to_canvas(&self, point: Point) -> Option<Point> {
        let (viewport, canvas) = self.viewport.zip(self.canvas)?;
        Some(Point::new(
            point.x / viewport.width * canvas.width,
            point.y / viewport.height * canvas.height,
        ))
    }

    pub fn canvas_to_viewport(&self, point: Point) -> Option<Point> {
        let (viewport, canvas) = self.viewport.zip(self.canvas)?;
        Some(Point::new(
            point.x * viewport.width / canvas.width,
            point.y * viewport.height / canvas.height,
        ))
    }

    /// Make `radius` units fill the smaller viewport side and put `point`
    /// in the middle of the viewport.
    pub fn center_on(
        &mut self,
        point: Point,
        radius: f64,
        duration_ms: f64,
        now_ms: f64,
    ) -> PlotResult<TransformChange> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(PlotError::InvalidRadius(radius));
        }
        let viewport = self.viewport.ok_or(PlotError::EmptyViewport)?;
        let scale = self.bounds.clamp(viewport.min_side() / radius);
        let center = viewport.center();
        let translate = Point::new(center.x - point.x * scale, center.y - point.y * scale);
        Ok(self.transform(translate, scale, duration_ms, now_ms))
    }

    /// Raw transform for a wheel step about `anchor` (viewport pixels): the
    /// canvas point under the anchor stays under it. Not applied.
    pub fn zoom_gesture(&self, anchor: Point, factor: f64) -> Transform {
        let scale = self.bounds.clamp(self.transform.scale * factor);
        let under_anchor = self.transform.invert(anchor);
        Transform::new(
            scale,
            Point::new(anchor.x - under_anchor.x * scale, anchor.y - under_anchor.y * scale),
        )
    }

    /// Raw transform for a drag by `delta` pixels. Not applied.
    pub fn pan_gesture(&self, delta: Point) -> Transform {
        Transform::new(
            self.transform.scale,
            Point::new(self.transform.translate.x + delta.x, self.transform.translate.y + delta.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_engine() -> CoordinateTransformEngine {
        let mut engine = CoordinateTransformEngine::new(ZoomBounds::new(0.2, 2.0).unwrap());
        engine.set_viewport_size(100.0, 50.0);
        engine
    }

    #[test]
    fn zero_viewport_is_deferred() {
        let mut engine = CoordinateTransformEngine::new(ZoomBounds::default());
        assert!(engine.set_viewport_size(0.0, 300.0).is_none());
        assert_eq!(engine.canvas(), None);
        assert_eq!(engine.viewport_to_canvas(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn set_scale_keeps_center() {
        let mut engine = sized_engine();
        engine.transform(Point::new(-100.0, -50.0), 1.0, 0.0, 0.0);
        engine.set_scale(1.5, true, 0.0);
        // translate' = translate + (old - new) * canvas / 2
        assert_eq!(engine.current().translate, Point::new(-225.0, -112.5));
    }

    #[test]
    fn set_scale_same_value_is_skipped() {
        let mut engine = sized_engine();
        engine.set_scale(1.0, true, 0.0);
        assert!(engine.set_scale(1.0, true, 0.0).is_none());
        assert!(engine.set_scale(5.0, true, 0.0).is_some());
        assert_eq!(engine.scale(), 2.0);
        assert!(engine.set_scale(7.0, true, 0.0).is_none());
    }

    #[test]
    fn center_on_rejects_bad_radius() {
        let mut engine = sized_engine();
        assert_eq!(
            engine.center_on(Point::ORIGIN, 0.0, 0.0, 0.0),
            Err(PlotError::InvalidRadius(0.0))
        );
        assert!(engine.center_on(Point::ORIGIN, -3.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn center_on_fills_smaller_side() {
        let mut engine = sized_engine();
        let change = engine.center_on(Point::new(200.0, 100.0), 50.0, 0.0, 0.0).unwrap();
        assert_eq!(change.current.scale, 1.0);
        assert_eq!(change.current.translate, Point::new(-150.0, -75.0));
    }

    #[test]
    fn animated_transform_interpolates_and_settles() {
        let mut engine = sized_engine();
        engine.transform(Point::ORIGIN, 1.0, 0.0, 0.0);
        engine.transform(Point::new(-100.0, 0.0), 1.0, 100.0, 1_000.0);
        assert!(engine.is_animating());
        assert_eq!(engine.current().translate.x, -100.0);
        let mid = engine.rendered(1_050.0).translate.x;
        assert!(mid < 0.0 && mid > -100.0);
        engine.tick(1_100.0);
        assert!(!engine.is_animating());
        assert_eq!(engine.rendered(2_000.0), engine.current());
    }

    #[test]
    fn wheel_gesture_keeps_anchor_fixed() {
        let mut engine = sized_engine();
        engine.transform(Point::new(-30.0, -20.0), 1.0, 0.0, 0.0);
        let anchor = Point::new(40.0, 10.0);
        let under = engine.current().invert(anchor);
        let raw = engine.zoom_gesture(anchor, 1.5);
        assert!(raw.apply(under).distance_to(&anchor) < 1e-9);
    }
}
