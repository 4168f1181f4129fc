use needleplot_wasm::domain::transform::{CoordinateTransformEngine, Point, Size, Transform, ZoomBounds};
use quickcheck_macros::quickcheck;

fn bounds(min: u8, span: u8) -> ZoomBounds {
    let min = 0.25 + min as f64 / 64.0;
    let max = min + 0.5 + span as f64 / 16.0;
    ZoomBounds::new(min, max).unwrap()
}

fn viewport(width: u16, height: u16) -> Size {
    Size::new(1.0 + width as f64, 1.0 + height as f64)
}

#[quickcheck]
fn canvas_never_smaller_than_viewport(min: u8, span: u8, width: u16, height: u16, t: u8) -> bool {
    let bounds = bounds(min, span);
    let viewport = viewport(width, height);
    let canvas = bounds.canvas_for(viewport);
    let scale = bounds.min() + (bounds.max() - bounds.min()) * t as f64 / 255.0;
    canvas.width * scale >= viewport.width - 1e-9 && canvas.height * scale >= viewport.height - 1e-9
}

#[quickcheck]
fn clamped_translate_stays_inside(min: u8, span: u8, width: u16, x: i32, y: i32, t: u8) -> bool {
    let bounds = bounds(min, span);
    let mut engine = CoordinateTransformEngine::new(bounds);
    engine.set_viewport_size(1.0 + width as f64, 300.0);
    let scale = bounds.min() + (bounds.max() - bounds.min()) * t as f64 / 255.0;

    let clamped = engine.clamp(Transform::new(scale, Point::new(x as f64, y as f64)));
    let (viewport, canvas) = (engine.viewport().unwrap(), engine.canvas().unwrap());
    let x_ok = viewport.width - canvas.width * scale <= clamped.translate.x && clamped.translate.x <= 0.0;
    let y_ok = viewport.height - canvas.height * scale <= clamped.translate.y && clamped.translate.y <= 0.0;
    x_ok && y_ok
}

#[quickcheck]
fn viewport_canvas_round_trip(width: u16, height: u16, x: i16, y: i16) -> bool {
    let mut engine = CoordinateTransformEngine::new(ZoomBounds::new(0.5, 8.0).unwrap());
    engine.set_viewport_size(1.0 + width as f64, 1.0 + height as f64);
    let point = Point::new(x as f64, y as f64);
    let back = engine
        .canvas_to_viewport(point)
        .and_then(|p| engine.viewport_to_canvas(p))
        .unwrap();
    (back.x - point.x).abs() < 1e-6 && (back.y - point.y).abs() < 1e-6
}

#[test]
fn unsized_engine_has_no_conversions() {
    let mut engine = CoordinateTransformEngine::new(ZoomBounds::default());
    assert!(engine.set_viewport_size(0.0, 200.0).is_none());
    assert_eq!(engine.viewport_to_canvas(Point::new(1.0, 1.0)), None);
}
