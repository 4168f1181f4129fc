use needleplot_wasm::domain::plot::{PlotConfig, PlotData, PlotScalingEngine};
use quickcheck_macros::quickcheck;

/// 510px of plot area over 510 positions.
fn engine() -> PlotScalingEngine {
    PlotScalingEngine::new(PlotConfig::new(510.0), PlotData::default())
}

fn zoom(step: u8) -> f64 {
    1.0 + 9.0 * step as f64 / 255.0
}

#[quickcheck]
fn position_stays_within_shift_limit(step: u8, offset: i32) -> bool {
    let mut plot = engine();
    plot.set_zoom(zoom(step), 0.0, 0.0);
    plot.set_position(offset as f64, 0.0);
    let boundary = plot.position_boundary(plot.scale());
    boundary <= plot.position() && plot.position() <= 0.0
}

#[quickcheck]
fn overshoot_lands_exactly_on_shift_limit(step: u8) -> bool {
    let mut plot = engine();
    plot.set_zoom(zoom(step), 0.0, 0.0);
    plot.set_position(-1e9, 0.0);
    plot.position() == plot.position_boundary(plot.scale())
}

#[test]
fn shift_limit_at_double_zoom() {
    let mut plot = engine();
    plot.set_zoom(2.0, 0.0, 0.0);
    plot.set_position(-600.0, 0.0);
    assert_eq!(plot.position(), -510.0);
    assert_eq!(plot.visible_domain(), (255.0, 510.0));
}

#[test]
fn no_panning_below_unit_zoom() {
    let config = PlotConfig { min_zoom: 0.5, ..PlotConfig::new(510.0) };
    let mut plot = PlotScalingEngine::new(config, PlotData::default());
    plot.set_zoom(0.5, 0.0, 0.0);
    plot.set_position(-100.0, 0.0);
    assert_eq!(plot.position(), 0.0);
}

#[test]
fn zoom_out_floor_below_one_still_opens_at_full_sequence() {
    let config = PlotConfig { min_zoom: 0.5, ..PlotConfig::new(510.0) };
    let plot = PlotScalingEngine::new(config, PlotData::default());
    assert_eq!(plot.scale(), 1.0);
    assert_eq!(plot.visible_domain(), (0.0, 510.0));
}
