use needleplot_wasm::domain::plot::{PlotConfig, PlotData, PlotScalingEngine};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn set_zoom_to_current_after_resize_is_noop(width: u16, height: u16, step: u8, offset: i16) -> bool {
    let mut plot = PlotScalingEngine::new(PlotConfig::new(250.0), PlotData::default());
    plot.set_zoom(1.0 + step as f64 / 32.0, 0.0, 0.0);
    plot.set_position(offset as f64, 0.0);

    plot.set_size(200.0 + width as f64, 100.0 + height as f64, 12.0, 0.0);
    let before = plot.current();
    let update = plot.set_zoom(plot.scale(), 0.0, 0.0);
    update.is_none() && plot.current() == before
}

#[test]
fn resize_keeps_scale_and_raises_max_zoom() {
    let mut plot = PlotScalingEngine::new(PlotConfig::new(510.0), PlotData::default());
    plot.set_zoom(4.0, 0.0, 0.0);
    let update = plot.set_size(1200.0, 400.0, 20.0, 0.0);
    assert_eq!(update.scale(), 4.0);
    assert_eq!(plot.bounds().max(), 20.0);
    assert_eq!(plot.inner_size().width, 1110.0);
    assert_eq!(plot.baseline_y(), 360.0);
}

#[test]
fn invalid_max_zoom_keeps_previous_bounds() {
    let mut plot = PlotScalingEngine::new(PlotConfig::new(510.0), PlotData::default());
    plot.set_size(600.0, 300.0, 0.5, 0.0);
    assert_eq!(plot.bounds().max(), 10.0);
}
