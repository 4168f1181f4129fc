use needleplot_wasm::domain::plot::{PlotConfig, PlotData, PlotScalingEngine};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn zoom_then_inverse_never_inverts_domain(zooms: Vec<u8>, drags: Vec<i16>) -> bool {
    let mut plot = PlotScalingEngine::new(PlotConfig::new(393.0), PlotData::default());
    for (i, step) in zooms.iter().enumerate() {
        let scale = 0.5 + *step as f64 / 16.0;
        plot.set_zoom(scale, 0.0, 0.0);
        plot.set_zoom(1.0 / scale, 0.0, 0.0);
        if let Some(dx) = drags.get(i) {
            plot.drag(*dx as f64, 0.0);
        }
        let (start, end) = plot.visible_domain();
        if start > end || start < -1e-9 || end > plot.sequence_length() + 1e-9 {
            return false;
        }
    }
    true
}

#[test]
fn wheel_keeps_point_under_pointer() {
    let mut plot = PlotScalingEngine::new(PlotConfig::new(510.0), PlotData::default());
    let before = plot.x_to_pos(plot.position()) + 200.0 / plot.unit() / plot.scale();
    plot.wheel(200.0, 2.0, 0.0);
    let after = plot.x_to_pos(plot.position()) + 200.0 / plot.unit() / plot.scale();
    assert!((before - after).abs() < 1e-9);
    assert_eq!(plot.scale(), 2.0);
}
