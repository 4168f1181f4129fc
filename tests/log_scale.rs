use needleplot_wasm::domain::plot::{MarkerRecord, PlotConfig, PlotData, PlotScalingEngine, ScaleKind};
use quickcheck_macros::quickcheck;

fn log_plot(values: &[f64]) -> PlotScalingEngine {
    let config = PlotConfig { use_log_scale: true, ..PlotConfig::new(100.0) };
    let data = PlotData {
        mutations: values
            .iter()
            .enumerate()
            .map(|(i, &value)| MarkerRecord { pos: i as f64, value, category: String::new() })
            .collect(),
        sites: Vec::new(),
    };
    PlotScalingEngine::new(config, data)
}

#[quickcheck]
fn log_domain_minimum_is_positive(values: Vec<u16>) -> bool {
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    let plot = log_plot(&values);
    let (min, max) = plot.y_axis().full_domain();
    plot.y_axis().kind() == ScaleKind::Log && min > 0.0 && max > min
}

#[test]
fn zero_values_map_to_finite_pixels() {
    let plot = log_plot(&[0.0, 0.5, 20.0]);
    let layout = plot.layout(0.0);
    assert!(layout.needles.iter().all(|n| n.y_top.is_finite()));
    let zero = layout.needles.iter().find(|n| n.value == 0.0).unwrap();
    assert!(zero.y_top <= plot.y_axis().range().0 + 1.0);
}

#[test]
fn zero_values_keep_ticks_on_real_magnitudes() {
    let config = PlotConfig {
        use_log_scale: true,
        width: Some(1000.0),
        height: Some(400.0),
        ..PlotConfig::new(100.0)
    };
    let data = PlotData {
        mutations: vec![
            MarkerRecord { pos: 1.0, value: 0.0, category: String::new() },
            MarkerRecord { pos: 2.0, value: 40.0, category: String::new() },
        ],
        sites: Vec::new(),
    };
    let plot = PlotScalingEngine::new(config, data);
    let ticks = plot.layout(0.0).y_ticks;
    assert!(plot.y_axis().full_domain().0 > 0.0);
    assert!(ticks.len() <= 20, "{} ticks", ticks.len());
    assert!(ticks.iter().any(|tick| tick.label == "100%"));
    assert!(ticks.iter().all(|tick| tick.label != "0.000%"));
}

#[test]
fn all_zero_values_tick_one_decade() {
    let plot = log_plot(&[0.0, 0.0]);
    let ticks = plot.layout(0.0).y_ticks;
    assert!((10..=19).contains(&ticks.len()), "{} ticks", ticks.len());
    assert_eq!(ticks.last().map(|tick| tick.value), Some(1.0));
}
