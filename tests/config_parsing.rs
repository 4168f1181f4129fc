use needleplot_wasm::domain::plot::{Paddings, PlotConfig, PlotDataSource, YScale};
use needleplot_wasm::presentation::InitOptions;
use serde_json::json;

#[test]
fn init_options_accept_camel_case_and_location() {
    let options: InitOptions = serde_json::from_value(json!({
        "data": "/api/needles/TP53.json",
        "sequenceLength": 393,
        "width": 800,
        "height": 300,
        "maxZoom": 20,
        "useLog": true,
        "paddings": {"left": 60},
        "colorMap": {"missense": "#ffff00"},
        "legends": {"x": "Protein", "y": null},
        "yScale": 50
    }))
    .unwrap();

    assert_eq!(options.data, PlotDataSource::Remote("/api/needles/TP53.json".into()));
    let config = options.config;
    assert_eq!(config.sequence_length, 393.0);
    assert_eq!((config.width, config.height), (Some(800.0), Some(300.0)));
    assert_eq!((config.min_zoom, config.max_zoom), (1.0, 20.0));
    assert!(config.use_log_scale);
    assert_eq!(config.paddings, Paddings { left: 60.0, ..Paddings::default() });
    assert_eq!(config.color_for("missense"), Some("#ffff00"));
    assert_eq!(config.legends.x.as_deref(), Some("Protein"));
    assert_eq!(config.legends.y, None);
    assert_eq!(config.y_scale, YScale::Fixed(50.0));
}

#[test]
fn inline_data_and_defaults() {
    let options: InitOptions = serde_json::from_value(json!({
        "data": {"mutations": [{"pos": 3, "value": 7, "category": "nonsense"}],
                 "sites": [{"start": 1, "end": 9, "type": "phosphorylation,acetylation"}]},
        "yScale": "auto"
    }))
    .unwrap();

    let PlotDataSource::Inline(data) = options.data else {
        panic!("expected inline data");
    };
    assert_eq!(data.mutations[0].category, "nonsense");
    assert_eq!(data.sites[0].css_class(), "site multi_ptm");
    assert_eq!(options.config, PlotConfig::default());
}

#[test]
fn missing_height_follows_ratio() {
    let mut config: PlotConfig = serde_json::from_value(json!({"width": 1000, "ratio": 0.25})).unwrap();
    let size = config.resolve_dimensions();
    assert_eq!((size.width, size.height), (1000.0, 250.0));
}
