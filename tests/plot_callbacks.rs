use needleplot_wasm::application::{NeedlePlot, PlotCallbacks};
use needleplot_wasm::domain::events::{Overlay, PlotEvent};
use needleplot_wasm::domain::plot::{PlotConfig, PlotData};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn recording_plot(log: &Log) -> NeedlePlot {
    let (zoom, position, both) = (Rc::clone(log), Rc::clone(log), Rc::clone(log));
    let mut plot = NeedlePlot::new().with_callbacks(PlotCallbacks {
        on_zoom_change: Some(Box::new(move |s| zoom.borrow_mut().push(format!("zoom {s}")))),
        on_position_change: Some(Box::new(move |p| position.borrow_mut().push(format!("position {p}")))),
        on_zoom_and_move: Some(Box::new(move |s, p| both.borrow_mut().push(format!("both {s} {p}")))),
        on_ready: None,
    });
    plot.init(PlotConfig::new(510.0), PlotData::default());
    plot
}

#[test]
fn zoom_reports_scale_position_and_both() {
    let log = Log::default();
    let mut plot = recording_plot(&log);
    plot.set_zoom(2.0, 0.0);
    assert_eq!(*log.borrow(), vec!["zoom 2", "position 127.5", "both 2 127.5"]);
}

#[test]
fn pan_reports_position_only() {
    let log = Log::default();
    let mut plot = recording_plot(&log);
    plot.set_zoom(2.0, 0.0);
    log.borrow_mut().clear();

    plot.drag(-51.0, 0.0);
    assert_eq!(*log.borrow(), vec!["position 153", "both 2 153"]);
}

#[test]
fn silent_and_unchanged_updates_stay_quiet() {
    let log = Log::default();
    let mut plot = recording_plot(&log);
    plot.set_position(0.0, 0.0);
    plot.set_aa_position(0.0, false, false, 0.0);
    plot.set_zoom(2.0, 0.0);
    log.borrow_mut().clear();

    plot.set_aa_position(50.0, true, false, 0.0);
    assert!(log.borrow().is_empty());
    assert_eq!(plot.data_position(), Some(50.0));
}

#[test]
fn overlays_and_subscribers_see_transform_changes() {
    struct Tooltip(Rc<RefCell<u32>>);
    impl Overlay for Tooltip {
        fn move_to_element(&self) {
            *self.0.borrow_mut() += 1;
        }
    }

    let moves = Rc::new(RefCell::new(0));
    let events = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&events);

    let mut plot = NeedlePlot::new();
    plot.add_overlay(Rc::new(Tooltip(Rc::clone(&moves))));
    plot.subscribe(move |event| seen.borrow_mut().push(event.clone()));
    plot.init(PlotConfig::new(510.0), PlotData::default());
    plot.set_zoom(4.0, 0.0);
    plot.set_size(800.0, 400.0, 10.0, 0.0);

    assert_eq!(*moves.borrow(), 2);
    assert!(matches!(events.borrow()[0], PlotEvent::DataLoaded { markers: 0, sites: 0 }));
    assert!(matches!(events.borrow()[1], PlotEvent::TransformChanged { scale, .. } if scale == 4.0));
}

#[test]
fn reload_before_init_is_ignored() {
    let mut plot = NeedlePlot::new();
    assert_eq!(plot.reload(PlotData::default(), 100.0, 0.0), None);
    assert_eq!(plot.position(), None);
}
