use super::axis::{Axis, COARSE_TICKS, FINE_TICKS, ScaleKind};
use super::entities::{HeadGroups, HeadKey, Marker, PlotData, Site, fan_out_offsets, load_markers};
use super::layout::{ContentTransform, HeadLayout, LegendLayout, NeedleLayout, PlotLayout, SiteLayout};
use super::value_objects::{Color, PlotConfig, YScale};
use crate::domain::logging::LogComponent;
use crate::domain::transform::{CoordinateTransformEngine, Easing, Point, Size, Transform, ZoomBounds};
use crate::{log_debug, log_warn};

/// Outcome of a committed plot transform, used to drive callbacks and
/// overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotUpdate {
    pub previous: Transform,
    pub current: Transform,
    /// Sequence coordinate at the left edge of the plot area.
    pub data_position: f64,
    pub duration_ms: f64,
}

impl PlotUpdate {
    pub fn scale(&self) -> f64 {
        self.current.scale
    }

    /// Raw horizontal offset of the content group, in pixels.
    pub fn position(&self) -> f64 {
        self.current.translate.x
    }

    pub fn zoom_changed(&self) -> bool {
        self.previous.scale != self.current.scale
    }

    pub fn position_changed(&self) -> bool {
        self.previous.translate.x != self.current.translate.x
    }
}

/// Transient hover state of a cluster of overlapping heads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadHover {
    Expanded { key: HeadKey, members: usize },
    Collapsed { key: HeadKey },
}

/// Maps the clamped pan/zoom transform onto the two plot axes and lays
/// out every needle, head and site for it.
///
/// Only the positional axis pans and zooms; the value axis keeps its range.
/// The transform stored in the coordinate engine is always the one clamped
/// by the positional shift limit.
#[derive(Debug, Clone)]
pub struct PlotScalingEngine {
    config: PlotConfig,
    size: Size,
    sequence_length: f64,
    transform: CoordinateTransformEngine,
    x_axis: Axis,
    y_axis: Axis,
    markers: Vec<Marker>,
    sites: Vec<Site>,
    head_groups: HeadGroups,
    expanded: Option<usize>,
    tick_count: usize,
}

fn zoom_bounds(config: &PlotConfig) -> ZoomBounds {
    ZoomBounds::new(config.min_zoom, config.max_zoom).unwrap_or_else(|err| {
        log_warn!(LogComponent::Domain("Plot"), "{}; falling back to {}", err, ZoomBounds::default());
        ZoomBounds::default()
    })
}

/// Configured length, or the data extent when none was given.
fn effective_length(configured: f64, data: &PlotData) -> f64 {
    if configured > 0.0 && configured.is_finite() {
        configured
    } else {
        data.extent().max(1.0)
    }
}

impl PlotScalingEngine {
    pub fn new(mut config: PlotConfig, data: PlotData) -> Self {
        let sequence_length = effective_length(config.sequence_length, &data);
        config.sequence_length = sequence_length;
        let size = config.resolve_dimensions();
        let bounds = zoom_bounds(&config);
        let transform = CoordinateTransformEngine::new(bounds)
            .with_easing(Easing::QuadIn)
            .with_zoom_duration(config.animation_duration);

        let mut engine = Self {
            config,
            size,
            sequence_length,
            transform,
            x_axis: Axis::linear(0.0, sequence_length),
            y_axis: Axis::linear(0.0, 1.0),
            markers: Vec::new(),
            sites: Vec::new(),
            head_groups: HeadGroups::default(),
            expanded: None,
            tick_count: COARSE_TICKS,
        };
        engine.load(data);
        engine.resize_viewport();
        engine.rescale();
        let initial = engine.next_transform(engine.transform.current());
        engine.commit(initial, 0.0, 0.0, true);
        engine
    }

    fn load(&mut self, data: PlotData) {
        self.markers = load_markers(&data.mutations);
        self.head_groups = HeadGroups::build(&self.markers);
        self.sites = data.sites;
        self.expanded = None;
    }

    fn resize_viewport(&mut self) {
        let inner = self.inner_size();
        self.transform.set_viewport_size(inner.width, inner.height);
    }

    /// Rebuild both axes for the current size, length and data.
    fn rescale(&mut self) {
        let inner = self.inner_size();
        let paddings = self.config.paddings;

        self.x_axis = Axis::linear(0.0, self.sequence_length);
        self.x_axis.set_range(0.0, inner.width);

        let (min, max) = self.value_extent();
        let mut y_axis = if self.config.use_log_scale {
            let floor = if min > 0.0 { None } else { Some(self.smallest_positive_value()) };
            let min = if min > 0.0 { min } else { f64::MIN_POSITIVE };
            let max = if max > min { max } else { 1.0_f64.max(min * 10.0) };
            let mut axis = Axis::log(min, max);
            if let Some(floor) = floor {
                // all-zero data: one decade below the top
                axis.set_tick_floor(floor.unwrap_or(max / 10.0));
            }
            axis
        } else {
            Axis::linear(0.0, if max > 0.0 { max } else { 1.0 })
        };
        y_axis.nice();
        y_axis.set_range(self.size.height - paddings.top - self.config.site_height, paddings.bottom);
        self.y_axis = y_axis;

        let current = self.transform.current();
        self.sync_x_axis(current);
    }

    fn smallest_positive_value(&self) -> Option<f64> {
        self.markers
            .iter()
            .map(|m| m.value)
            .filter(|&value| value > 0.0)
            .min_by(f64::total_cmp)
    }

    fn value_extent(&self) -> (f64, f64) {
        let values = self.markers.iter().map(|m| m.value);
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let data_max = values.fold(f64::NEG_INFINITY, f64::max);
        let min = if min.is_finite() { min } else { 0.0 };
        let max = match self.config.y_scale {
            YScale::Fixed(max) => max,
            YScale::Auto(_) if data_max.is_finite() => data_max,
            YScale::Auto(_) => 0.0,
        };
        (min, max)
    }

    fn sync_x_axis(&mut self, transform: Transform) {
        let start = self.x_to_pos_at(transform.translate.x, transform.scale);
        self.x_axis.move_to(start, transform.scale);
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Drawing area left once paddings are taken away.
    pub fn inner_size(&self) -> Size {
        let p = self.config.paddings;
        Size::new(
            (self.size.width - p.left - p.right).max(0.0),
            (self.size.height - p.top - p.bottom).max(0.0),
        )
    }

    pub fn sequence_length(&self) -> f64 {
        self.sequence_length
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.transform.bounds()
    }

    pub fn transform_engine(&self) -> &CoordinateTransformEngine {
        &self.transform
    }

    pub fn current(&self) -> Transform {
        self.transform.current()
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    pub fn position(&self) -> f64 {
        self.transform.current().translate.x
    }

    pub fn data_position(&self) -> f64 {
        self.x_to_pos(self.position())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn head_groups(&self) -> &HeadGroups {
        &self.head_groups
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Visible window of the sequence.
    pub fn visible_domain(&self) -> (f64, f64) {
        self.x_axis.domain()
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn is_animating(&self) -> bool {
        self.transform.is_animating()
    }

    /// Advance animations; `true` while frames are still needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.transform.tick(now_ms);
        self.transform.is_animating()
    }

    /// Pixels per sequence unit at scale 1.
    pub fn unit(&self) -> f64 {
        self.inner_size().width / self.sequence_length
    }

    pub fn pos_to_x(&self, pos: f64) -> f64 {
        pos * self.unit()
    }

    /// Sequence coordinate shown at the left edge for a raw offset.
    pub fn x_to_pos(&self, coord: f64) -> f64 {
        self.x_to_pos_at(coord, self.scale())
    }

    fn x_to_pos_at(&self, coord: f64, scale: f64) -> f64 {
        let unit = self.unit();
        if unit == 0.0 || scale == 0.0 {
            return 0.0;
        }
        -(coord / unit) / scale
    }

    /// Head size compensation: heads keep their on-screen size while the
    /// content is stretched.
    pub fn constant_scale(&self, scale: f64) -> f64 {
        self.bounds().max() / scale
    }

    /// Leftmost allowed raw offset at `scale`.
    pub fn position_boundary(&self, scale: f64) -> f64 {
        self.pos_to_x(self.x_axis.shift_limit(scale)) * scale
    }

    /// Pure transition: the transform a raw `(scale, translateX)` request
    /// settles to. Scale is clamped to the zoom bounds, the offset to
    /// `[boundary, 0]`, vertical translation is dropped.
    pub fn next_transform(&self, requested: Transform) -> Transform {
        let current = self.transform.current();
        let scale = if requested.scale.is_finite() && requested.scale > 0.0 {
            self.bounds().clamp(requested.scale)
        } else {
            current.scale
        };
        let position = if requested.translate.x.is_finite() {
            requested.translate.x
        } else {
            current.translate.x
        };
        let boundary = self.position_boundary(scale);
        Transform::horizontal(scale, position.max(boundary).min(0.0))
    }

    fn commit(&mut self, next: Transform, duration_ms: f64, now_ms: f64, force: bool) -> Option<PlotUpdate> {
        let previous = self.transform.current();
        if next == previous && !force {
            return None;
        }
        self.transform.transform(next.translate, next.scale, duration_ms, now_ms);
        let current = self.transform.current();
        self.sync_x_axis(current);
        // scales past the bound are clamped to exactly `max`, so equality holds at full zoom
        self.tick_count = if current.scale == self.bounds().max() { FINE_TICKS } else { COARSE_TICKS };
        Some(PlotUpdate {
            previous,
            current,
            data_position: self.x_to_pos_at(current.translate.x, current.scale),
            duration_ms: duration_ms.max(0.0),
        })
    }

    /// Clamp and apply a raw transform. `None` when nothing changed.
    pub fn apply(&mut self, requested: Transform, duration_ms: f64, now_ms: f64) -> Option<PlotUpdate> {
        let next = self.next_transform(requested);
        self.commit(next, duration_ms, now_ms, false)
    }

    /// Zoom about the middle of the plot area. Skipped when the clamped
    /// scale equals the current one.
    pub fn set_zoom(&mut self, scale: f64, duration_ms: f64, now_ms: f64) -> Option<PlotUpdate> {
        if !(scale.is_finite() && scale > 0.0) {
            log_warn!(LogComponent::Domain("Plot"), "ignoring zoom {}", scale);
            return None;
        }
        let current = self.transform.current();
        let target = self.bounds().clamp(scale);
        if target == current.scale {
            return None;
        }
        let anchor = self.inner_size().width / 2.0;
        let under_anchor = (anchor - current.translate.x) / current.scale;
        self.apply(Transform::horizontal(target, anchor - under_anchor * target), duration_ms, now_ms)
    }

    /// Move to a raw pixel offset, clamped to the shift limit.
    pub fn set_position(&mut self, offset: f64, now_ms: f64) -> Option<PlotUpdate> {
        let scale = self.scale();
        self.apply(Transform::horizontal(scale, offset), 0.0, now_ms)
    }

    /// Move so that sequence coordinate `pos` sits at the left edge.
    pub fn set_data_position(&mut self, pos: f64, duration_ms: f64, now_ms: f64) -> Option<PlotUpdate> {
        let scale = self.scale();
        let offset = self.pos_to_x(-pos) * scale;
        self.apply(Transform::horizontal(scale, offset), duration_ms, now_ms)
    }

    /// Combined gesture event: offset first, then scale, both clamped.
    pub fn set_zoom_and_move(&mut self, scale: f64, offset: f64, duration_ms: f64, now_ms: f64) -> Option<PlotUpdate> {
        self.apply(Transform::horizontal(scale, offset), duration_ms, now_ms)
    }

    /// Wheel step about `anchor_x` (plot-area pixels).
    pub fn wheel(&mut self, anchor_x: f64, factor: f64, now_ms: f64) -> Option<PlotUpdate> {
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        let raw = self.transform.zoom_gesture(Point::new(anchor_x, 0.0), factor);
        self.apply(raw, 0.0, now_ms)
    }

    /// Drag by `dx` pixels.
    pub fn drag(&mut self, dx: f64, now_ms: f64) -> Option<PlotUpdate> {
        let raw = self.transform.pan_gesture(Point::new(dx, 0.0));
        self.apply(raw, 0.0, now_ms)
    }

    /// Full re-layout for new outer dimensions and maximum zoom; the current
    /// transform is re-applied under the new geometry.
    pub fn set_size(&mut self, width: f64, height: f64, max_zoom: f64, now_ms: f64) -> PlotUpdate {
        let previous = self.transform.current();
        self.config.width = Some(width);
        self.config.height = Some(height);
        if self.transform.set_zoom_bounds(self.config.min_zoom, max_zoom) {
            self.config.max_zoom = max_zoom;
        }
        self.size = self.config.resolve_dimensions();
        self.resize_viewport();
        self.rescale();
        log_debug!(LogComponent::Domain("Plot"), "resized to {} (max zoom {})", self.size, self.bounds().max());

        let next = self.next_transform(Transform::horizontal(previous.scale, previous.translate.x));
        self.settle(previous, next, now_ms)
    }

    /// Swap the data set. Sequence length, axes, head groups and the shift
    /// limit are all recomputed; the transform is re-clamped.
    pub fn reload(&mut self, data: PlotData, sequence_length: f64, now_ms: f64) -> PlotUpdate {
        let previous = self.transform.current();
        self.sequence_length = effective_length(sequence_length, &data);
        self.config.sequence_length = self.sequence_length;
        self.load(data);
        self.rescale();
        log_debug!(
            LogComponent::Domain("Plot"),
            "reloaded {} markers, {} sites over length {}",
            self.markers.len(),
            self.sites.len(),
            self.sequence_length
        );

        let next = self.next_transform(previous);
        self.settle(previous, next, now_ms)
    }

    fn settle(&mut self, previous: Transform, next: Transform, now_ms: f64) -> PlotUpdate {
        let mut update = match self.commit(next, 0.0, now_ms, true) {
            Some(update) => update,
            None => PlotUpdate { previous, current: next, data_position: self.data_position(), duration_ms: 0.0 },
        };
        update.previous = previous;
        update
    }

    /// Fan out the cluster `marker_id` belongs to. Singletons never expand.
    pub fn head_enter(&mut self, marker_id: usize) -> Option<HeadHover> {
        let slot = self.head_groups.group_index_of(marker_id)?;
        let group = self.head_groups.group_at(slot)?;
        if !group.is_cluster() || self.expanded == Some(slot) {
            return None;
        }
        self.expanded = Some(slot);
        Some(HeadHover::Expanded { key: group.key, members: group.len() })
    }

    pub fn head_leave(&mut self, marker_id: usize) -> Option<HeadHover> {
        let slot = self.head_groups.group_index_of(marker_id)?;
        if self.expanded != Some(slot) {
            return None;
        }
        self.expanded = None;
        let group = self.head_groups.group_at(slot)?;
        Some(HeadHover::Collapsed { key: group.key })
    }

    pub fn expanded_group(&self) -> Option<usize> {
        self.expanded
    }

    pub fn baseline_y(&self) -> f64 {
        self.size.height - self.config.paddings.bottom
    }

    /// Geometry of the frame drawn at `now_ms`; mid-animation the
    /// interpolated transform is used.
    pub fn layout(&self, now_ms: f64) -> PlotLayout {
        let rendered = self.transform.rendered(now_ms);
        let (scale, position) = (rendered.scale, rendered.translate.x);
        let unit = self.unit();
        let baseline = self.baseline_y();
        let paddings = self.config.paddings;

        let mut x_axis = self.x_axis.clone();
        x_axis.move_to(self.x_to_pos_at(position, scale), scale);
        let x_ticks = x_axis.linear_tick_marks(self.tick_count);
        let y_ticks = match self.y_axis.kind() {
            ScaleKind::Log => self.y_axis.percent_tick_marks(self.size.height),
            ScaleKind::Linear => self.y_axis.integer_tick_marks(COARSE_TICKS),
        };

        let constant_scale = self.constant_scale(scale);
        let radius = unit / 2.0 * constant_scale;
        let offsets = self
            .expanded
            .and_then(|slot| self.head_groups.group_at(slot))
            .map(|group| fan_out_offsets(group.len(), unit * constant_scale))
            .unwrap_or_default();

        let needles = self
            .markers
            .iter()
            .map(|marker| {
                let slot = self.head_groups.group_index_of(marker.id);
                let group = self.head_groups.group_of(marker.id);
                let offset_x = match (slot, group) {
                    (Some(slot), Some(group)) if self.expanded == Some(slot) => group
                        .slot_of(marker.id)
                        .and_then(|i| offsets.get(i))
                        .copied()
                        .unwrap_or(0.0),
                    _ => 0.0,
                };
                let fill = self.config.color_for(&marker.category).map(str::to_string);
                let label_color = match fill.as_deref().and_then(Color::parse) {
                    Some(color) if !color.is_dark() => "black",
                    _ => "white",
                };
                let y = self.y_axis.map(marker.value);
                NeedleLayout {
                    id: marker.id,
                    position: marker.position,
                    value: marker.value,
                    category: marker.category.clone(),
                    x: marker.position * unit,
                    y_top: y,
                    y_bottom: baseline,
                    stroke_width: unit / 2.0,
                    head: HeadLayout {
                        offset_x,
                        y,
                        radius,
                        font_size: radius * 2.0,
                        dx: -radius / 2.0,
                        dy: radius / 2.0,
                        fill,
                        label: group.filter(|g| g.is_cluster()).map(|g| g.len().to_string()),
                        label_color,
                        vertical_scale: scale,
                    },
                }
            })
            .collect();

        let sites = self
            .sites
            .iter()
            .map(|site| SiteLayout {
                start: site.start,
                end: site.end,
                kind: site.kind.clone(),
                css_class: site.css_class(),
                x: site.start * unit,
                y: baseline,
                width: site.length() * unit,
                height: self.config.site_height,
                stroke_width: unit / 10.0,
                shape_x: site.length() / 2.0 * unit,
                shape_scale: (unit, 4.0),
            })
            .collect();

        let legends = &self.config.legends;
        PlotLayout {
            width: self.size.width,
            height: self.size.height,
            paddings,
            content: ContentTransform { position, scale },
            baseline_y: baseline,
            x_ticks,
            x_tick_size: self.config.site_height + 3.0,
            y_ticks,
            needles,
            sites,
            x_legend: legends.x.clone().map(|text| LegendLayout {
                text,
                x: self.size.width / 2.0,
                y: baseline,
                rotate: 0.0,
            }),
            y_legend: legends.y.clone().map(|text| LegendLayout {
                text,
                x: -(paddings.left - 15.0),
                y: self.size.height / 2.0,
                rotate: -90.0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plot::entities::MarkerRecord;

    /// 600x300 with default paddings: 510px of plot area, one pixel per unit.
    fn engine(records: &[(f64, f64)]) -> PlotScalingEngine {
        let mut config = PlotConfig::new(510.0);
        config.color_map.insert("missense".into(), "#ffff00".into());
        let data = PlotData {
            mutations: records
                .iter()
                .map(|&(pos, value)| MarkerRecord { pos, value, category: "missense".into() })
                .collect(),
            sites: vec![Site { start: 100.0, end: 140.0, kind: "phosphorylation".into() }],
        };
        PlotScalingEngine::new(config, data)
    }

    #[test]
    fn initial_state_shows_whole_sequence() {
        let plot = engine(&[(10.0, 5.0)]);
        assert_eq!(plot.unit(), 1.0);
        assert_eq!(plot.scale(), 1.0);
        assert_eq!(plot.visible_domain(), (0.0, 510.0));
        assert_eq!(plot.tick_count(), COARSE_TICKS);
    }

    #[test]
    fn zoom_keeps_plot_center() {
        let mut plot = engine(&[]);
        let update = plot.set_zoom(2.0, 0.0, 0.0).unwrap();
        assert!(update.zoom_changed());
        assert_eq!(plot.position(), -255.0);
        assert_eq!(plot.visible_domain(), (127.5, 382.5));
        assert!(plot.set_zoom(2.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn position_clamps_to_shift_limit() {
        let mut plot = engine(&[]);
        plot.set_zoom(2.0, 0.0, 0.0);
        plot.set_position(-10_000.0, 0.0);
        assert_eq!(plot.position(), -510.0);
        assert_eq!(plot.data_position(), 255.0);
        plot.set_position(40.0, 0.0);
        assert_eq!(plot.position(), 0.0);
    }

    #[test]
    fn data_position_round_trips() {
        let mut plot = engine(&[]);
        plot.set_zoom(4.0, 0.0, 0.0);
        let update = plot.set_data_position(100.0, 0.0, 0.0).unwrap();
        assert_eq!(update.data_position, 100.0);
        assert_eq!(plot.position(), -400.0);
    }

    #[test]
    fn fine_ticks_only_at_max_zoom() {
        let mut plot = engine(&[]);
        plot.set_zoom(10.0, 0.0, 0.0);
        assert_eq!(plot.tick_count(), FINE_TICKS);
        plot.set_zoom(9.0, 0.0, 0.0);
        assert_eq!(plot.tick_count(), COARSE_TICKS);
    }

    #[test]
    fn clustered_heads_fan_out_on_enter() {
        let mut plot = engine(&[(10.0, 5.0), (10.0, 5.0), (20.0, 3.0)]);
        assert!(matches!(plot.head_enter(0), Some(HeadHover::Expanded { members: 2, .. })));
        assert_eq!(plot.head_enter(2), None);

        let layout = plot.layout(0.0);
        let offsets: Vec<f64> = layout.needles.iter().map(|n| n.head.offset_x).collect();
        assert_eq!(offsets, vec![-5.0, 5.0, 0.0]);
        assert_eq!(layout.needles[0].head.radius, 5.0);
        assert_eq!(layout.needles[0].head.label.as_deref(), Some("2"));
        assert_eq!(layout.needles[0].head.label_color, "black");
        assert_eq!(layout.needles[2].head.label, None);

        assert!(matches!(plot.head_leave(1), Some(HeadHover::Collapsed { .. })));
        assert!(plot.layout(0.0).needles.iter().all(|n| n.head.offset_x == 0.0));
    }

    #[test]
    fn site_geometry_follows_unit() {
        let plot = engine(&[]);
        let layout = plot.layout(0.0);
        let site = &layout.sites[0];
        assert_eq!((site.x, site.width, site.shape_x), (100.0, 40.0, 20.0));
        assert_eq!(site.y, 260.0);
        assert_eq!(site.css_class, "site phosphorylation");
    }

    #[test]
    fn log_axis_survives_zero_values() {
        let mut config = PlotConfig::new(100.0);
        config.use_log_scale = true;
        let data = PlotData {
            mutations: vec![
                MarkerRecord { pos: 1.0, value: 0.0, category: String::new() },
                MarkerRecord { pos: 2.0, value: 40.0, category: String::new() },
            ],
            sites: Vec::new(),
        };
        let plot = PlotScalingEngine::new(config, data);
        assert!(plot.y_axis().full_domain().0 > 0.0);
        assert_eq!(plot.y_axis().full_domain().1, 100.0);
    }

    #[test]
    fn reload_recomputes_shift_limit() {
        let mut plot = engine(&[]);
        plot.set_zoom(2.0, 0.0, 0.0);
        plot.set_position(-510.0, 0.0);
        let update = plot.reload(PlotData::default(), 255.0, 0.0);
        assert_eq!(plot.unit(), 2.0);
        assert_eq!(update.position(), -510.0);
        assert_eq!(plot.visible_domain(), (127.5, 255.0));
    }

    #[test]
    fn invalid_bounds_fall_back_to_defaults() {
        let config = PlotConfig { min_zoom: 5.0, max_zoom: 2.0, ..PlotConfig::new(10.0) };
        let plot = PlotScalingEngine::new(config, PlotData::default());
        assert_eq!(plot.bounds(), ZoomBounds::default());
    }
}
