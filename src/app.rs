use leptos::*;
use wasm_bindgen::JsCast;

use crate::domain::plot::{NeedleLayout, PlotLayout, SiteLayout, Tick, triangle_up_path};

/// Pointer input, already converted to plot-area units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Wheel { anchor_x: f64, factor: f64 },
    Drag { dx: f64 },
    HeadEnter(usize),
    HeadLeave(usize),
}

/// Zoom factor for one wheel event: `2^(-deltaY * 0.002)`, line-mode deltas
/// counted as 120px.
pub fn wheel_factor(delta_y: f64, delta_mode: u32) -> f64 {
    let delta = -delta_y * if delta_mode == 0 { 1.0 } else { 120.0 };
    2f64.powf(delta * 0.002)
}

/// Client x of a pointer event in SVG user units, relative to the plot area.
fn plot_x(event: &web_sys::MouseEvent, layout: RwSignal<Option<PlotLayout>>) -> Option<f64> {
    let target = event.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    layout.with_untracked(|layout| {
        layout.as_ref().map(|layout| {
            (event.client_x() as f64 - rect.left()) * layout.width / rect.width() - layout.paddings.left
        })
    })
}

/// SVG rendering of a needle plot frame. Gestures are reported through
/// `on_gesture`; the owner applies them and publishes the next layout.
#[component]
pub fn NeedlePlotView(
    layout: RwSignal<Option<PlotLayout>>,
    #[prop(into)] on_gesture: Callback<Gesture>,
) -> impl IntoView {
    let drag_from = create_rw_signal(None::<f64>);

    let on_wheel = move |event: web_sys::WheelEvent| {
        event.prevent_default();
        if let Some(anchor_x) = plot_x(&event, layout) {
            let factor = wheel_factor(event.delta_y(), event.delta_mode());
            on_gesture.call(Gesture::Wheel { anchor_x, factor });
        }
    };
    let on_mouse_down = move |event: web_sys::MouseEvent| {
        drag_from.set(plot_x(&event, layout));
    };
    let on_mouse_move = move |event: web_sys::MouseEvent| {
        let (Some(from), Some(to)) = (drag_from.get_untracked(), plot_x(&event, layout)) else {
            return;
        };
        drag_from.set(Some(to));
        on_gesture.call(Gesture::Drag { dx: to - from });
    };
    let on_mouse_up = move |_| drag_from.set(None);

    view! {
        <svg
            class="needle-plot"
            on:wheel=on_wheel
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_up
            viewBox=move || layout.with(|l| l.as_ref().map(PlotLayout::view_box))
        >
            {move || layout.get().map(|layout| plot_body(layout, on_gesture))}
        </svg>
    }
}

fn plot_body(layout: PlotLayout, on_gesture: Callback<Gesture>) -> impl IntoView {
    let paddings = layout.paddings;
    let baseline = layout.baseline_y;
    let tick_size = layout.x_tick_size;

    view! {
        <g class="paddings" transform=format!("translate({} , 0)", paddings.left)>
            <g class="vertical scalable" transform=layout.content.to_svg()>
                <g>
                    {layout.sites.into_iter().map(site_view).collect_view()}
                    {layout
                        .needles
                        .into_iter()
                        .map(|needle| needle_view(needle, on_gesture))
                        .collect_view()}
                </g>
            </g>
            <rect
                fill="white"
                width=paddings.left
                height=layout.height
                transform=format!("translate(-{} , 0)", paddings.left)
            />
            <g class="y axis">{layout.y_ticks.into_iter().map(y_tick_view).collect_view()}</g>
            <g class="x axis" transform=format!("translate(0,{})", baseline)>
                {layout.x_ticks.into_iter().map(|tick| x_tick_view(tick, tick_size)).collect_view()}
            </g>
            {layout.x_legend.map(|legend| {
                view! {
                    <text class="label" x=legend.x y=legend.y dy="2.4em" style="text-anchor: middle">
                        {legend.text}
                    </text>
                }
            })}
            {layout.y_legend.map(|legend| {
                view! {
                    <text class="label" transform=legend.transform_svg() style="text-anchor: middle">
                        {legend.text}
                    </text>
                }
            })}
        </g>
    }
}

fn site_view(site: SiteLayout) -> impl IntoView {
    view! {
        <g class=site.css_class.clone() transform=format!("translate({},{})", site.x, site.y)>
            <path
                d=triangle_up_path(1.0)
                transform=site.shape_svg()
                stroke-width=site.stroke_width
            />
            <rect width=site.width height=site.height stroke-width=site.stroke_width />
        </g>
    }
}

fn needle_view(needle: NeedleLayout, on_gesture: Callback<Gesture>) -> impl IntoView {
    let id = needle.id;
    let head = needle.head;
    let label = head.label.clone().map(|label| {
        view! {
            <text font-size=head.font_size dx=head.dx dy=head.dy fill=head.label_color>
                {label}
            </text>
        }
    });

    view! {
        <g class="needle" transform=format!("translate({},0)", needle.x)>
            <line x1="0" x2="0" y1=needle.y_top y2=needle.y_bottom stroke-width=needle.stroke_width />
            <g
                class="head"
                id=format!("h_{}", id)
                transform=head.transform_svg()
                on:mouseenter=move |_| on_gesture.call(Gesture::HeadEnter(id))
                on:mouseleave=move |_| on_gesture.call(Gesture::HeadLeave(id))
            >
                <circle r=head.radius fill=head.fill.clone() />
                {label}
            </g>
        </g>
    }
}

fn x_tick_view(tick: Tick, size: f64) -> impl IntoView {
    view! {
        <g class="tick" transform=format!("translate({},0)", tick.offset)>
            <line y2=size />
            <text y={size + 3.0} dy=".71em" style="text-anchor: middle">
                {tick.label}
            </text>
        </g>
    }
}

fn y_tick_view(tick: Tick) -> impl IntoView {
    view! {
        <g class="tick" transform=format!("translate(0,{})", tick.offset)>
            <line x2="-6" />
            <text x="-9" dy=".32em" style="text-anchor: end">
                {tick.label}
            </text>
        </g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_factor_zooms_in_on_negative_delta() {
        assert!(wheel_factor(-100.0, 0) > 1.0);
        assert!(wheel_factor(100.0, 0) < 1.0);
        assert_eq!(wheel_factor(0.0, 0), 1.0);
        assert_eq!(wheel_factor(-1.0, 1), wheel_factor(-120.0, 0));
    }
}
