use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use gyre_shared::colors::{self, rgb_css, rgba_css};
use gyre_shared::scatter::{self, INTEGRATION_CEILING, SAMPLE_COUNT};
use gyre_shared::sim::{self, Predictor};

use crate::render_loop::FrameLoop;
use crate::surface::{self, ResizeBinding, Surface};

const FONT_SMALL: &str = "10px Inter, system-ui, sans-serif";
const FONT_LABEL: &str = "500 12px Inter, system-ui, sans-serif";

/// Wire a one-shot canvas: draw on mount, redraw on resize, never animate.
fn mount_static_canvas(canvas_ref: NodeRef<leptos::html::Canvas>, draw: impl Fn(&Surface) + 'static) {
    let ctx_cache: Rc<RefCell<Option<web_sys::CanvasRenderingContext2d>>> =
        Rc::new(RefCell::new(None));

    let frame_loop = Rc::new(FrameLoop::new(move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return false;
        };
        let canvas: &HtmlCanvasElement = &canvas;
        if let Some(surface) = surface::acquire(canvas, &ctx_cache) {
            surface.ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
            draw(&surface);
        }
        false
    }));

    let sched_mount = frame_loop.clone();
    Effect::new(move || sched_mount.invalidate(false));

    let resize = ResizeBinding::attach(frame_loop.clone(), || false);
    let sched_boot = frame_loop;
    let boot = Timeout::new(100, move || sched_boot.invalidate(false));
    // `Timeout`/`ResizeBinding` are not `Send`; park them in a local-storage
    // slot so the `Send + Sync` cleanup closure can reach them.
    let teardown = StoredValue::new_local(Some((boot, resize)));
    on_cleanup(move || {
        if let Some(Some((boot, resize))) = teardown.try_update_value(|slot| slot.take()) {
            boot.cancel();
            drop(resize);
        }
    });
}

/// Impact balance sheet: direct vs. spillover SDM coefficients as a
/// horizontal bar chart, x domain [-0.5, 1.0] with a zero reference line.
#[component]
pub fn CoefficientChart() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    mount_static_canvas(canvas_ref, draw_coefficients);
    view! { <canvas node_ref=canvas_ref style="display: block; width: 100%; height: 100%;" /> }
}

fn draw_coefficients(surface: &Surface) {
    const X_MIN: f64 = -0.5;
    const X_MAX: f64 = 1.0;
    const LABEL_GUTTER: f64 = 150.0;
    const MARGIN: f64 = 20.0;
    const BAR_THICKNESS: f64 = 14.0;

    let ctx = &surface.ctx;
    let plot_w = surface.width - LABEL_GUTTER - MARGIN * 2.0;
    let plot_h = surface.height - MARGIN * 2.0;
    if plot_w <= 0.0 || plot_h <= 0.0 {
        return;
    }
    let x_of = |value: f64| LABEL_GUTTER + MARGIN + (value - X_MIN) / (X_MAX - X_MIN) * plot_w;

    // Zero reference line.
    ctx.set_stroke_style_str(&rgba_css(colors::INK, 0.2));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x_of(0.0), MARGIN);
    ctx.line_to(x_of(0.0), MARGIN + plot_h);
    ctx.stroke();

    let row_h = plot_h / sim::PREDICTORS.len() as f64;
    for (i, predictor) in sim::PREDICTORS.iter().enumerate() {
        let Predictor {
            label,
            direct,
            spillover,
        } = *predictor;
        let row_top = MARGIN + i as f64 * row_h;
        let direct_y = row_top + row_h / 2.0 - BAR_THICKNESS - 2.0;
        let spill_y = row_top + row_h / 2.0 + 2.0;

        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.set_font(FONT_LABEL);
        ctx.set_fill_style_str(&rgb_css(colors::INK));
        ctx.fill_text(label, MARGIN, row_top + row_h / 2.0).ok();

        ctx.set_fill_style_str(&rgb_css(colors::INK));
        ctx.fill_rect(
            x_of(0.0),
            direct_y,
            x_of(direct) - x_of(0.0),
            BAR_THICKNESS,
        );

        let spill_color = if spillover < 0.0 {
            colors::EMBER
        } else {
            colors::ACCENT
        };
        ctx.set_fill_style_str(&rgb_css(spill_color));
        let (left, width) = if spillover < 0.0 {
            (x_of(spillover), x_of(0.0) - x_of(spillover))
        } else {
            (x_of(0.0), x_of(spillover) - x_of(0.0))
        };
        ctx.fill_rect(left, spill_y, width, BAR_THICKNESS);

        // Value annotations at the bar ends.
        ctx.set_font(FONT_SMALL);
        ctx.set_fill_style_str(&rgb_css(colors::GRAPHITE));
        ctx.fill_text(
            &format!("+{direct}"),
            x_of(direct.max(0.0)) + 6.0,
            direct_y + BAR_THICKNESS / 2.0,
        )
        .ok();
        let spill_text = if spillover > 0.0 {
            format!("+{spillover}")
        } else {
            format!("{spillover}")
        };
        let spill_text_x = if spillover < 0.0 {
            x_of(0.0) + 6.0
        } else {
            x_of(spillover) + 6.0
        };
        ctx.fill_text(&spill_text, spill_text_x, spill_y + BAR_THICKNESS / 2.0)
            .ok();
    }
}

/// Conditional zoning scatter: sampled grid cells in density/integration
/// space, colored by policy zone.
#[component]
pub fn PolicyScatter() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    mount_static_canvas(canvas_ref, draw_scatter);
    view! { <canvas node_ref=canvas_ref style="display: block; width: 100%; height: 100%;" /> }
}

/// Seed for the sampled cells; fixed so the chart is identical every load.
const SCATTER_SEED: u32 = 412;

fn draw_scatter(surface: &Surface) {
    const MARGIN: f64 = 32.0;
    const Y_MIN: f64 = -10.0;
    const POINT_RADIUS: f64 = 3.0;

    let ctx = &surface.ctx;
    let plot_w = surface.width - MARGIN * 2.0;
    let plot_h = surface.height - MARGIN * 2.0;
    if plot_w <= 0.0 || plot_h <= 0.0 {
        return;
    }
    let x_of = |density: f64| MARGIN + density / 100.0 * plot_w;
    let y_of =
        |integration: f64| MARGIN + (1.0 - (integration - Y_MIN) / (INTEGRATION_CEILING - Y_MIN)) * plot_h;

    // Faint quarter grid.
    ctx.set_stroke_style_str(&rgba_css(colors::INK, 0.05));
    ctx.set_line_width(1.0);
    for step in 0..=4 {
        let t = step as f64 / 4.0;
        ctx.begin_path();
        ctx.move_to(MARGIN + t * plot_w, MARGIN);
        ctx.line_to(MARGIN + t * plot_w, MARGIN + plot_h);
        ctx.stroke();
        ctx.begin_path();
        ctx.move_to(MARGIN, MARGIN + t * plot_h);
        ctx.line_to(MARGIN + plot_w, MARGIN + t * plot_h);
        ctx.stroke();
    }

    // Axis captions.
    ctx.set_font(FONT_SMALL);
    ctx.set_fill_style_str(&rgb_css(colors::GRAPHITE));
    ctx.set_text_align("right");
    ctx.set_text_baseline("bottom");
    ctx.fill_text("FAR", MARGIN + plot_w, MARGIN + plot_h - 4.0).ok();
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text("Integration", MARGIN + 4.0, MARGIN + 4.0).ok();

    for point in scatter::sample_cells(SCATTER_SEED, SAMPLE_COUNT) {
        ctx.set_fill_style_str(&rgba_css(point.zone.color(), 0.85));
        ctx.begin_path();
        ctx.arc(x_of(point.density), y_of(point.integration), POINT_RADIUS, 0.0, TAU)
            .ok();
        ctx.fill();
    }
}
