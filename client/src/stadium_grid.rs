use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use gyre_shared::grid::{CityGrid, GridConfig};
use gyre_shared::render::{self, FlickerField, GridLayout, RenderMode};

use crate::render_loop::FrameLoop;
use crate::surface::{self, ResizeBinding, Surface};

/// Initial paint is deferred briefly so the container has settled layout
/// dimensions before the first size read.
const FIRST_PAINT_DELAY_MS: u32 = 100;

/// Procedural city-grid canvas filling its container.
///
/// The city is synthesized once per instance; every frame re-reads mode,
/// intensity and container dimensions, so interleaved prop updates and
/// resizes never paint from a stale snapshot. Animated modes keep the frame
/// loop running; static modes draw once per change.
#[component]
pub fn StadiumGrid(
    mode: Signal<RenderMode>,
    #[prop(into, optional)] intensity: Option<Signal<f64>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let city = Rc::new(CityGrid::synthesize(GridConfig::default()));
    let ctx_cache: Rc<RefCell<Option<web_sys::CanvasRenderingContext2d>>> =
        Rc::new(RefCell::new(None));

    let frame_loop = Rc::new(FrameLoop::new({
        let city = city.clone();
        let ctx_cache = ctx_cache.clone();
        move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return false;
            };
            let canvas: &HtmlCanvasElement = &canvas;
            let Some(surface) = surface::acquire(canvas, &ctx_cache) else {
                return false;
            };
            let mode_now = mode.get_untracked();
            let intensity_now = intensity.map(|s| s.get_untracked()).unwrap_or(0.0);
            draw_city(&surface, &city, mode_now, intensity_now, js_sys::Date::now());
            mode_now.is_animated()
        }
    }));

    // Re-render on prop changes; the first run covers the mount paint.
    let sched_props = frame_loop.clone();
    Effect::new(move || {
        let animated = mode.get().is_animated();
        if let Some(intensity) = intensity {
            intensity.track();
        }
        sched_props.invalidate(animated);
    });

    let resize = ResizeBinding::attach(frame_loop.clone(), move || {
        mode.get_untracked().is_animated()
    });

    let sched_boot = frame_loop;
    let boot = Timeout::new(FIRST_PAINT_DELAY_MS, move || {
        sched_boot.invalidate(mode.get_untracked().is_animated());
    });
    // `Timeout`/`ResizeBinding` are not `Send`; park them in a local-storage
    // slot so the `Send + Sync` cleanup closure can reach them.
    let teardown = StoredValue::new_local(Some((boot, resize)));
    on_cleanup(move || {
        if let Some(Some((boot, resize))) = teardown.try_update_value(|slot| slot.take()) {
            boot.cancel();
            drop(resize);
        }
    });

    view! { <canvas node_ref=canvas_ref style="display: block; width: 100%; height: 100%;" /> }
}

fn draw_city(surface: &Surface, city: &CityGrid, mode: RenderMode, intensity: f64, now: f64) {
    let ctx = &surface.ctx;
    ctx.clear_rect(0.0, 0.0, surface.width, surface.height);

    let Some(layout) = GridLayout::fit(&city.config, surface.width, surface.height) else {
        return;
    };
    let flicker = FlickerField::from_clock(now);

    for block in &city.blocks {
        let Some(rect) = layout.cell_rect(block) else {
            continue;
        };
        let fill = render::block_fill(&city.config, block, mode, now, intensity, &flicker);
        ctx.set_global_alpha(fill.alpha);
        ctx.set_fill_style_str(&fill.color);
        ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }
    ctx.set_global_alpha(1.0);
}
