use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render_loop::FrameLoop;

/// Everything a draw routine needs to know about its target, captured fresh
/// at the start of the frame. Dimensions are CSS pixels; the context is
/// already scaled by `pixel_ratio`, so draw code works in CSS units.
pub struct Surface {
    pub ctx: CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

/// Size the canvas backing store to its container at device resolution and
/// hand back a [`Surface`]. Returns `None` when the container has no extent
/// yet (or the canvas is detached) and callers skip the frame.
///
/// `ctx_cache` survives across frames; resizing the backing store resets all
/// 2D context state, so the cache is invalidated whenever dimensions change.
pub fn acquire(
    canvas: &HtmlCanvasElement,
    ctx_cache: &RefCell<Option<CanvasRenderingContext2d>>,
) -> Option<Surface> {
    let parent = canvas.parent_element()?;
    let width = parent.client_width() as f64;
    let height = parent.client_height() as f64;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let pixel_ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0);

    let device_w = (width * pixel_ratio) as u32;
    let device_h = (height * pixel_ratio) as u32;
    if canvas.width() != device_w || canvas.height() != device_h {
        canvas.set_width(device_w);
        canvas.set_height(device_h);
        *ctx_cache.borrow_mut() = None;
    }

    let ctx = {
        let mut cache = ctx_cache.borrow_mut();
        if cache.is_none() {
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())?;
            ctx.scale(pixel_ratio, pixel_ratio).ok();
            *cache = Some(ctx);
        }
        cache.clone()?
    };

    Some(Surface {
        ctx,
        width,
        height,
        pixel_ratio,
    })
}

/// Window resize listener tied to a frame loop. Removed on drop so a torn
/// down component stops receiving resize callbacks.
pub struct ResizeBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn()>,
}

impl ResizeBinding {
    /// `animated` is re-read on each resize so the invalidation carries the
    /// currently active mode, not the one at attach time.
    pub fn attach(frame_loop: Rc<FrameLoop>, animated: impl Fn() -> bool + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let handler = Closure::<dyn Fn()>::new(move || {
            frame_loop.invalidate(animated());
        });
        window
            .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, handler })
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.handler.as_ref().unchecked_ref());
    }
}
