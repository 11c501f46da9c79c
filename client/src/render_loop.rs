use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Scheduling phase of a canvas component's frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing pending; the next invalidation renders one frame.
    Idle,
    /// Continuous redraw: each completed frame schedules the next.
    Animating,
}

/// Pure transition logic for the frame loop.
///
/// Separated from the `requestAnimationFrame` plumbing so the lifecycle
/// rules (animated modes keep ticking, static modes render once, leaving
/// an animated mode stops the ticks) can be exercised natively.
#[derive(Clone, Copy, Debug)]
pub struct TickPlanner {
    phase: Phase,
}

impl TickPlanner {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inputs changed (mode, intensity, surface size). Always schedules a
    /// frame; the phase follows whether the active mode animates.
    pub fn on_invalidate(&mut self, animated: bool) -> bool {
        self.phase = if animated { Phase::Animating } else { Phase::Idle };
        true
    }

    /// A frame finished. Returns whether to schedule another.
    pub fn on_frame_complete(&mut self, animated: bool) -> bool {
        self.phase = if animated { Phase::Animating } else { Phase::Idle };
        animated
    }
}

/// Coalescing `requestAnimationFrame` loop for one canvas component.
///
/// `render_fn` paints a frame and returns `true` while the active mode needs
/// continuous redraw. Invalidations between frames collapse into a single
/// pending callback. Dropping the loop cancels any pending frame: every
/// exit path (unmount, mode change, surface loss) goes through `Drop`, so a
/// destroyed surface can never receive a stale tick.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    window: Option<web_sys::Window>,
    planner: Cell<TickPlanner>,
    dirty: Cell<bool>,
    scheduled: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn schedule(&self) {
        if self.scheduled.get() {
            return;
        }
        self.scheduled.set(true);
        let cb_ref = self.callback.borrow();
        let (Some(cb), Some(window)) = (cb_ref.as_ref(), self.window.as_ref()) else {
            self.scheduled.set(false);
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(_) => self.scheduled.set(false),
        }
    }
}

impl FrameLoop {
    pub fn new(render_fn: impl Fn() -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            window: web_sys::window(),
            planner: Cell::new(TickPlanner::new()),
            dirty: Cell::new(false),
            scheduled: Cell::new(false),
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner_cb = inner.clone();
        let cb = Closure::<dyn FnMut()>::new(move || {
            inner_cb.scheduled.set(false);
            inner_cb.raf_id.set(None);
            if !inner_cb.dirty.get() {
                return;
            }
            inner_cb.dirty.set(false);

            let keep_animating = render_fn();
            let mut planner = inner_cb.planner.get();
            let schedule_next = planner.on_frame_complete(keep_animating);
            inner_cb.planner.set(planner);

            if schedule_next {
                inner_cb.dirty.set(true);
                inner_cb.schedule();
            }
        });
        *inner.callback.borrow_mut() = Some(cb);

        Self { inner }
    }

    /// Mark the scene stale and make sure one frame is pending.
    pub fn invalidate(&self, animated: bool) {
        let mut planner = self.inner.planner.get();
        if planner.on_invalidate(animated) {
            self.inner.dirty.set(true);
            self.inner.schedule();
        }
        self.inner.planner.set(planner);
    }

    pub fn phase(&self) -> Phase {
        self.inner.planner.get().phase()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(raf_id) = self.inner.raf_id.replace(None)
            && let Some(window) = self.inner.window.as_ref()
        {
            let _ = window.cancel_animation_frame(raf_id);
        }
        self.inner.scheduled.set(false);
        self.inner.dirty.set(false);
        let mut planner = self.inner.planner.get();
        planner.on_invalidate(false);
        self.inner.planner.set(planner);
        // Break the callback->inner reference cycle on teardown.
        self.inner.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the planner with a fake scheduler: count how many frames get
    /// scheduled for a given mode sequence.
    fn run_frames(planner: &mut TickPlanner, animated: bool, budget: usize) -> usize {
        let mut ticks = 0;
        let mut pending = planner.on_invalidate(animated);
        while pending && ticks < budget {
            ticks += 1;
            pending = planner.on_frame_complete(animated);
        }
        ticks
    }

    #[test]
    fn animated_mode_keeps_scheduling() {
        let mut planner = TickPlanner::new();
        let ticks = run_frames(&mut planner, true, 10);
        assert_eq!(ticks, 10, "animated mode should consume the whole budget");
        assert_eq!(planner.phase(), Phase::Animating);
    }

    #[test]
    fn static_mode_renders_exactly_once() {
        let mut planner = TickPlanner::new();
        let ticks = run_frames(&mut planner, false, 10);
        assert_eq!(ticks, 1);
        assert_eq!(planner.phase(), Phase::Idle);
    }

    #[test]
    fn leaving_an_animated_mode_stops_the_ticks() {
        let mut planner = TickPlanner::new();
        assert_eq!(run_frames(&mut planner, true, 5), 5);

        // Mode switches to a static one: one settling frame, then quiet.
        let ticks = run_frames(&mut planner, false, 10);
        assert_eq!(ticks, 1);
        assert_eq!(planner.phase(), Phase::Idle);

        // No further frames without a new invalidation.
        assert!(!planner.on_frame_complete(false));
    }

    #[test]
    fn invalidation_always_schedules() {
        let mut planner = TickPlanner::new();
        assert!(planner.on_invalidate(false));
        assert!(planner.on_invalidate(true));
        assert_eq!(planner.phase(), Phase::Animating);
    }
}
