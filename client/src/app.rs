use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::home::Homepage;
use crate::scale::ScaleStory;

/// Top-level pages. The portfolio front door lives at `/`; the vitality
/// microsite keeps its historical `/scale` path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Scale,
}

impl Route {
    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Scale => "/scale",
        }
    }
}

/// Unknown paths fall back to the homepage.
pub(crate) fn route_from_path(path: &str) -> Route {
    if path == "/scale" || path.starts_with("/scale/") {
        Route::Scale
    } else {
        Route::Home
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| route_from_path(&path))
        .unwrap_or(Route::Home)
}

/// Newtype so the route signal has a distinct context type.
#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

/// Push a history entry and switch pages.
pub(crate) fn navigate(route_signal: RwSignal<Route>, route: Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(route.path()),
            );
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
    route_signal.set(route);
}

struct PopStateBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn(web_sys::PopStateEvent)>,
}

impl Drop for PopStateBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.handler.as_ref().unchecked_ref());
    }
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

/// Keep the route signal in sync with browser back/forward navigation.
fn bind_popstate(route_signal: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_: web_sys::PopStateEvent| {
        route_signal.set(current_route());
    });
    if window
        .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        POPSTATE_BINDING.with(|slot| {
            // Replacing an old binding drops (and unregisters) it.
            *slot.borrow_mut() = Some(PopStateBinding { window, handler });
        });
    }
}

/// Root component: owns the route signal and swaps pages.
#[component]
pub fn App() -> impl IntoView {
    let route: RwSignal<Route> = RwSignal::new(current_route());
    provide_context(CurrentRoute(route));
    bind_popstate(route);

    view! {
        {move || match route.get() {
            Route::Home => view! { <Homepage /> }.into_any(),
            Route::Scale => view! { <ScaleStory /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(route_from_path("/"), Route::Home);
        assert_eq!(route_from_path("/scale"), Route::Scale);
        assert_eq!(route_from_path("/scale/"), Route::Scale);
        assert_eq!(route_from_path("/scale/extra"), Route::Scale);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(route_from_path("/scales"), Route::Home);
        assert_eq!(route_from_path("/fractures/index.html"), Route::Home);
        assert_eq!(route_from_path(""), Route::Home);
    }

    #[test]
    fn route_paths_round_trip() {
        for route in [Route::Home, Route::Scale] {
            assert_eq!(route_from_path(route.path()), route);
        }
    }
}
