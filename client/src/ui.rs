use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Frosted-glass container used by the microsite sections.
#[component]
pub fn GlassCard(#[prop(optional)] style: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="glass-card" style=style>
            {children()}
        </div>
    }
}

/// Uppercase tracked section label ("01 — Abstraction").
#[component]
pub fn SectionLabel(#[prop(optional)] style: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class="section-label" style=style>
            {children()}
        </span>
    }
}

/// Slider styled after high-end audio gear: label, numeric readout, track
/// with a filled portion and a floating handle. Emits raw FAR values.
#[component]
pub fn PrecisionDial(
    label: &'static str,
    value: RwSignal<f64>,
    min: f64,
    max: f64,
) -> impl IntoView {
    let fraction = move || ((value.get() - min) / (max - min)).clamp(0.0, 1.0);

    let on_input = move |e: web_sys::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        if let Ok(next) = input.value().parse::<f64>() {
            value.set(next.clamp(min, max));
        }
    };

    view! {
        <div class="dial">
            <div class="dial-head">
                <SectionLabel>{label}</SectionLabel>
                <span class="dial-value">{move || format!("{:.2}", value.get())}</span>
            </div>
            <div class="dial-track-wrap">
                <input
                    type="range"
                    min=min
                    max=max
                    step="0.01"
                    prop:value=move || value.get().to_string()
                    on:input=on_input
                    class="dial-input"
                />
                <div class="dial-track">
                    <div
                        class="dial-track-fill"
                        style:width=move || format!("{}%", fraction() * 100.0)
                    />
                </div>
                <div
                    class="dial-handle"
                    style:left=move || format!("calc({}% - 16px)", fraction() * 100.0)
                >
                    <div class="dial-handle-dot" />
                </div>
            </div>
        </div>
    }
}

/// Key/value row for the homepage specification tables.
#[component]
pub fn SpecRow(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="spec-row">
            <span class="spec-row-label">{label}</span>
            <span class="spec-row-value">{value}</span>
        </div>
    }
}
