use leptos::prelude::*;

use crate::app::{CurrentRoute, navigate, route_from_path};
use crate::ui::SpecRow;

/// One entry in the instruments list. Internal hrefs route in-app; external
/// ones are plain links to statically hosted sub-projects.
#[component]
fn ProjectSlot(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    tech: &'static str,
    desc: &'static str,
    href: &'static str,
    #[prop(optional)] internal: bool,
) -> impl IntoView {
    let CurrentRoute(route) = expect_context();
    let on_click = move |e: web_sys::MouseEvent| {
        if internal {
            e.prevent_default();
            navigate(route, route_from_path(href));
        }
    };

    view! {
        <a href=href on:click=on_click class="project-slot">
            <div class="project-slot-rail" />
            <div class="project-slot-grid">
                <div class="project-slot-id">"/"{id}</div>
                <div class="project-slot-main">
                    <h3>{title}</h3>
                    <p class="project-slot-subtitle">{subtitle}</p>
                </div>
                <div class="project-slot-meta">
                    <span class="project-slot-tech">{tech}</span>
                    <span class="project-slot-arrow">"\u{2197}"</span>
                </div>
            </div>
            <div class="project-slot-desc">
                <p>{desc}</p>
            </div>
        </a>
    }
}

/// Portfolio front door: dark, mono-labelled, etched-serif epigraph.
#[component]
pub fn Homepage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home-header">
                <div>
                    <h1 class="home-name">"Zijian Qiu"</h1>
                    <span class="home-role">"DATA & URBAN ANALYSIS"</span>
                </div>
                <div class="home-header-right">
                    <p>"Status: Online"</p>
                    <p class="home-header-dim">"Loc: 32.06\u{b0}N, 118.79\u{b0}E"</p>
                </div>
            </header>

            <section class="home-hero">
                <p class="home-section-tag">"/// 001_Prologue"</p>
                <blockquote class="home-epigraph">
                    <p>
                        "Turning and turning in the "
                        <span class="home-epigraph-em">"widening gyre"</span>
                        <br />
                        "The falcon cannot hear the falconer;"
                        <br />
                        "Things fall apart; the centre cannot hold..."
                    </p>
                    <footer>"\u{2014} W.B. Yeats, The Second Coming (1919)"</footer>
                </blockquote>
                <div class="home-tagline">
                    <h2>"Decoding the " <span class="home-tagline-strong">"invisible geometry"</span> " of Cities."</h2>
                </div>
            </section>

            <section class="home-narrative">
                <p class="home-section-tag">"002_Origin_Log"</p>
                <div class="home-narrative-card">
                    <div class="home-narrative-cols">
                        <div>
                            <p>
                                "My hometown " <strong>"Nanjing"</strong> " quadrupled its urban \
                                 footprint between 2000 and 2020. My coming of age paralleled the \
                                 breathtaking velocity of modern Chinese urbanization."
                            </p>
                            <p>
                                "The immense wealth and population, siphoned by land finance and \
                                 rapid development, converged here, turning the city into an "
                                <em>"ocean of stars"</em>
                                " when viewed from the hilltop at night. However, as I matured, I \
                                 realized a city is more than a physical network of skyscrapers \
                                 and subways."
                            </p>
                        </div>
                        <div class="home-narrative-col-right">
                            <p>
                                "Today, ten million active agents navigate this region daily, \
                                 generating a perpetual stream of complex, dynamic interactions at \
                                 every instant. It is a complex " <strong>"information system"</strong> "."
                            </p>
                            <p>
                                "Space shapes behavior, and behavior reshapes space: a feedback \
                                 loop driven by the exchange of information. To truly understand \
                                 the economic and political logic beneath this fourfold expansion, \
                                 I must delve into the data generated by human interactions."
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="home-instruments">
                <p class="home-section-tag">"/// 003_Instruments"</p>
                <div class="home-instrument-list">
                    <ProjectSlot
                        id="01"
                        title="Scale. Network. Function."
                        subtitle="Urban Vitality Simulation"
                        tech="WASM / SDM"
                        desc="Causal identification of urban vitality. An interactive engine simulating the 'Siphon Effect' in dense grids."
                        href="/scale"
                        internal=true
                    />
                    <ProjectSlot
                        id="02"
                        title="Unseen Fractures"
                        subtitle="Community Resilience"
                        tech="D3.JS / GRAPH"
                        desc="Decoding invisible risk structures. Visualizing post-disaster community narratives through force-directed graphs."
                        href="/fractures/index.html"
                    />
                    <ProjectSlot
                        id="03"
                        title="Algorithmic Colonization"
                        subtitle="Spatial Texture Analysis"
                        tech="THREE.JS / SHADER"
                        desc="Quantifying memory displacement. A critical analysis of how algorithmic consumption reshapes urban textures."
                        href="/colonization/index.html"
                    />
                </div>
            </section>

            <section class="home-specs">
                <p class="home-section-tag">"/// 004_Specifications"</p>
                <div class="home-specs-grid">
                    <div>
                        <h3>"Technical Architecture"</h3>
                        <SpecRow label="Core" value="Rust, TypeScript, Python, SQL" />
                        <SpecRow label="Frontend" value="Leptos, React, Tailwind" />
                        <SpecRow label="Visualization" value="Canvas, D3.js, WebGL" />
                        <SpecRow label="Spatial" value="ArcGIS, QGIS, Kepler.gl" />
                    </div>
                    <div>
                        <h3>"Research Protocols"</h3>
                        <SpecRow label="Domain" value="Urban Science / Human Geography" />
                        <SpecRow label="Methodology" value="Causal Inference / Spatial Econometrics" />
                        <SpecRow label="Interest" value="Algorithmic Urbanism / Resilience" />
                    </div>
                </div>
            </section>

            <footer class="home-footer">
                <div class="home-footer-links">
                    <a href="mailto:tsuchienchiu17@gmail.com">"Email"</a>
                    <a href="https://github.com/KEMeiolania" target="_blank" rel="noopener noreferrer">"GitHub"</a>
                </div>
                <div>"\u{a9} 2025 Z.Qiu / All Systems Operational"</div>
            </footer>
        </div>
    }
}
