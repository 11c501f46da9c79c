use leptos::prelude::*;

use gyre_shared::render::RenderMode;
use gyre_shared::sim;

use crate::charts::{CoefficientChart, PolicyScatter};
use crate::stadium_grid::StadiumGrid;
use crate::ui::{GlassCard, PrecisionDial, SectionLabel};

/// "Scale. Network. Function.": full-screen snap-scrolling presentation of
/// the Spatial Durbin Model study.
#[component]
pub fn ScaleStory() -> impl IntoView {
    let far: RwSignal<f64> = RwSignal::new(sim::FAR_BASELINE);
    let intensity = Signal::derive(move || sim::stress_intensity(far.get()));
    let subject_gain = move || format!("+{:.0}%", sim::readout(far.get()).subject_gain_pct);
    let neighbor_loss = move || format!("-{:.1}%", sim::readout(far.get()).neighbor_loss_pct);

    view! {
        <div class="scale">
            // 01. Hero
            <section class="page page-light">
                <div class="hero-center">
                    <h1 class="display">"Scale. Network. Function."</h1>
                    <p class="hero-sub">
                        "A causal identification of urban vitality simulation in the Xinjiekou district."
                    </p>
                </div>
                <div class="hero-scroll-hint">"\u{2193}"</div>
            </section>

            // 02. Abstraction: the digital twin
            <section class="page page-white">
                <div class="twin-head">
                    <div>
                        <SectionLabel style="color: #1d1d1f;">"01 \u{2014} Abstraction"</SectionLabel>
                        <h2 class="heading">"The Digital Twin."</h2>
                    </div>
                    <p class="twin-blurb">
                        "Constructing a 50m\u{d7}50m mesh to capture the invisible flows. \
                         412 sensors tracking morphological DNA across the Xinjiekou district."
                    </p>
                </div>
                <div class="twin-canvas">
                    <GlassCard style="width: 100%; height: 100%; padding: 32px; background: rgba(245,245,247,0.8);">
                        <StadiumGrid mode=Signal::derive(|| RenderMode::Master) />
                        <div class="twin-legend">
                            <div class="twin-legend-title">"Morphology"</div>
                            <div class="twin-legend-items">
                                <div><span class="swatch swatch-ink" />"High Density"</div>
                                <div><span class="swatch swatch-graphite" />"Medium"</div>
                                <div><span class="swatch swatch-accent" />"Vitality Flow"</div>
                            </div>
                        </div>
                    </GlassCard>
                </div>
            </section>

            // 03. Methodology: the model
            <section class="page page-light">
                <div class="method-center">
                    <SectionLabel>"02 \u{2014} The Methodology"</SectionLabel>
                    <GlassCard style="margin-top: 48px; padding: 96px 48px; background: #fff;">
                        <div class="formula">
                            <span class="formula-y">"y"</span>
                            <span class="formula-op">"="</span>
                            <span class="formula-term formula-feedback">
                                "\u{3c1}Wy"
                                <small>"Feedback"</small>
                            </span>
                            <span class="formula-op">"+"</span>
                            <span>"X\u{3b2}"</span>
                            <span class="formula-op">"+"</span>
                            <span class="formula-term formula-spillover">
                                "WX\u{3b8}"
                                <small>"Spillover"</small>
                            </span>
                            <span class="formula-op">"+"</span>
                            <span class="formula-eps">"\u{3b5}"</span>
                        </div>
                        <p class="method-caption">
                            "The " <strong>"Spatial Durbin Model (SDM)"</strong> " allows us to \
                             mathematically separate a building's internal success from its impact \
                             on the neighborhood."
                        </p>
                    </GlassCard>
                </div>
            </section>

            // 04. Findings
            <section class="page page-white">
                <div class="results-grid">
                    <div class="results-copy">
                        <SectionLabel style="color: #d74e46;">"03 \u{2014} Findings"</SectionLabel>
                        <h2 class="heading">"The Siphon Effect."</h2>
                        <p>
                            "Contrary to traditional planning theory, density is not a universal good."
                        </p>
                        <p>
                            "Our coefficients reveal that " <strong>"FAR (Floor Area Ratio)"</strong>
                            " has a parasitic relationship with neighbors (\u{2212}0.145), while "
                            <strong>"Network Integration"</strong> " acts as a multiplier (+0.850)."
                        </p>
                    </div>
                    <div class="results-chart">
                        <GlassCard style="width: 100%; height: 100%; padding: 32px; border: 1px solid #e5e5e5;">
                            <div class="chart-title">"Impact Balance Sheet"</div>
                            <div class="chart-body">
                                <CoefficientChart />
                            </div>
                        </GlassCard>
                    </div>
                </div>
            </section>

            // 05. Stress test
            <section class="page page-dark">
                <div class="sim-grid">
                    <div class="sim-canvas">
                        <StadiumGrid
                            mode=Signal::derive(|| RenderMode::Simulation)
                            intensity=intensity
                        />
                        <div class="sim-watermark">"REAL-TIME RENDERING // GRID 380"</div>
                    </div>
                    <div class="sim-panel">
                        <div>
                            <SectionLabel style="color: rgba(255,255,255,0.5);">"04 \u{2014} Stress Test"</SectionLabel>
                            <h2 class="heading heading-inverse">"Visualizing the" <br /> "Void."</h2>
                        </div>
                        <div class="sim-console">
                            <PrecisionDial
                                label="Floor Area Ratio (Density)"
                                value=far
                                min=sim::FAR_BASELINE
                                max=sim::FAR_CEILING
                            />
                            <div class="sim-readouts">
                                <div class="sim-readout">
                                    <span>"Subject Vitality"</span>
                                    <span class="sim-readout-gain">{subject_gain}</span>
                                </div>
                                <div class="sim-readout">
                                    <span>"Neighbor Vitality"</span>
                                    <span class="sim-readout-loss">{neighbor_loss}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // 06. Policy verdict
            <section class="page page-light">
                <div class="policy-wrap">
                    <div class="policy-head">
                        <SectionLabel>"05 \u{2014} Policy Verdict"</SectionLabel>
                        <h2 class="heading">"Conditional Zoning."</h2>
                    </div>
                    <div class="policy-chart">
                        <GlassCard style="width: 100%; height: 100%; padding: 24px; background: #fff;">
                            <PolicyScatter />
                        </GlassCard>
                    </div>
                    <p class="policy-caption">
                        <strong class="policy-red">"Red Zone:"</strong>
                        " High density without integration creates dead zones."
                        <br />
                        <strong class="policy-green">"Green Zone:"</strong>
                        " High density is only permitted when matched by high network integration."
                    </p>
                </div>
            </section>

            // 07. Credits
            <section class="page page-light">
                <div class="credits-ghost">
                    <StadiumGrid mode=Signal::derive(|| RenderMode::Wireframe) />
                </div>
                <div class="credits">
                    <h1 class="display credits-title">"Credits"</h1>
                    <div class="credits-grid">
                        <div>
                            <h3>"About"</h3>
                            <p>
                                "This interactive prototype presents a novel methodology for \
                                 diagnosing urban vitality flows, fusing quantitative survey data \
                                 and geospatial information into a unified analytical framework."
                            </p>
                        </div>
                        <div>
                            <h3>"People"</h3>
                            <div class="credits-people">
                                <div>
                                    <p class="credits-person">"Zijian Qiu"</p>
                                    <p class="credits-role">"Principal Investigator"</p>
                                </div>
                                <div>
                                    <p class="credits-person">"Bing Qv"</p>
                                    <p class="credits-role">"Advisor"</p>
                                </div>
                                <p class="credits-org">"Nanjing Forestry University"</p>
                            </div>
                        </div>
                        <div>
                            <h3>"Publication & Code"</h3>
                            <div class="credits-pubs">
                                <div>
                                    <p class="credits-pub-title">"Full Research Report [PDF]"</p>
                                    <p class="credits-role">
                                        "A detailed academic paper outlining the research methodology."
                                    </p>
                                </div>
                                <div>
                                    <p class="credits-pub-title">"Project Repository [GitHub]"</p>
                                    <p class="credits-role">
                                        "Access the complete source code for this interactive prototype."
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
