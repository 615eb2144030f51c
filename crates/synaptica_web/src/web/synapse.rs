use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use synaptica::simulator::{RngSource, SimulationSettings, SynapseSimulator};
use synaptica::DrugId;

use crate::ui_model::{particle_style, play_button_icon, play_button_title, tick_period};

/// Animated synapse. Changing `drug` retargets the running simulator; playback
/// and particles in flight carry over.
#[component]
pub(super) fn SynapsePanel(
    #[prop(into)] drug: Signal<DrugId>,
    settings: SimulationSettings,
) -> impl IntoView {
    let sim = RwSignal::new(SynapseSimulator::with_settings(drug.get_untracked(), settings));
    let rng = StoredValue::new(RngSource(StdRng::from_entropy()));
    // At most one live interval per panel.
    let timer = StoredValue::new(None::<IntervalHandle>);
    let config = move || sim.with(|s| s.config());

    let stop_timer = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        timer.set_value(None);
    };

    let start_timer = move || {
        if timer.with_value(|t| t.is_some()) {
            return;
        }
        let tick = move || {
            rng.update_value(|r| {
                sim.update(|s| {
                    s.tick(r);
                });
            });
        };
        match set_interval_with_handle(tick, tick_period(&settings)) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(_) => {
                tracing::warn!(drug = %drug.get_untracked(), "failed to start synapse timer");
                sim.update(|s| s.pause());
            }
        }
    };

    let do_toggle = move || {
        sim.update(|s| {
            s.toggle();
        });
        if sim.with_untracked(|s| s.is_playing()) {
            start_timer();
        } else {
            stop_timer();
        }
    };

    let do_reset = move || {
        stop_timer();
        sim.update(|s| s.reset());
    };

    Effect::new(move |_| {
        let next = drug.get();
        let changed = sim.try_update(|s| s.set_drug(next)).unwrap_or(false);
        if changed && timer.with_value(|t| t.is_some()) {
            stop_timer();
            start_timer();
        }
    });

    on_cleanup(move || stop_timer());

    let playing = move || sim.with(|s| s.is_playing());

    view! {
        <div class="card synapse">
            <div class="synapse-head">
                <div>
                    <h3>"Simulación de Sinapsis"</h3>
                    <p class="subtle">{move || config().description}</p>
                </div>
                <div class="controls">
                    <button
                        class="icon-btn"
                        title=move || play_button_title(playing())
                        on:click=move |_| do_toggle()
                    >
                        {move || play_button_icon(playing())}
                    </button>
                    <button class="icon-btn" title="Reiniciar" on:click=move |_| do_reset()>
                        "↺"
                    </button>
                </div>
            </div>

            <div class="synapse-stage">
                <div class="region presynaptic">
                    <div class="terminal"></div>
                    <div class="region-label">"Neurona Presináptica"</div>
                </div>
                <div class="region cleft">
                    <div class="region-label center">"Espacio Sináptico"</div>
                </div>
                <div class="region postsynaptic">
                    <div class="receptor"></div>
                    <div class="region-label right">"Neurona Postsináptica"</div>
                </div>

                {move || {
                    sim.with(|s| {
                        s.signals()
                            .iter()
                            .map(|p| {
                                view! {
                                    <div
                                        class="particle signal"
                                        title=p.neurotransmitter
                                        style=particle_style(p.position)
                                    ></div>
                                }
                            })
                            .collect_view()
                    })
                }}
                {move || {
                    sim.with(|s| {
                        s.interferents()
                            .iter()
                            .map(|p| {
                                view! {
                                    <div class="particle interferent" style=particle_style(p.position)></div>
                                }
                            })
                            .collect_view()
                    })
                }}
                {move || {
                    sim.with(|s| s.effect_label())
                        .map(|label| view! { <div class="effect-label">{label}</div> })
                }}
            </div>

            <div class="legend">
                <div class="legend-item">
                    <span class="swatch signal"></span>
                    <span class="subtle">{move || config().primary_neurotransmitter}</span>
                </div>
                <div class="legend-item">
                    <span class="swatch interferent"></span>
                    <span class="subtle">{move || config().molecule}</span>
                </div>
                <div class="legend-item">
                    <span class="swatch vesicle"></span>
                    <span class="subtle">"Vesículas"</span>
                </div>
                <div class="legend-item">
                    <span class="swatch receptor"></span>
                    <span class="subtle">"Receptores"</span>
                </div>
            </div>
        </div>
    }
}
