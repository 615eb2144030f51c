use leptos::prelude::*;
use synaptica::settings::Settings;
use synaptica::shell::{DetailTab, Selection, ShellMode};
use synaptica::DrugId;

mod info;
mod levels;
mod shell;
mod synapse;

use info::DrugInfo;
use levels::NeurotransmitterLevels;
use shell::{DrugCard, Footer, Header, Placeholder, TabBar, WelcomeCard};
use synapse::SynapsePanel;

pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; keep that one.
    let _ = console_log::init_with_level(log::Level::Info);
    tracing::info!("synaptica web app starting");
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let settings = Settings::default();

    let selection = RwSignal::new(Selection::new());
    let mode = Memo::new(move |_| selection.with(|s| s.mode()));
    let selected = Memo::new(move |_| match mode.get() {
        ShellMode::Details(drug) => Some(drug),
        ShellMode::Placeholder => None,
    });
    let showing_details = Memo::new(move |_| matches!(mode.get(), ShellMode::Details(_)));
    // Only read while details are showing.
    let active_drug = Signal::derive(move || selected.get().unwrap_or(DrugId::FALLBACK));
    let (tab, set_tab) = signal(settings.default_tab);

    let on_select = Callback::new(move |drug: DrugId| {
        selection.update(|s| {
            s.select(drug);
        });
    });

    let sim_settings = settings.simulation;

    view! {
        <div class="page">
            <Header />
            <main class="container">
                <WelcomeCard />

                <section class="drug-grid">
                    {DrugId::ALL
                        .into_iter()
                        .map(|drug| {
                            let is_selected = Signal::derive(move || selected.get() == Some(drug));
                            view! {
                                <DrugCard
                                    drug=drug
                                    selected=is_selected
                                    on_select=on_select
                                />
                            }
                        })
                        .collect_view()}
                </section>

                // The details section stays mounted across drug changes so the
                // running animation keeps its state.
                <Show when=move || showing_details.get() fallback=|| view! { <Placeholder /> }>
                    <section class="details">
                        <TabBar tab=tab set_tab=set_tab />
                        {move || match tab.get() {
                            DetailTab::Simulation => {
                                view! { <SynapsePanel drug=active_drug settings=sim_settings /> }
                                    .into_any()
                            }
                            DetailTab::Info => {
                                (move || view! { <DrugInfo drug=active_drug.get() /> }).into_any()
                            }
                            DetailTab::Levels => {
                                (move || view! { <NeurotransmitterLevels drug=active_drug.get() /> })
                                    .into_any()
                            }
                        }}
                    </section>
                </Show>
            </main>
            <Footer />
        </div>
    }
}
