use leptos::prelude::*;
use synaptica::profile::{profile, PLACEHOLDER_IMAGE};
use synaptica::DrugId;

#[component]
pub(super) fn DrugInfo(drug: DrugId) -> impl IntoView {
    let info = profile(drug);

    let diagram = info.diagram.map(|d| {
        // Missing assets degrade to the placeholder image.
        let (src, set_src) = signal(d.src_or_placeholder());
        let alt = info.diagram_alt_text();
        view! {
            <div class="card">
                <h4>"Diagrama Científico"</h4>
                <div class="diagram-frame">
                    <img
                        src=move || src.get()
                        alt=alt
                        on:error=move |_| set_src.set(PLACEHOLDER_IMAGE)
                    />
                </div>
                <p class="caption">{d.caption}</p>
            </div>
        }
    });

    view! {
        <div class="stack">
            <div class="card">
                <div class="card-head">
                    <div class="card-icon">"ℹ️"</div>
                    <div>
                        <h3>{info.name}</h3>
                        <p class="subtle">{info.description}</p>
                    </div>
                </div>
                <div class="panel">
                    <h4>"⚡ Componente Activo"</h4>
                    <p class="subtle">{info.active_component}</p>
                </div>
                <div class="panel">
                    <h4>"🧠 Mecanismo de Acción"</h4>
                    <p class="subtle">{info.mechanism}</p>
                </div>
            </div>

            {diagram}

            <div class="card">
                <h4>"Efectos en el Organismo"</h4>
                <ul class="effects">
                    {info
                        .effects
                        .iter()
                        .map(|effect| view! { <li>{*effect}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="alert destructive" role="alert">
                <span class="strong">"Advertencia:"</span>
                " "
                {info.warning}
            </div>
        </div>
    }
}
