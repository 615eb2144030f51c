use leptos::prelude::*;
use synaptica::levels::{levels, BASELINE_LEVEL};
use synaptica::DrugId;

use crate::ui_model::{badge_class, bar_style, dot_style};

#[component]
pub(super) fn NeurotransmitterLevels(drug: DrugId) -> impl IntoView {
    let report = levels(drug);
    let with_drug = report.with_drug_caption();

    let rows = report
        .entries
        .iter()
        .map(|nt| {
            let with_drug = with_drug.clone();
            view! {
                <div class="level-row">
                    <div class="level-head">
                        <div class="level-name">
                            <span class="dot" style=dot_style(nt.color)></span>
                            <span class="strong">{nt.name}</span>
                        </div>
                        <span class=badge_class(nt.change) title=nt.change.as_str()>
                            {nt.change.glyph()}
                            " "
                            <span class="badge-label">{nt.change_label}</span>
                        </span>
                    </div>
                    <div class="bar-captions">
                        <span>"Normal"</span>
                        <span>{with_drug}</span>
                    </div>
                    <div class="bars">
                        <div class="bar-track">
                            <div class="bar-fill" style=bar_style(BASELINE_LEVEL, None)></div>
                        </div>
                        <div class="bar-track">
                            <div class="bar-fill" style=bar_style(nt.level, Some(nt.color))></div>
                        </div>
                    </div>
                    <p class="subtle">{nt.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="stack">
            <div class="card">
                <h3>"Niveles de Neurotransmisores"</h3>
                <p class="subtle">{report.intro()}</p>
                <div class="levels">{rows}</div>
            </div>
            <div class="card summary">
                <h4>"⚡ Resumen de Efectos"</h4>
                <p class="subtle">{report.summary}</p>
            </div>
        </div>
    }
}
