use leptos::prelude::*;
use synaptica::shell::{self as copy, DetailTab};
use synaptica::DrugId;

use crate::ui_model::{drug_card_class, drug_card_style, tab_class};

#[component]
pub(super) fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <img class="brand-logo" src=copy::LOGO_IMAGE alt="Logo E.E.S.T. N° 6" width="50" height="50" />
                <div>
                    <h1 class="brand">{copy::TITLE}</h1>
                    <p class="subtle">{copy::SUBTITLE}</p>
                </div>
            </div>
            <div class="app-header-right">
                <p class="credit">{copy::TEACHER_CREDIT}</p>
                <p class="subtle">{copy::SCHOOL_SHORT}</p>
                <p class="subtle small">{copy::SCHOOL_LOCALITY}</p>
            </div>
        </header>
    }
}

#[component]
pub(super) fn WelcomeCard() -> impl IntoView {
    view! {
        <div class="card welcome">
            <div class="card-icon">"🧪"</div>
            <div>
                <h2>{copy::WELCOME_TITLE}</h2>
                <p class="subtle">{copy::WELCOME_BODY}</p>
            </div>
        </div>
    }
}

#[component]
pub(super) fn DrugCard(
    drug: DrugId,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<DrugId>,
) -> impl IntoView {
    view! {
        <button
            class=move || drug_card_class(selected.get())
            style=move || drug_card_style(drug, selected.get())
            on:click=move |_| on_select.run(drug)
        >
            <div class="drug-icon">{drug.icon()}</div>
            <h3>{drug.card_title()}</h3>
            <Show when=move || selected.get()>
                <div class="selected-bar" style=format!("background: {};", drug.accent())></div>
            </Show>
        </button>
    }
}

#[component]
pub(super) fn Placeholder() -> impl IntoView {
    view! {
        <div class="card placeholder">
            <div class="placeholder-icon">"🧠"</div>
            <h3>{copy::PLACEHOLDER_TITLE}</h3>
            <p class="subtle">{copy::PLACEHOLDER_BODY}</p>
        </div>
    }
}

#[component]
pub(super) fn TabBar(tab: ReadSignal<DetailTab>, set_tab: WriteSignal<DetailTab>) -> impl IntoView {
    view! {
        <nav class="tabs" role="tablist">
            {DetailTab::all()
                .iter()
                .copied()
                .map(|t| {
                    view! {
                        <button
                            class=move || tab_class(tab.get() == t)
                            role="tab"
                            aria-selected=move || (tab.get() == t).to_string()
                            on:click=move |_| set_tab.set(t)
                        >
                            <span class="tab-icon">{t.icon()}</span>
                            <span class="tab-label-long">{t.label()}</span>
                            <span class="tab-label-short">{t.short_label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub(super) fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <div>
                <p class="strong">{copy::SCHOOL_NAME}</p>
                <p>{copy::SCHOOL_ADDRESS}</p>
            </div>
            <div class="right">
                <p>{copy::FOOTER_TAGLINE}</p>
                <p class="small">"Profesora: Elisabet Martin"</p>
            </div>
        </footer>
    }
}
