use crate::domain::a001_production_item::api::HttpItemSource;
use crate::domain::a001_production_item::ui::details::DetailView;
use crate::domain::a001_production_item::ui::state::{
    close_details, view_details, DetailState, FetchGuard,
};
use crate::domain::a001_production_item::ui::view_model::CardSummary;
use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_production_item::aggregate::ProductionItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Condensed view of a production item with a "View Details" action
#[component]
pub fn SummaryCard(item: ProductionItem) -> impl IntoView {
    let toasts = use_toasts();
    let detail = RwSignal::new(DetailState::Closed);

    let guard = FetchGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.invalidate());
    }

    let item_id = item.id.clone();
    let open_details = move |_| {
        if detail.get_untracked().is_loading() {
            return;
        }
        let ticket = guard.issue();
        let id = item_id.clone();
        spawn_local(async move {
            let source = HttpItemSource::new(api_base());
            view_details(&source, &toasts, &detail, &id, &ticket).await;
        });
    };

    let is_loading = Signal::derive(move || detail.with(DetailState::is_loading));
    let modal_item = Signal::derive(move || detail.with(|s| s.item().cloned()));
    let modal_visible = Signal::derive(move || detail.with(DetailState::is_open));

    let CardSummary {
        title,
        subtitle,
        status_class,
        status_label,
        fabric,
        color,
        quantity,
        stages,
    } = CardSummary::from_item(&item);

    view! {
        <article class="production-card">
            <header class="production-card__header">
                <div>
                    <h3 class="production-card__title">{title}</h3>
                    <span class="production-card__subtitle">{subtitle}</span>
                </div>
                <span class=status_class>{status_label}</span>
            </header>

            <dl class="production-card__facts">
                <dt>"Fabric"</dt>
                <dd>{fabric}</dd>
                <dt>"Color"</dt>
                <dd>{color}</dd>
                <dt>"Quantity"</dt>
                <dd>{quantity}</dd>
            </dl>

            {(!stages.is_empty()).then(|| view! {
                <ul class="production-card__dates">
                    {stages
                        .into_iter()
                        .map(|entry| view! {
                            <li>
                                {icon("calendar")}
                                <span class="production-card__stage">{entry.stage}</span>
                                <span>{entry.date}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            })}

            <footer class="production-card__footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=open_details
                    disabled=is_loading
                >
                    {move || if is_loading.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> " Loading…" }.into_any()
                    } else {
                        view! { {icon("eye")} " View Details" }.into_any()
                    }}
                </Button>
            </footer>

            <DetailView
                item=modal_item
                visible=modal_visible
                on_close=move |_| close_details(&detail)
            />
        </article>
    }
}
