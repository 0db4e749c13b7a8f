use crate::domain::a001_production_item::ui::view_model::{
    DetailRow, DetailSummary, TimelineEntry,
};
use crate::shared::icons::icon;
use crate::shared::modal::ModalOverlay;
use contracts::domain::a001_production_item::aggregate::ProductionItem;
use leptos::prelude::*;
use thaw::*;

/// Record the modal shows: only while visible and loaded
pub fn shown_item(visible: bool, item: Option<ProductionItem>) -> Option<ProductionItem> {
    item.filter(|_| visible)
}

fn detail_rows(rows: Vec<DetailRow>) -> impl IntoView {
    rows.into_iter()
        .map(|row| {
            view! {
                <div class="detail-grid__row">
                    <span class="form__label">{row.label}</span>
                    <span class="detail-grid__value">{row.value}</span>
                </div>
            }
        })
        .collect_view()
}

fn timeline_view(entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <section class="timeline">
            <h3 class="timeline__title">"Production Timeline"</h3>
            <ol class="timeline__track">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="timeline__entry">
                                <span class=entry.marker_class()>{icon(entry.icon_name())}</span>
                                <span class="timeline__stage">{entry.stage.clone()}</span>
                                <span class="timeline__date">{entry.date.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

fn detail_body(summary: DetailSummary, on_close: Callback<()>) -> impl IntoView {
    let DetailSummary {
        title,
        subtitle,
        status_class,
        status_label,
        primary_rows,
        secondary_rows,
        timeline,
    } = summary;

    view! {
        <header class="modal-header">
            <div class="modal-header__titles">
                <h2 class="modal-title">{title}</h2>
                <span class="modal-subtitle">{subtitle}</span>
            </div>
            <button
                class="button button--icon modal__close"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            >
                {icon("x")}
            </button>
        </header>

        <div class="modal-body">
            <span class=status_class>{status_label}</span>

            <div class="detail-grid">
                <div class="detail-grid__column">{detail_rows(primary_rows)}</div>
                <div class="detail-grid__column">{detail_rows(secondary_rows)}</div>
            </div>

            {(!timeline.is_empty()).then(|| timeline_view(timeline))}
        </div>

        <footer class="modal-footer">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Close"
            </Button>
            // Editing is not wired up yet; the button is a visual placeholder.
            <Button appearance=ButtonAppearance::Primary>
                {icon("edit")}
                " Edit"
            </Button>
        </footer>
    }
}

/// Full view of a production item in a modal.
///
/// Renders nothing unless `visible` is set and an item is present.
#[component]
pub fn DetailView(
    #[prop(into)] item: Signal<Option<ProductionItem>>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        shown_item(visible.get(), item.get()).map(|item| {
            view! {
                <ModalOverlay on_close=on_close class="production-detail">
                    {detail_body(DetailSummary::from_item(&item), on_close)}
                </ModalOverlay>
            }
        })
    }
}
