use crate::domain::a001_production_item::api::fetch_items;
use crate::domain::a001_production_item::ui::card::SummaryCard;
use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use contracts::domain::a001_production_item::aggregate::ProductionItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Grid of summary cards for every production item the backend lists
#[component]
pub fn ProductionBoard() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ProductionItem>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match fetch_items(&api_base()).await {
            Ok(list) => {
                log::info!("Loaded {} of {} production items", list.items.len(), list.total);
                set_total.set(list.total);
                set_items.set(list.items);
            }
            Err(e) => {
                log::error!("Failed to load production items: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">"Production Orders"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__counter">{move || format!("{} items", total.get())}</span>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                <Spinner />
                                <span>"Loading…"</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="page__error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any();
                    }
                    let list = items.get();
                    if list.is_empty() {
                        return view! {
                            <div class="page__empty">"No production orders yet"</div>
                        }.into_any();
                    }
                    view! {
                        <div class="production-grid">
                            {list
                                .into_iter()
                                .map(|item| view! { <SummaryCard item=item /> })
                                .collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
