use crate::domain::a001_production_item::ui::list::ProductionBoard;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Error notifications for every card on the page
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <ProductionBoard />
            <ToastHost />
        </ConfigProvider>
    }
}
