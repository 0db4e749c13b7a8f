use leptos::ev;
use leptos::prelude::*;

/// Overlay with a centered panel. Clicking the backdrop or pressing Escape
/// runs `on_close`.
#[component]
pub fn ModalOverlay(
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra classes for the panel
    #[prop(optional, into)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key while the overlay is mounted
    let keydown = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=format!("modal {}", class)
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
