use leptos::prelude::*;

/// Inline error message with a close button. Renders nothing while `error`
/// is `None`; closing sets it back to `None`.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{message}</span>
                <button
                    class="error-banner__close"
                    title="Dismiss"
                    on:click=move |_| error.set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}
