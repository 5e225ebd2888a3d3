use leptos::prelude::*;

/// Panel sliding in from the right over a dimmed backdrop.
#[component]
pub fn SideSheet(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="side-sheet__backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="side-sheet">
                <header class="side-sheet__header">
                    <h3>{move || title.get()}</h3>
                    <button class="side-sheet__close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <div class="side-sheet__body">{children()}</div>
            </aside>
        </Show>
    }
}
