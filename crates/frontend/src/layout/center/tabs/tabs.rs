use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Tab strip plus the content of every open page.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <Show
                    when=move || !tabs_store.opened.get().is_empty()
                    fallback=|| view! {
                        <div class="tabs__empty">"Pick a page from the menu."</div>
                    }
                >
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </Show>
            </div>
        </div>
    }
}
