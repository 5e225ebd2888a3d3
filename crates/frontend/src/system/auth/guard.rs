use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for roles allowed to change allocations.
#[component]
pub fn RequireAllocationManager(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().can_manage_allocations()
            fallback=|| view! {
                <div class="guard-message">"Your role can view allocations but not change them."</div>
            }
        >
            {children()}
        </Show>
    }
}
