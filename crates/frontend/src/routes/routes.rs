use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Shell for a signed-in user. Mounted again after every login, which
/// reopens the page named in the URL.
#[component]
fn SignedIn() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let signed_in = move || auth_state.get().is_authenticated();

    view! {
        <Show when=signed_in fallback=|| view! { <LoginPage /> }>
            <SignedIn />
        </Show>
    }
}
