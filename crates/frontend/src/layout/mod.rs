pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

use center::Tabs;
use global_context::AppGlobalContext;
use left::Sidebar;
use top_header::TopHeader;

/// Signed-in application frame.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |    open pages    |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main data-zone="center" class="app-main">
                    <Tabs />
                </main>
            </div>
        </div>
    }
}
