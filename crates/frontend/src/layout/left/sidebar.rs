//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    /// Shown only to roles that may change allocations
    managers_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                ("d400_fleet_overview", tab_label_for_key("d400_fleet_overview"), "truck"),
                ("d402_driver_performance", tab_label_for_key("d402_driver_performance"), "users"),
                ("a001_vehicle_lookup", tab_label_for_key("a001_vehicle_lookup"), "search"),
            ],
            managers_only: false,
        },
        MenuGroup {
            id: "costs",
            label: "Vehicle Costs",
            icon: "pound",
            items: vec![
                ("d401_cost_analysis", tab_label_for_key("d401_cost_analysis"), "bar-chart"),
                ("d401_service_cost", tab_label_for_key("d401_service_cost"), "search"),
            ],
            managers_only: false,
        },
        MenuGroup {
            id: "assets",
            label: "Assets",
            icon: "wrench",
            items: vec![("a003_allocation", tab_label_for_key("a003_allocation"), "calendar")],
            managers_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec![
        "dashboards".to_string(),
        "costs".to_string(),
        "assets".to_string(),
    ]);

    view! {
        <div class="app-sidebar__content">
            {move || {
                let can_manage = auth_state.get().can_manage_allocations();
                get_menu_groups().into_iter().filter(|group| can_manage || !group.managers_only).map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_chevron = group_id.clone();
                    let gid_show = group_id;
                    let items_stored = StoredValue::new(group.items.clone());

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.get().as_deref() == Some(id)
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_tab(id, label)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
