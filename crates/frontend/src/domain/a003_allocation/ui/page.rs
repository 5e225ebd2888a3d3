use contracts::domain::a001_vehicle::VehicleRecord;
use contracts::domain::a002_engineer::Engineer;
use contracts::domain::a003_allocation::AllocationRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::{EditAllocationForm, NewAllocationForm};
use super::history::AllocationHistory;
use crate::domain::a003_allocation::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAllocationManager;

fn vehicle_label(v: &VehicleRecord) -> String {
    format!("Van {} · {} · {}", v.van_number, v.reg_no, v.status.as_str())
}

/// Vehicles whose van number or registration contains `query`.
fn filter_vehicles(vehicles: &[VehicleRecord], query: &str) -> Vec<VehicleRecord> {
    let needle = query.trim().to_lowercase();
    vehicles
        .iter()
        .filter(|v| {
            needle.is_empty()
                || v.van_number.to_lowercase().contains(&needle)
                || v.reg_no.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn AllocationPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.get().can_manage_allocations());

    let vehicles = RwSignal::new(Vec::<VehicleRecord>::new());
    let engineers = RwSignal::new(Vec::<Engineer>::new());
    let history = RwSignal::new(Vec::<AllocationRecord>::new());
    let selected = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<AllocationRecord>);
    let vehicle_query = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let error = RwSignal::new(None::<String>);
    let (loading_history, set_loading_history) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_vehicles().await {
                Ok(list) => vehicles.set(list),
                Err(e) => {
                    log::warn!("Loading vehicles failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
        spawn_local(async move {
            match api::fetch_engineers().await {
                Ok(list) => engineers.set(list),
                Err(e) => {
                    log::warn!("Loading engineers failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let Some(vehicle_id) = selected.get() else {
            history.set(Vec::new());
            return;
        };
        set_loading_history.set(true);
        spawn_local(async move {
            let result = api::fetch_history(&vehicle_id).await;
            // The user may have moved on to another vehicle meanwhile.
            if selected.get_untracked().as_deref() != Some(vehicle_id.as_str()) {
                return;
            }
            match result {
                Ok(list) => history.set(list),
                Err(e) => {
                    log::warn!("Loading allocations of {} failed: {}", vehicle_id, e);
                    history.set(Vec::new());
                    error.set(Some(e));
                }
            }
            set_loading_history.set(false);
        });
    });

    let shown_vehicles = Memo::new(move |_| {
        vehicles.with(|all| filter_vehicles(all, &vehicle_query.get()))
    });

    let selected_vehicle = move || {
        let id = selected.get()?;
        vehicles.with(|all| all.iter().find(|v| v.id == id).cloned())
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        reload.update(|n| *n += 1);
    });
    let on_cancel = Callback::new(move |_: ()| editing.set(None));
    let on_edit = Callback::new(move |record: AllocationRecord| editing.set(Some(record)));
    let on_delete = Callback::new(move |record: AllocationRecord| {
        let question = format!(
            "Delete the allocation of {} starting {}?",
            record.engineer_name.as_deref().unwrap_or(&record.service_resource_id),
            record.start_date.format("%d/%m/%Y")
        );
        if !window().confirm_with_message(&question).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match api::delete_allocation(&record.id).await {
                Ok(deleted) => {
                    log::info!("Allocation {} deleted", deleted.allocation_id);
                    if editing.get_untracked().is_some_and(|e| e.id == record.id) {
                        editing.set(None);
                    }
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::warn!("Deleting allocation {} failed: {}", record.id, e);
                    error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div id="a003_allocation--page" class="dashboard">
            <h2 class="dashboard__title">"Vehicle Allocations"</h2>
            <ErrorBanner error=error />

            <div class="allocation-picker">
                <input
                    type="text"
                    placeholder="Filter by van number or registration"
                    prop:value=move || vehicle_query.get()
                    on:input=move |ev| vehicle_query.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || selected.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        editing.set(None);
                        selected.set(Some(value).filter(|v| !v.is_empty()));
                    }
                >
                    <option value="">"Select a vehicle"</option>
                    <For
                        each=move || shown_vehicles.get()
                        key=|v| v.id.clone()
                        children=move |v| {
                            let label = vehicle_label(&v);
                            view! { <option value=v.id.clone()>{label}</option> }
                        }
                    />
                </select>
            </div>

            {move || selected_vehicle().map(|v| view! {
                <div class="chart-card">
                    <h3 class="chart-title">{vehicle_label(&v)}</h3>
                    <p class="chart-subtitle">
                        {format!("{} · {}", v.vehicle_type, v.trade_group)}
                    </p>
                    <Show
                        when=move || !loading_history.get()
                        fallback=|| view! { <div class="chart-empty">"Loading allocations..."</div> }
                    >
                        <AllocationHistory
                            allocations=history
                            can_edit=can_edit
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    </Show>
                </div>
            })}

            <Show when=move || selected.get().is_some()>
                <RequireAllocationManager>
                    {move || match (editing.get(), selected.get()) {
                        (Some(record), _) => view! {
                            <EditAllocationForm
                                record=record
                                engineers=engineers
                                on_saved=on_saved
                                on_cancel=on_cancel
                            />
                        }
                        .into_any(),
                        (None, Some(vehicle_id)) => view! {
                            <NewAllocationForm
                                vehicle_id=vehicle_id
                                engineers=engineers
                                on_saved=on_saved
                            />
                        }
                        .into_any(),
                        (None, None) => ().into_any(),
                    }}
                </RequireAllocationManager>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_vehicle::VehicleStatus;

    fn vehicle(id: &str, van: &str, reg: &str) -> VehicleRecord {
        VehicleRecord {
            id: id.into(),
            van_number: van.into(),
            reg_no: reg.into(),
            status: VehicleStatus::Allocated,
            vehicle_type: "Van".into(),
            trade_group: "Plumbing".into(),
            service_cost: "GBP 0.00".into(),
            maintenance_cost: "GBP 0.00".into(),
            make_model: None,
            transmission: None,
            vehicle_ownership: None,
            next_mot_due: None,
            road_tax_due: None,
            next_service_due: None,
        }
    }

    #[test]
    fn vehicle_filter_matches_van_or_registration() {
        let all = vec![vehicle("V1", "407", "AB12 CDE"), vehicle("V2", "512", "XY70 ZZZ")];
        assert_eq!(filter_vehicles(&all, "").len(), 2);
        assert_eq!(filter_vehicles(&all, "40")[0].id, "V1");
        assert_eq!(filter_vehicles(&all, " xy70 ")[0].id, "V2");
        assert!(filter_vehicles(&all, "999").is_empty());
    }
}
