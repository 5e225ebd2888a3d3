use contracts::dashboards::d401_cost_analysis::ServiceCostResponse;
use contracts::shared::money::format_gbp;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d401_cost_analysis::api::{self, lookup_target, ServiceCostError};
use crate::shared::components::charts::{BarChart, ChartDatum};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

/// Service spend of one vehicle, looked up by van number. Maintenance is
/// not part of the figures.
#[component]
pub fn ServiceCostLookup() -> impl IntoView {
    let (van_number, set_van_number) = signal(String::new());
    let (result, set_result) = signal(None::<ServiceCostResponse>);
    let (loading, set_loading) = signal(false);
    let (not_found, set_not_found) = signal(None::<String>);
    let error = RwSignal::new(None::<String>);

    let search = move || {
        let van = match lookup_target(&van_number.get_untracked()) {
            Ok(van) => van,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        set_loading.set(true);
        error.set(None);
        set_not_found.set(None);
        spawn_local(async move {
            match api::get_service_cost(&van).await {
                Ok(data) => set_result.set(Some(data)),
                Err(err) => {
                    log::warn!("Service cost lookup for {} failed: {}", van, err);
                    set_result.set(None);
                    match err {
                        ServiceCostError::NotFound { .. } => set_not_found.set(Some(err.to_string())),
                        other => error.set(Some(other.to_string())),
                    }
                }
            }
            set_loading.set(false);
        });
    };

    let by_type = Signal::derive(move || {
        result
            .get()
            .map(|r| {
                r.service_costs
                    .cost_by_type
                    .into_iter()
                    .map(|(kind, amount)| ChartDatum::new(kind, amount))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div id="d401_service_cost--page" class="dashboard">
            <h2 class="dashboard__title">"Service Cost Lookup"</h2>

            <form
                class="lookup-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    search();
                }
            >
                <input
                    type="text"
                    placeholder="Van number, e.g. 407"
                    prop:value=move || van_number.get()
                    on:input=move |ev| set_van_number.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {icon("search")}
                    {move || if loading.get() { "Searching..." } else { "Search" }}
                </button>
            </form>

            <ErrorBanner error=error />

            {move || not_found.get().map(|message| view! {
                <div class="lookup-empty">
                    {icon("alert-triangle")}
                    <span>{message}</span>
                </div>
            })}

            {move || result.get().map(|r| {
                let vehicle = r.vehicle;
                let costs = r.service_costs;
                view! {
                    <div class="chart-card">
                        <h3 class="chart-title">{format!("Van {} · {}", vehicle.van_number, vehicle.registration)}</h3>
                        <p class="chart-subtitle">{format!("{} · {}", vehicle.name, vehicle.vehicle_type)}</p>
                        <div class="stat-grid">
                            <div class="stat-card">
                                <div class="stat-card__label">"Total service cost"</div>
                                <div class="stat-card__value">{format_gbp(costs.total_cost)}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">"Monthly average"</div>
                                <div class="stat-card__value">{format_gbp(costs.monthly_average)}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__label">"Cost types"</div>
                                <div class="stat-card__value">{costs.cost_types_count}</div>
                            </div>
                        </div>
                    </div>
                }
            })}

            <Show when=move || !by_type.get().is_empty()>
                <BarChart
                    title="Cost by Type".to_string()
                    data=by_type
                    sort_desc=true
                    format=format_gbp
                />
            </Show>
        </div>
    }
}
