use contracts::dashboards::d401_cost_analysis::comparison::comparison_rows;
use contracts::dashboards::d401_cost_analysis::{
    classify_cost_tier, fleet_average_cost, total_cost, ComparisonSelection, VehicleCostData,
    MAX_COMPARED_VEHICLES,
};
use contracts::shared::money::{format_gbp_thousands, format_gbp_whole};
use leptos::prelude::*;

use super::cost_trends::{history_series, month_labels};
use crate::shared::components::charts::{GroupedBarChart, LineChart, SeriesRow};

/// Vehicles picked when the data first arrives.
const INITIALLY_COMPARED: usize = 2;

#[component]
pub fn VehicleComparison(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let selection = RwSignal::new(ComparisonSelection::default());
    let seeded = StoredValue::new(false);

    Effect::new(move |_| {
        let ids: Vec<String> =
            vehicles.with(|v| v.iter().take(INITIALLY_COMPARED).map(|v| v.id.clone()).collect());
        if !ids.is_empty() && !seeded.get_value() {
            seeded.set_value(true);
            selection.set(ComparisonSelection::new(ids));
        }
    });

    let selected = Memo::new(move |_| {
        let sel = selection.get();
        vehicles.with(|all| sel.selected(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let available = move || {
        let sel = selection.get();
        vehicles.with(|all| {
            sel.available(all)
                .into_iter()
                .map(|v| (v.id.clone(), v.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    let on_add = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if id.is_empty() {
            return;
        }
        selection.update(|sel| {
            if !sel.add(id) {
                log::debug!("Comparison already holds {} vehicles", MAX_COMPARED_VEHICLES);
            }
        });
    };

    let series_names = Signal::derive(move || selected.get().into_iter().map(|v| v.name).collect::<Vec<_>>());
    let category_rows = Signal::derive(move || {
        let picked = selected.get();
        let refs: Vec<&VehicleCostData> = picked.iter().collect();
        comparison_rows(&refs)
            .into_iter()
            .map(|row| SeriesRow {
                label: row.category.label().to_string(),
                values: row.values.into_iter().map(|(_, amount)| amount).collect(),
            })
            .collect::<Vec<_>>()
    });
    let labels = Signal::derive(move || selected.with(|v| month_labels(v)));
    let lines = Signal::derive(move || {
        let picked = selected.get();
        let refs: Vec<&VehicleCostData> = picked.iter().collect();
        history_series(&refs)
    });

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Vehicle Comparison"</h3>
            <p class="chart-subtitle">{format!("Compare up to {} vehicles side by side", MAX_COMPARED_VEHICLES)}</p>

            <div class="comparison__chips">
                {move || selected.get().into_iter().map(|v| {
                    let id = v.id.clone();
                    view! {
                        <span class="chip">
                            {v.name.clone()}
                            <button
                                class="chip__remove"
                                title="Remove"
                                on:click=move |_| selection.update(|sel| sel.remove(&id))
                            >
                                "×"
                            </button>
                        </span>
                    }
                }).collect_view()}

                <Show when=move || !selection.get().is_full() && !available().is_empty()>
                    <select class="comparison__add" on:change=on_add prop:value="">
                        <option value="">"Add vehicle..."</option>
                        {move || available().into_iter().map(|(id, name)| view! {
                            <option value=id>{name}</option>
                        }).collect_view()}
                    </select>
                </Show>
            </div>

            <div class="comparison__cards">
                {move || {
                    let average = vehicles.with(|all| fleet_average_cost(all));
                    selected.get().into_iter().map(|v| {
                        let total = total_cost(&v);
                        let tier = classify_cost_tier(total, average);
                        view! {
                            <div class="comparison__card">
                                <div class="comparison__name">{v.name.clone()}</div>
                                <div class="comparison__meta">{format!("{} · {}", v.year, v.vehicle_type)}</div>
                                <div class="comparison__total">{format_gbp_whole(total)}</div>
                                <div class="comparison__tier">{tier.label()}</div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <Show
                when=move || selected.with(|v| v.len() >= 2)
                fallback=|| view! { <div class="chart-empty">"Pick at least two vehicles to compare."</div> }
            >
                <GroupedBarChart
                    title="Cost by Category".to_string()
                    series=series_names
                    rows=category_rows
                    format=format_gbp_whole
                />
                <LineChart
                    title="Cost Trends".to_string()
                    labels=labels
                    series=lines
                    format=format_gbp_thousands
                />
            </Show>
        </div>
    }
}
