use contracts::dashboards::d401_cost_analysis::{risk_vehicles, VehicleCostData};
use contracts::shared::money::format_gbp_whole;
use leptos::prelude::*;

use crate::shared::number_format::format_signed_percent;

/// Vehicles that are high cost, rising, or both.
#[component]
pub fn RiskIdentification(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let rows = move || {
        vehicles.with(|all| {
            risk_vehicles(all)
                .into_iter()
                .map(|r| {
                    (
                        r.vehicle.name.clone(),
                        r.total_cost,
                        r.percent_above_average,
                        r.is_high_cost,
                        r.is_rising,
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Risk Identification"</h3>
            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <div class="chart-empty">"No vehicles flagged."</div> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Vehicle"</th>
                            <th class="num">"Annual cost"</th>
                            <th class="num">"vs average"</th>
                            <th>"Flags"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|(name, total, deviation, high, rising)| view! {
                            <tr>
                                <td>{name}</td>
                                <td class="num">{format_gbp_whole(total)}</td>
                                <td class="num">{format_signed_percent(deviation)}</td>
                                <td>
                                    {high.then(|| view! { <span class="badge badge--error">"High cost"</span> })}
                                    {rising.then(|| view! { <span class="badge badge--warning">"Rising"</span> })}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
