use contracts::dashboards::d401_cost_analysis::AllVehicleCostsResponse;
use contracts::shared::money::{format_gbp, format_gbp_whole};
use leptos::prelude::*;

use crate::shared::components::charts::{BarChart, ChartDatum};

/// Ledger totals from `/api/cost/all-vehicles`: spend per payment type and
/// the most expensive vehicles.
#[component]
pub fn TopCostVehicles(#[prop(into)] costs: Signal<Option<AllVehicleCostsResponse>>) -> impl IntoView {
    let by_type = Signal::derive(move || {
        costs
            .get()
            .map(|c| {
                c.cost_breakdown_by_type
                    .into_iter()
                    .map(|(kind, amount)| ChartDatum::new(kind, amount))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    let summary_line = move || {
        costs.get().map(|c| {
            format!(
                "{} across {} of {} vehicles",
                format_gbp_whole(c.summary.total_fleet_cost),
                c.summary.vehicles_with_costs,
                c.summary.vehicle_count
            )
        })
    };

    view! {
        <div class="chart-grid">
            <BarChart
                title="Spend by Payment Type".to_string()
                data=by_type
                sort_desc=true
                format=format_gbp_whole
                color=4
            />
            <div class="chart-card">
                <h3 class="chart-title">"Top Cost Vehicles"</h3>
                <p class="chart-subtitle">{summary_line}</p>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Van"</th>
                            <th>"Registration"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th class="num">"Total"</th>
                            <th class="num">"Monthly avg"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || costs.get().map(|c| c.top_cost_vehicles).unwrap_or_default().into_iter().map(|v| view! {
                            <tr>
                                <td>{v.van_number}</td>
                                <td>{v.registration}</td>
                                <td>{v.vehicle_type}</td>
                                <td>{v.status}</td>
                                <td class="num">{format_gbp(v.total_cost)}</td>
                                <td class="num">{format_gbp(v.monthly_average)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
