use contracts::dashboards::d401_cost_analysis::{category_shares, fleet_cost_breakdown, VehicleCostData};
use contracts::shared::money::{format_gbp_thousands, format_gbp_whole};
use leptos::prelude::*;

use crate::shared::components::charts::{ChartDatum, DonutChart};
use crate::shared::number_format::format_percent;

/// Fleet spend split by cost category.
#[component]
pub fn CostBreakdownChart(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let shares = Memo::new(move |_| vehicles.with(|v| category_shares(&fleet_cost_breakdown(v))));

    let donut = Signal::derive(move || {
        shares
            .get()
            .into_iter()
            .map(|s| ChartDatum::new(s.category.label(), s.value))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="chart-stack">
            <DonutChart
                title="Cost Breakdown".to_string()
                data=donut
                total_label="Fleet total".to_string()
                format=format_gbp_thousands
            />
            <table class="data-table data-table--compact">
                <tbody>
                    {move || shares.get().into_iter().map(|s| view! {
                        <tr>
                            <td>{s.category.label()}</td>
                            <td class="num">{format_gbp_whole(s.value)}</td>
                            <td class="num">{format_percent(s.percentage, 1)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
