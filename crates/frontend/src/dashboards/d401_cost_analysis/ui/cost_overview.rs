use contracts::dashboards::d401_cost_analysis::{
    classify_cost_tier, fleet_average_cost, percent_deviation, sorted_by_cost, total_cost, CostTier,
    VehicleCostData,
};
use contracts::shared::money::format_gbp_whole;
use leptos::prelude::*;

use crate::shared::components::charts::geometry::bar_percentages;
use crate::shared::number_format::format_signed_percent;

fn tier_class(tier: CostTier) -> &'static str {
    match tier {
        CostTier::Low => "tier tier--low",
        CostTier::Average => "tier tier--average",
        CostTier::High => "tier tier--high",
    }
}

/// Every vehicle's annual cost against the fleet average.
#[component]
pub fn CostOverview(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let rows = move || {
        vehicles.with(|all| {
            let average = fleet_average_cost(all);
            let sorted = sorted_by_cost(all);
            let totals: Vec<f64> = sorted.iter().map(|v| total_cost(v)).collect();
            sorted
                .into_iter()
                .zip(bar_percentages(&totals))
                .map(|(v, width)| {
                    let total = total_cost(v);
                    (
                        v.name.clone(),
                        total,
                        width,
                        classify_cost_tier(total, average),
                        percent_deviation(total, average),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Annual Cost by Vehicle"</h3>
            <div class="bar-chart">
                {move || rows().into_iter().map(|(name, total, width, tier, deviation)| view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{name}</span>
                        <div class="bar-chart__track">
                            <div class=format!("bar-chart__bar {}", tier_class(tier)) style:width=format!("{:.1}%", width)></div>
                        </div>
                        <span class="bar-chart__value">{format_gbp_whole(total)}</span>
                        <span class=tier_class(tier) title=tier.label()>{format_signed_percent(deviation)}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
