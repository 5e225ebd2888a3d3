use contracts::dashboards::d401_cost_analysis::{
    fleet_average_cost, fleet_total, highest_cost_vehicle, risk_vehicles, total_cost,
    VehicleCostData,
};
use contracts::shared::money::format_gbp_whole;
use leptos::prelude::*;

use crate::shared::components::stat_card::{CardTone, StatCard};

#[component]
pub fn SummaryCards(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let total = Signal::derive(move || Some(format_gbp_whole(vehicles.with(|v| fleet_total(v)))));
    let fleet_size = Signal::derive(move || Some(format!("{} vehicles", vehicles.with(Vec::len))));
    let average = Signal::derive(move || Some(format_gbp_whole(vehicles.with(|v| fleet_average_cost(v)))));
    let highest = Memo::new(move |_| {
        vehicles.with(|v| highest_cost_vehicle(v).map(|h| (h.name.clone(), total_cost(h))))
    });
    let attention = Signal::derive(move || Some(vehicles.with(|v| risk_vehicles(v).len()).to_string()));

    view! {
        <div class="stat-grid">
            <StatCard
                label="Total Fleet Cost".to_string()
                icon_name="pound".to_string()
                value=total
                subtitle=fleet_size
            />
            <StatCard
                label="Average per Vehicle".to_string()
                icon_name="bar-chart".to_string()
                value=average
            />
            <StatCard
                label="Highest Cost Vehicle".to_string()
                icon_name="alert-triangle".to_string()
                value=Signal::derive(move || highest.get().map(|(_, cost)| format_gbp_whole(cost)))
                subtitle=Signal::derive(move || highest.get().map(|(name, _)| name))
                tone=CardTone::Warning
            />
            <StatCard
                label="Needs Attention".to_string()
                icon_name="wrench".to_string()
                value=attention
                subtitle=Signal::derive(|| Some("high cost or rising".to_string()))
                tone=CardTone::Bad
            />
        </div>
    }
}
