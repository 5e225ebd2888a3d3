//! Page key -> view. Every page the app can open is listed here.

use crate::dashboards::{
    CostAnalysisDashboard, DriverPerformanceDashboard, FleetOverviewDashboard, ServiceCostLookup,
};
use crate::domain::a001_vehicle::ui::VehicleLookupPage;
use crate::domain::a003_allocation::ui::AllocationPage;
use leptos::prelude::*;

/// Render the content of the page with `key`; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_fleet_overview" => view! { <FleetOverviewDashboard /> }.into_any(),
        "d401_cost_analysis" => view! { <CostAnalysisDashboard /> }.into_any(),
        "d401_service_cost" => view! { <ServiceCostLookup /> }.into_any(),
        "d402_driver_performance" => view! { <DriverPerformanceDashboard /> }.into_any(),
        "a001_vehicle_lookup" => view! { <VehicleLookupPage /> }.into_any(),
        "a003_allocation" => view! { <AllocationPage /> }.into_any(),
        other => {
            log::warn!("No page registered for key '{}'", other);
            let message = format!("Unknown page: {}", other);
            view! { <div class="placeholder">{message}</div> }.into_any()
        }
    }
}
