use contracts::dashboards::d401_cost_analysis::{AllVehicleCostsResponse, VehicleCostData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::comparison::VehicleComparison;
use super::cost_breakdown::CostBreakdownChart;
use super::cost_overview::CostOverview;
use super::cost_trends::CostTrendsChart;
use super::insights::InsightsPanel;
use super::risk::RiskIdentification;
use super::summary_cards::SummaryCards;
use super::top_costs::TopCostVehicles;
use crate::dashboards::d401_cost_analysis::api;
use crate::shared::components::error_banner::ErrorBanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Trends,
    Risk,
    Compare,
    Ledger,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::Overview,
        Section::Trends,
        Section::Risk,
        Section::Compare,
        Section::Ledger,
    ];

    fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Trends => "Trends",
            Section::Risk => "Risk",
            Section::Compare => "Compare",
            Section::Ledger => "Top Costs",
        }
    }
}

#[component]
pub fn CostAnalysisDashboard() -> impl IntoView {
    let (vehicles, set_vehicles) = signal(Vec::<VehicleCostData>::new());
    let (ledger, set_ledger) = signal(None::<AllVehicleCostsResponse>);
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(None::<String>);
    let section = RwSignal::new(Section::Overview);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_vehicle_analysis().await {
                Ok(data) => set_vehicles.set(data),
                Err(e) => {
                    log::error!("Failed to load vehicle analysis: {}", e);
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api::get_all_vehicle_costs().await {
                Ok(data) => set_ledger.set(Some(data)),
                Err(e) => log::error!("Failed to load fleet cost totals: {}", e),
            }
        });
    });

    let vehicles: Signal<Vec<VehicleCostData>> = vehicles.into();

    view! {
        <div id="d401_cost_analysis--dashboard" class="dashboard">
            <h2 class="dashboard__title">"Vehicle Cost Analysis"</h2>
            <ErrorBanner error=error />

            <Show when=move || loading.get()>
                <div class="dashboard__loading">"Loading cost data..."</div>
            </Show>

            <SummaryCards vehicles=vehicles />

            <div class="section-tabs">
                {Section::ALL.into_iter().map(|s| view! {
                    <button
                        class="section-tabs__tab"
                        class:section-tabs__tab--active=move || section.get() == s
                        on:click=move |_| section.set(s)
                    >
                        {s.label()}
                    </button>
                }).collect_view()}
            </div>

            // Sections stay mounted so picks made in one survive switching.
            <div class:hidden=move || section.get() != Section::Overview>
                <div class="chart-grid">
                    <CostOverview vehicles=vehicles />
                    <CostBreakdownChart vehicles=vehicles />
                </div>
                <InsightsPanel vehicles=vehicles />
            </div>
            <div class:hidden=move || section.get() != Section::Trends>
                <CostTrendsChart vehicles=vehicles />
            </div>
            <div class:hidden=move || section.get() != Section::Risk>
                <RiskIdentification vehicles=vehicles />
            </div>
            <div class:hidden=move || section.get() != Section::Compare>
                <VehicleComparison vehicles=vehicles />
            </div>
            <div class:hidden=move || section.get() != Section::Ledger>
                <TopCostVehicles costs=ledger />
            </div>
        </div>
    }
}
