use contracts::dashboards::d400_fleet_overview::{
    FleetOverviewResponse, VehicleListResponse, VehicleSummary, DEFAULT_DUE_WINDOW_DAYS,
};
use contracts::domain::a001_vehicle::{StatusBucket, VehicleRecord};
use contracts::shared::money::format_gbp;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::vehicle_sheet::VehicleTable;
use crate::dashboards::d400_fleet_overview::api;
use crate::dashboards::d400_fleet_overview::view_model::{
    bucket_count, named_counts, status_donut_data, trade_group_rows, vehicle_type_rows, DrillDown,
    TRADE_GROUP_SERIES,
};
use crate::shared::components::charts::{BarChart, DonutChart, StackedBarChart};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::side_sheet::SideSheet;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::number_format::format_thousands;

async fn load_drill_down(target: DrillDown) -> Result<VehicleListResponse, String> {
    match target {
        DrillDown::Total => api::get_vehicles_by_status("total").await,
        DrillDown::Status(bucket) => api::get_vehicles_by_status(bucket.key()).await,
        DrillDown::MotDue => api::get_vehicles_mot_due(DEFAULT_DUE_WINDOW_DAYS).await,
        DrillDown::TaxDue => api::get_vehicles_tax_due(DEFAULT_DUE_WINDOW_DAYS).await,
    }
}

fn card_tone(target: DrillDown) -> CardTone {
    match target {
        DrillDown::Status(StatusBucket::Allocated) | DrillDown::Status(StatusBucket::SpareReady) => {
            CardTone::Good
        }
        DrillDown::Status(StatusBucket::Garage)
        | DrillDown::Status(StatusBucket::DueService)
        | DrillDown::MotDue
        | DrillDown::TaxDue => CardTone::Warning,
        DrillDown::Status(StatusBucket::WrittenOff) => CardTone::Bad,
        _ => CardTone::Neutral,
    }
}

#[component]
pub fn FleetOverviewDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<VehicleSummary>);
    let (overview, set_overview) = signal(None::<FleetOverviewResponse>);
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(None::<String>);

    let sheet_target = RwSignal::new(None::<DrillDown>);
    let sheet_vehicles = RwSignal::new(Vec::<VehicleRecord>::new());
    let sheet_loading = RwSignal::new(false);
    let sheet_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_vehicle_summary().await {
                Ok(data) => set_summary.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load vehicle summary: {}", e);
                    error.set(Some(e));
                }
            }
        });
        spawn_local(async move {
            match api::get_fleet_overview().await {
                Ok(data) => set_overview.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load fleet overview: {}", e);
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let open_sheet = move |target: DrillDown| {
        sheet_target.set(Some(target));
        sheet_vehicles.set(Vec::new());
        sheet_error.set(None);
        sheet_loading.set(true);
        spawn_local(async move {
            match load_drill_down(target).await {
                Ok(list) => sheet_vehicles.set(list.vehicles),
                Err(e) => sheet_error.set(Some(e)),
            }
            sheet_loading.set(false);
        });
    };

    let mut cards: Vec<(DrillDown, &'static str, &'static str)> = vec![(DrillDown::Total, "Total Vehicles", "truck")];
    cards.extend(
        StatusBucket::ALL
            .into_iter()
            .map(|bucket| (DrillDown::Status(bucket), bucket.label(), "truck")),
    );
    cards.push((DrillDown::MotDue, "MOT Due", "calendar"));
    cards.push((DrillDown::TaxDue, "Tax Due", "calendar"));

    let card_views = cards
        .into_iter()
        .map(|(target, label, icon_name)| {
            let value = Signal::derive(move || {
                summary.get().map(|s| {
                    let count = match target {
                        DrillDown::Total => s.total,
                        DrillDown::Status(bucket) => bucket_count(&s, bucket),
                        DrillDown::MotDue => s.mot_due,
                        DrillDown::TaxDue => s.tax_due,
                    };
                    format_thousands(count as i64)
                })
            });
            view! {
                <StatCard
                    label=label.to_string()
                    icon_name=icon_name.to_string()
                    value=value
                    tone=card_tone(target)
                    on_click=Callback::new(move |_: ()| open_sheet(target))
                />
            }
        })
        .collect_view();

    let donut_data = Signal::derive(move || summary.get().map(|s| status_donut_data(&s)).unwrap_or_default());
    let trade_rows = Signal::derive(move || {
        overview.get().map(|o| trade_group_rows(&o.trade_groups)).unwrap_or_default()
    });
    let type_shape = Memo::new(move |_| {
        overview.get().map(|o| vehicle_type_rows(&o.vehicle_types)).unwrap_or_default()
    });
    let spare_data = Signal::derive(move || {
        overview.get().map(|o| named_counts(&o.spare_by_trade_group)).unwrap_or_default()
    });
    let type_totals = Signal::derive(move || {
        overview.get().map(|o| named_counts(&o.vehicle_type_totals)).unwrap_or_default()
    });
    let service_due = move || overview.get().map(|o| o.service_due).unwrap_or_default();

    let sheet_title = Signal::derive(move || {
        sheet_target
            .get()
            .map(|t| t.title(DEFAULT_DUE_WINDOW_DAYS))
            .unwrap_or_default()
    });

    view! {
        <div id="d400_fleet_overview--dashboard" class="dashboard">
            <h2 class="dashboard__title">"Fleet Overview"</h2>
            <ErrorBanner error=error />

            <Show when=move || loading.get()>
                <div class="dashboard__loading">"Loading fleet data..."</div>
            </Show>

            <div class="stat-grid">{card_views}</div>

            <div class="chart-grid">
                <DonutChart
                    title="Vehicle Status".to_string()
                    data=donut_data
                    total_label="Total Vehicles".to_string()
                />
                <StackedBarChart
                    title="Trade Group Allocation".to_string()
                    series=Signal::derive(|| TRADE_GROUP_SERIES.iter().map(|s| s.to_string()).collect())
                    rows=trade_rows
                />
                <StackedBarChart
                    title="Vehicle Types by Trade Group".to_string()
                    series=Signal::derive(move || type_shape.get().0)
                    rows=Signal::derive(move || type_shape.get().1)
                />
                <BarChart
                    title="Spare Vehicles by Trade Group".to_string()
                    data=spare_data
                    sort_desc=true
                    color=1
                />
                <BarChart
                    title="Fleet by Vehicle Type".to_string()
                    data=type_totals
                    sort_desc=true
                    color=2
                />
            </div>

            <div class="chart-card">
                <h3 class="chart-title">"Vehicles Due for Service"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Van"</th>
                            <th>"Registration"</th>
                            <th>"Trade group"</th>
                            <th class="num">"Service cost"</th>
                            <th class="num">"Maintenance cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || service_due().into_iter().map(|row| view! {
                            <tr>
                                <td>{row.van_number}</td>
                                <td>{row.reg_no}</td>
                                <td>{row.trade_group}</td>
                                <td class="num">{format_gbp(row.service_cost)}</td>
                                <td class="num">{format_gbp(row.maintenance_cost)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <SideSheet
                open=Signal::derive(move || sheet_target.get().is_some())
                title=sheet_title
                on_close=Callback::new(move |_: ()| sheet_target.set(None))
            >
                <ErrorBanner error=sheet_error />
                <Show
                    when=move || !sheet_loading.get()
                    fallback=|| view! { <div class="dashboard__loading">"Loading vehicles..."</div> }
                >
                    <VehicleTable vehicles=sheet_vehicles />
                </Show>
            </SideSheet>
        </div>
    }
}
