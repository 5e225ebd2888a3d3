use contracts::domain::a001_vehicle::VehicleDetail;
use contracts::domain::a003_allocation::AllocationRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d401_cost_analysis::api::lookup_target;
use crate::domain::a001_vehicle::api::{self, VehicleLookupError};
use crate::domain::a003_allocation::ui::history::{date_cell, AllocationHistory};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

/// Label/value pairs for the vehicle card; blanks show as "—".
fn detail_rows(detail: &VehicleDetail) -> Vec<(&'static str, String)> {
    let v = &detail.vehicle;
    let text = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("—")
            .to_string()
    };
    vec![
        ("Registration", v.reg_no.clone()),
        ("Status", v.status.as_str().to_string()),
        ("Driver", detail.driver_name.clone()),
        ("Vehicle type", v.vehicle_type.clone()),
        ("Trade group", v.trade_group.clone()),
        ("Make / model", text(&v.make_model)),
        ("Year", detail.year.map(|y| y.to_string()).unwrap_or_else(|| "—".to_string())),
        ("Transmission", text(&v.transmission)),
        ("Ownership", text(&v.vehicle_ownership)),
        ("Next MOT", date_cell(v.next_mot_due)),
        ("Road tax due", date_cell(v.road_tax_due)),
        ("Next service", date_cell(v.next_service_due)),
    ]
}

/// Everything known about one vehicle, found by van number.
#[component]
pub fn VehicleLookupPage() -> impl IntoView {
    let (van_number, set_van_number) = signal(String::new());
    let (result, set_result) = signal(None::<VehicleDetail>);
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
            match api::lookup_vehicle(&van).await {
                Ok(detail) => set_result.set(Some(detail)),
                Err(err) => {
                    log::warn!("Vehicle lookup for {} failed: {}", van, err);
                    set_result.set(None);
                    match err {
                        VehicleLookupError::NotFound { .. } => set_not_found.set(Some(err.to_string())),
                        other => error.set(Some(other.to_string())),
                    }
                }
            }
            set_loading.set(false);
        });
    };

    let allocations = Signal::derive(move || {
        result
            .get()
            .map(|d| d.allocations)
            .unwrap_or_default()
    });

    view! {
        <div id="a001_vehicle_lookup--page" class="dashboard">
            <h2 class="dashboard__title">"Vehicle Lookup"</h2>

            <form
                class="lookup-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    search();
                }
            >
                <input
                    type="text"
                    placeholder="Van number, e.g. VEH-00332"
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

            {move || result.get().map(|detail| {
                let title = format!("Van {} · {}", detail.vehicle.van_number, detail.vehicle.display_name());
                let rows = detail_rows(&detail);
                view! {
                    <div class="chart-card">
                        <h3 class="chart-title">{title}</h3>
                        <dl class="detail-list">
                            {rows.into_iter().map(|(label, value)| view! {
                                <div class="detail-list__row">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }).collect_view()}
                        </dl>
                    </div>
                    <div class="chart-card">
                        <h3 class="chart-title">"Allocation history"</h3>
                        <AllocationHistory
                            allocations=allocations
                            can_edit=false
                            on_edit=Callback::new(|_: AllocationRecord| {})
                        />
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_vehicle::{VehicleRecord, VehicleStatus};

    #[test]
    fn blank_fields_render_as_dash() {
        let vehicle = VehicleRecord {
            id: "V1".into(),
            van_number: "VEH-00332".into(),
            reg_no: "BK21EVV".into(),
            status: VehicleStatus::parse("Spare in Garage"),
            vehicle_type: "LWB High Roof".into(),
            trade_group: "Leak Detection".into(),
            service_cost: "GBP 0.00".into(),
            maintenance_cost: "GBP 0.00".into(),
            make_model: Some(" ".into()),
            transmission: None,
            vehicle_ownership: Some("Via HSBC".into()),
            next_mot_due: None,
            road_tax_due: None,
            next_service_due: None,
        };
        let detail = VehicleDetail::new(vehicle, Some(2021), Vec::new());
        let rows = detail_rows(&detail);
        let value = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(value("Status"), "Spare in Garage");
        assert_eq!(value("Driver"), "No driver assigned");
        assert_eq!(value("Make / model"), "—");
        assert_eq!(value("Year"), "2021");
        assert_eq!(value("Ownership"), "Via HSBC");
        assert_eq!(value("Next MOT"), "—");
    }
}
