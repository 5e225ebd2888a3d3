use contracts::dashboards::d401_cost_analysis::{vehicle_trend, CostTrend, VehicleCostData};
use contracts::shared::money::format_gbp_thousands;
use leptos::prelude::*;

use crate::shared::components::charts::{LineChart, LineSeries};

/// Vehicles ticked when the data first arrives.
const INITIALLY_SHOWN: usize = 3;

pub(super) fn trend_class(trend: CostTrend) -> &'static str {
    match trend {
        CostTrend::Rising => "trend trend--rising",
        CostTrend::Stable => "trend trend--stable",
        CostTrend::Declining => "trend trend--declining",
    }
}

/// Month labels of the first vehicle; all histories share the same months.
pub(super) fn month_labels(vehicles: &[VehicleCostData]) -> Vec<String> {
    vehicles
        .first()
        .map(|v| {
            v.monthly_history
                .iter()
                .map(|m| m.short_label().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn history_series(vehicles: &[&VehicleCostData]) -> Vec<LineSeries> {
    vehicles
        .iter()
        .map(|v| LineSeries {
            name: v.name.clone(),
            values: v.monthly_history.iter().map(|m| m.total).collect(),
        })
        .collect()
}

#[component]
pub fn CostTrendsChart(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    let shown = RwSignal::new(Vec::<String>::new());
    let seeded = StoredValue::new(false);

    Effect::new(move |_| {
        let ids: Vec<String> = vehicles.with(|v| v.iter().take(INITIALLY_SHOWN).map(|v| v.id.clone()).collect());
        if !ids.is_empty() && !seeded.get_value() {
            seeded.set_value(true);
            shown.set(ids);
        }
    });

    let toggle = move |id: String| {
        shown.update(|ids| {
            if let Some(pos) = ids.iter().position(|x| x == &id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    let labels = Signal::derive(move || vehicles.with(|v| month_labels(v)));
    let series = Signal::derive(move || {
        let ids = shown.get();
        vehicles.with(|all| {
            let picked: Vec<&VehicleCostData> = all.iter().filter(|v| ids.contains(&v.id)).collect();
            history_series(&picked)
        })
    });

    view! {
        <div class="chart-with-picker">
            <LineChart
                title="Monthly Cost Trends".to_string()
                labels=labels
                series=series
                format=format_gbp_thousands
            />
            <div class="vehicle-picker">
                {move || vehicles.get().into_iter().map(|v| {
                    let trend = vehicle_trend(&v);
                    let id_checked = v.id.clone();
                    let id_toggle = v.id.clone();
                    view! {
                        <label class="vehicle-picker__item">
                            <input
                                type="checkbox"
                                prop:checked=move || shown.get().contains(&id_checked)
                                on:change=move |_| toggle(id_toggle.clone())
                            />
                            <span>{v.name.clone()}</span>
                            <span class=trend_class(trend)>{trend.label()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_cost_analysis::{CostBreakdown, MonthlyCost};

    fn vehicle(id: &str, totals: &[f64]) -> VehicleCostData {
        VehicleCostData {
            id: id.into(),
            name: format!("Van {}", id),
            year: 2022,
            vehicle_type: "Van".into(),
            costs: CostBreakdown::default(),
            monthly_history: totals
                .iter()
                .enumerate()
                .map(|(i, total)| MonthlyCost {
                    month: format!("{} 2025", ["Jan", "Feb", "Mar"][i % 3]),
                    total: *total,
                })
                .collect(),
        }
    }

    #[test]
    fn labels_drop_the_year() {
        let fleet = vec![vehicle("407", &[1.0, 2.0, 3.0])];
        assert_eq!(month_labels(&fleet), vec!["Jan", "Feb", "Mar"]);
        assert!(month_labels(&[]).is_empty());
    }

    #[test]
    fn one_series_per_picked_vehicle() {
        let a = vehicle("407", &[10.0, 20.0]);
        let b = vehicle("433", &[5.0, 5.0]);
        let series = history_series(&[&a, &b]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Van 407");
        assert_eq!(series[1].values, vec![5.0, 5.0]);
    }
}
