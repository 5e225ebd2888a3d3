use contracts::dashboards::d401_cost_analysis::fleet_average;
use contracts::dashboards::d402_driver_performance::DriverMetrics;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d402_driver_performance::api::{self, DriverData};
use crate::shared::components::charts::{BarChart, ChartDatum};
use crate::shared::components::stat_card::StatCard;
use crate::shared::number_format::format_thousands;

fn format_score(value: f64) -> String {
    format!("{:.0}", value)
}

#[component]
pub fn DriverPerformanceDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DriverData>);

    Effect::new(move |_| {
        spawn_local(async move {
            set_data.set(Some(api::load_drivers().await));
        });
    });

    let drivers = move || data.get().map(|d| d.drivers().to_vec()).unwrap_or_default();

    let average_of = move |pick: fn(&DriverMetrics) -> f64| {
        let values: Vec<f64> = drivers().iter().map(pick).collect();
        fleet_average(&values)
    };

    let driver_count = Signal::derive(move || data.get().map(|d| d.drivers().len().to_string()));
    let avg_rating = Signal::derive(move || data.get().map(|_| format!("{:.1}", average_of(|d| d.avg_rating))));
    let avg_safety = Signal::derive(move || data.get().map(|_| format!("{:.0}", average_of(|d| d.safety_score as f64))));
    let total_miles = Signal::derive(move || {
        data.get().map(|_| format_thousands(drivers().iter().map(|d| d.miles_driven as i64).sum()))
    });

    let safety_chart = Signal::derive(move || {
        drivers()
            .into_iter()
            .map(|d| ChartDatum::new(d.driver_name, d.safety_score as f64))
            .collect::<Vec<_>>()
    });

    view! {
        <div id="d402_driver_performance--dashboard" class="dashboard">
            <h2 class="dashboard__title">"Driver Performance"</h2>

            {move || data.get().and_then(|d| match d {
                DriverData::Sample { reason, .. } => Some(view! {
                    <div class="notice notice--info">
                        {format!("Live driver data is unavailable ({}). Showing sample figures.", reason)}
                    </div>
                }),
                DriverData::Live(_) => None,
            })}

            <div class="stat-grid">
                <StatCard label="Drivers".to_string() icon_name="users".to_string() value=driver_count />
                <StatCard label="Average Rating".to_string() icon_name="check-circle".to_string() value=avg_rating />
                <StatCard label="Average Safety Score".to_string() icon_name="alert-triangle".to_string() value=avg_safety />
                <StatCard label="Miles Driven".to_string() icon_name="truck".to_string() value=total_miles />
            </div>

            <BarChart
                title="Safety Score by Driver".to_string()
                data=safety_chart
                sort_desc=true
                format=format_score
                color=1
            />

            <div class="chart-card">
                <h3 class="chart-title">"Driver Metrics"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Driver"</th>
                            <th class="num">"Trips"</th>
                            <th class="num">"Rating"</th>
                            <th class="num">"Safety"</th>
                            <th class="num">"MPG"</th>
                            <th class="num">"On time"</th>
                            <th class="num">"Violations"</th>
                            <th class="num">"Miles"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || drivers().into_iter().map(|d| {
                            let band = d.rating_band();
                            let miles = d.miles_label();
                            view! {
                                <tr>
                                    <td>{d.driver_name}</td>
                                    <td class="num">{d.total_trips}</td>
                                    <td class="num">
                                        <span class=format!("rating {}", band.css_modifier())>{format!("{:.1}", d.avg_rating)}</span>
                                    </td>
                                    <td class="num">{d.safety_score}</td>
                                    <td class="num">{format!("{:.1}", d.fuel_efficiency)}</td>
                                    <td class="num">{format!("{}%", d.on_time_percentage)}</td>
                                    <td class="num">{d.violations}</td>
                                    <td class="num">{miles}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
