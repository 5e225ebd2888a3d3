use leptos::prelude::*;

use super::geometry::{arc_path, chart_color, donut_slices};
use super::{format_count, ChartDatum};

const SIZE: f64 = 220.0;
const OUTER_RADIUS: f64 = 100.0;
const INNER_RADIUS: f64 = 60.0;

/// Ring chart with a legend and the total underneath.
#[component]
pub fn DonutChart(
    title: String,
    #[prop(into)] data: Signal<Vec<ChartDatum>>,
    /// Caption next to the total, e.g. "Total Vehicles"
    total_label: String,
    #[prop(optional)] format: Option<fn(f64) -> String>,
) -> impl IntoView {
    let format = format.unwrap_or(format_count);
    let center = SIZE / 2.0;

    let total = move || data.get().iter().map(|d| d.value.max(0.0)).sum::<f64>();

    let slices = move || {
        let items = data.get();
        let values: Vec<f64> = items.iter().map(|d| d.value).collect();
        donut_slices(&values)
            .into_iter()
            .map(|slice| {
                let label = items[slice.index].label.clone();
                let path = arc_path(
                    center,
                    center,
                    OUTER_RADIUS,
                    INNER_RADIUS,
                    slice.start_angle,
                    slice.end_angle,
                );
                (slice, label, path)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg
                class="donut-chart"
                viewBox=format!("0 0 {} {}", SIZE, SIZE)
                width="100%"
                height="240"
            >
                {move || slices().into_iter().map(|(slice, label, path)| {
                    let tooltip = format!("{} ({:.0}%)", label, slice.fraction * 100.0);
                    view! {
                        <path d=path fill=chart_color(slice.index) stroke="white" stroke-width="2">
                            <title>{tooltip}</title>
                        </path>
                    }
                }).collect_view()}
            </svg>
            <div class="chart-legend">
                {move || data.get().into_iter().enumerate().map(|(i, datum)| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style:background-color=chart_color(i)></span>
                        {datum.label}
                        " "
                        <strong>{format(datum.value)}</strong>
                    </span>
                }).collect_view()}
            </div>
            <div class="donut-chart__total">
                <span class="donut-chart__total-value">{move || format(total())}</span>
                <span class="donut-chart__total-label">{total_label}</span>
            </div>
        </div>
    }
}
