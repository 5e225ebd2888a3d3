use leptos::prelude::*;

use super::geometry::{chart_color, series_max};
use super::SeriesRow;

/// One bar per series inside each row, all on a shared scale.
#[component]
pub fn GroupedBarChart(
    title: String,
    #[prop(into)] series: Signal<Vec<String>>,
    #[prop(into)] rows: Signal<Vec<SeriesRow>>,
    format: fn(f64) -> String,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <div class="chart-legend">
                {move || series.get().into_iter().enumerate().map(|(i, name)| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style:background-color=chart_color(i)></span>
                        {name}
                    </span>
                }).collect_view()}
            </div>
            <div class="grouped-chart">
                {move || {
                    let rows = rows.get();
                    let max = series_max(rows.iter().map(|r| r.values.as_slice()));
                    rows.into_iter().map(|row| view! {
                        <div class="grouped-chart__group">
                            <span class="grouped-chart__label">{row.label}</span>
                            {row.values.into_iter().enumerate().map(|(i, value)| {
                                let width = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                                view! {
                                    <div class="bar-chart__track">
                                        <div
                                            class="bar-chart__bar"
                                            style:width=format!("{:.1}%", width)
                                            style:background-color=chart_color(i)
                                        ></div>
                                        <span class="bar-chart__value">{format(value)}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
