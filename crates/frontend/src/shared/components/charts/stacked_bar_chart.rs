use leptos::prelude::*;

use super::geometry::{bar_percentages, chart_color, segment_percentages};
use super::{format_count, SeriesRow};

/// Horizontal stacked bars; each row is scaled to the largest row total and
/// split by series.
#[component]
pub fn StackedBarChart(
    title: String,
    #[prop(into)] series: Signal<Vec<String>>,
    #[prop(into)] rows: Signal<Vec<SeriesRow>>,
) -> impl IntoView {
    let shaped = move || {
        let rows = rows.get();
        let totals: Vec<f64> = rows.iter().map(SeriesRow::total).collect();
        rows.into_iter()
            .zip(bar_percentages(&totals))
            .collect::<Vec<_>>()
    };

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
            <div class="bar-chart">
                {move || shaped().into_iter().map(|(row, width)| {
                    let total = format_count(row.total());
                    let segments = segment_percentages(&row.values);
                    view! {
                        <div class="bar-chart__row">
                            <span class="bar-chart__label">{row.label.clone()}</span>
                            <div class="bar-chart__track">
                                <div class="bar-chart__stack" style:width=format!("{:.1}%", width)>
                                    {segments.into_iter().zip(row.values.clone()).enumerate()
                                        .filter(|(_, (share, _))| *share > 0.0)
                                        .map(|(i, (share, value))| view! {
                                            <div
                                                class="bar-chart__segment"
                                                style:width=format!("{:.1}%", share)
                                                style:background-color=chart_color(i)
                                                title=format_count(value)
                                            ></div>
                                        }).collect_view()}
                                </div>
                            </div>
                            <span class="bar-chart__value">{total}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
