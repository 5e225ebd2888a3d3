use leptos::prelude::*;

use super::geometry::{chart_color, polyline, series_max, PlotArea};
use super::LineSeries;

const AREA: PlotArea = PlotArea {
    width: 640.0,
    height: 260.0,
    padding: 36.0,
};

/// Lines over a shared zero-based y axis; `labels` name the x positions.
#[component]
pub fn LineChart(
    title: String,
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<LineSeries>>,
    format: fn(f64) -> String,
) -> impl IntoView {
    let max = move || series.with(|all| series_max(all.iter().map(|s| s.values.as_slice())));

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <svg
                class="line-chart"
                viewBox=format!("0 0 {} {}", AREA.width, AREA.height)
                width="100%"
            >
                <line
                    class="line-chart__axis"
                    x1=AREA.padding
                    y1=AREA.bottom()
                    x2=AREA.width - AREA.padding
                    y2=AREA.bottom()
                />
                <text class="line-chart__tick" x="2" y=AREA.padding>{move || format(max())}</text>
                <text class="line-chart__tick" x="2" y=AREA.bottom()>{format(0.0)}</text>
                {move || {
                    let labels = labels.get();
                    labels.iter().enumerate().map(|(i, label)| view! {
                        <text
                            class="line-chart__label"
                            x=AREA.x_for(i, labels.len())
                            y=AREA.height - 8.0
                            text-anchor="middle"
                        >
                            {label.clone()}
                        </text>
                    }).collect_view()
                }}
                {move || {
                    let top = max();
                    series.get().into_iter().enumerate().map(|(i, line)| {
                        let points = AREA.points(&line.values, top);
                        view! {
                            <polyline
                                points=polyline(&points)
                                fill="none"
                                stroke=chart_color(i)
                                stroke-width="2"
                            >
                                <title>{line.name}</title>
                            </polyline>
                        }
                    }).collect_view()
                }}
            </svg>
            <div class="chart-legend">
                {move || series.get().into_iter().enumerate().map(|(i, line)| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style:background-color=chart_color(i)></span>
                        {line.name}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
