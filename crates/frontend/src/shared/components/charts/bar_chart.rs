use leptos::prelude::*;

use super::geometry::{bar_percentages, chart_color};
use super::{format_count, ChartDatum};

/// Horizontal bars scaled to the largest value.
#[component]
pub fn BarChart(
    title: String,
    #[prop(into)] data: Signal<Vec<ChartDatum>>,
    /// Sort largest first before drawing
    #[prop(optional)]
    sort_desc: bool,
    #[prop(optional)] format: Option<fn(f64) -> String>,
    /// Colour index into the chart palette
    #[prop(optional)]
    color: usize,
) -> impl IntoView {
    let format = format.unwrap_or(format_count);

    let rows = move || {
        let mut items = data.get();
        if sort_desc {
            items.sort_by(|a, b| b.value.total_cmp(&a.value));
        }
        let values: Vec<f64> = items.iter().map(|d| d.value).collect();
        items
            .into_iter()
            .zip(bar_percentages(&values))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <Show
                when=move || !data.get().is_empty()
                fallback=|| view! { <div class="chart-empty">"No data"</div> }
            >
                <div class="bar-chart">
                    {move || rows().into_iter().map(|(datum, width)| {
                        view! {
                            <div class="bar-chart__row">
                                <span class="bar-chart__label">{datum.label}</span>
                                <div class="bar-chart__track">
                                    <div
                                        class="bar-chart__bar"
                                        style:width=format!("{:.1}%", width)
                                        style:background-color=chart_color(color)
                                    ></div>
                                </div>
                                <span class="bar-chart__value">{format(datum.value)}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
