use contracts::dashboards::d401_cost_analysis::{fleet_insights, InsightKind, VehicleCostData};
use leptos::prelude::*;

use crate::shared::icons::icon;

fn kind_style(kind: InsightKind) -> (&'static str, &'static str) {
    match kind {
        InsightKind::Warning => ("insight insight--warning", "alert-triangle"),
        InsightKind::Success => ("insight insight--success", "check-circle"),
        InsightKind::Info => ("insight insight--info", "info"),
    }
}

#[component]
pub fn InsightsPanel(#[prop(into)] vehicles: Signal<Vec<VehicleCostData>>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Insights"</h3>
            {move || vehicles.with(|v| fleet_insights(v)).into_iter().map(|insight| {
                let (class, icon_name) = kind_style(insight.kind);
                view! {
                    <div class=class>
                        {icon(icon_name)}
                        <div>
                            <div class="insight__title">{insight.title}</div>
                            <div class="insight__description">{insight.description}</div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
