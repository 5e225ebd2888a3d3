use contracts::domain::a001_vehicle::VehicleRecord;
use contracts::shared::money::format_gbp;
use leptos::prelude::*;

fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Table of vehicles shown inside the drill-down side sheet.
#[component]
pub fn VehicleTable(#[prop(into)] vehicles: Signal<Vec<VehicleRecord>>) -> impl IntoView {
    view! {
        <Show
            when=move || !vehicles.get().is_empty()
            fallback=|| view! { <div class="chart-empty">"No vehicles match."</div> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Van"</th>
                        <th>"Registration"</th>
                        <th>"Status"</th>
                        <th>"Type"</th>
                        <th>"Trade group"</th>
                        <th>"MOT due"</th>
                        <th>"Tax due"</th>
                        <th class="num">"Service cost"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vehicles.get()
                        key=|v| v.id.clone()
                        children=move |v| {
                            let service = format_gbp(v.service_cost_value());
                            view! {
                                <tr>
                                    <td>{v.van_number.clone()}</td>
                                    <td>{v.reg_no.clone()}</td>
                                    <td>{v.status.as_str().to_string()}</td>
                                    <td>{v.vehicle_type.clone()}</td>
                                    <td>{v.trade_group.clone()}</td>
                                    <td>{date_cell(v.next_mot_due)}</td>
                                    <td>{date_cell(v.road_tax_due)}</td>
                                    <td class="num">{service}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
