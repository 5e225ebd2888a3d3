use contracts::domain::a003_allocation::{AllocationRecord, AllocationStatus};
use leptos::prelude::*;

pub fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn status_class(status: AllocationStatus) -> &'static str {
    match status {
        AllocationStatus::Current => "badge badge--current",
        AllocationStatus::Past => "badge badge--past",
    }
}

/// Allocations of one vehicle. Edit and delete are only offered to roles
/// that may change allocations.
#[component]
pub fn AllocationHistory(
    #[prop(into)] allocations: Signal<Vec<AllocationRecord>>,
    #[prop(into)] can_edit: Signal<bool>,
    on_edit: Callback<AllocationRecord>,
    #[prop(optional)] on_delete: Option<Callback<AllocationRecord>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !allocations.get().is_empty()
            fallback=|| view! { <div class="chart-empty">"This vehicle has never been allocated."</div> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Engineer"</th>
                        <th>"Contact"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || allocations.get()
                        key=|a| (a.id.clone(), a.end_date, a.start_date, a.contact_number.clone())
                        children=move |a| {
                            let status = a.status();
                            let engineer = a
                                .engineer_name
                                .clone()
                                .unwrap_or_else(|| a.service_resource_id.clone());
                            let contact = a.contact_number.clone().unwrap_or_default();
                            let record = a.clone();
                            let row_class = if a.is_current() { "row row--current" } else { "row" };
                            let badge_class = status_class(status);
                            view! {
                                <tr class=row_class>
                                    <td>{engineer}</td>
                                    <td>{contact}</td>
                                    <td>{date_cell(Some(a.start_date))}</td>
                                    <td>{date_cell(a.end_date)}</td>
                                    <td><span class=badge_class>{status.label()}</span></td>
                                    <td>
                                        <Show when=move || can_edit.get()>
                                            <button
                                                class="btn-link"
                                                on:click={
                                                    let record = record.clone();
                                                    move |_| on_edit.run(record.clone())
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            {on_delete.map(|delete| {
                                                let record = record.clone();
                                                view! {
                                                    <button
                                                        class="btn-link btn-link--danger"
                                                        on:click=move |_| delete.run(record.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn dates_render_day_first_and_blank_as_dash() {
        assert_eq!(date_cell(NaiveDate::from_ymd_opt(2025, 4, 1)), "01/04/2025");
        assert_eq!(date_cell(None), "—");
    }

    #[test]
    fn status_badges_differ() {
        assert_ne!(
            status_class(AllocationStatus::Current),
            status_class(AllocationStatus::Past)
        );
    }
}
