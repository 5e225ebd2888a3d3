use contracts::domain::a002_engineer::Engineer;
use contracts::domain::a003_allocation::AllocationRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::{AllocationEditState, AllocationFormState};
use crate::domain::a003_allocation::api;
use crate::domain::a003_allocation::ui::engineer_combobox::EngineerCombobox;
use crate::shared::components::error_banner::ErrorBanner;

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Allocate `vehicle_id` to an engineer. Any running allocation of the
/// vehicle is closed by the server.
#[component]
pub fn NewAllocationForm(
    vehicle_id: String,
    #[prop(into)] engineers: Signal<Vec<Engineer>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(AllocationFormState::new(vehicle_id, today()));
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        let result = form.with_untracked(|f| {
            f.submit(|request| {
                set_saving.set(true);
                error.set(None);
                spawn_local(async move {
                    match api::create_allocation(&request).await {
                        Ok(created) => {
                            log::info!("Allocation {} created", created.allocation_id);
                            let mut message = created.message;
                            if created.previous_allocation_closed {
                                message.push_str(". The previous allocation was closed.");
                            }
                            notice.set(Some(message));
                            form.update(|f| {
                                *f = AllocationFormState::new(f.vehicle_id.clone(), today())
                            });
                            on_saved.run(());
                        }
                        Err(e) => {
                            log::warn!("Allocation create failed: {}", e);
                            error.set(Some(e));
                        }
                    }
                    set_saving.set(false);
                });
            })
        });
        if let Err(message) = result {
            error.set(Some(message));
        }
    };

    view! {
        <form class="allocation-form" on:submit=on_submit>
            <h3 class="allocation-form__title">"New allocation"</h3>
            <ErrorBanner error=error />
            {move || notice.get().map(|message| view! {
                <div class="notice notice--success">{message}</div>
            })}

            <div class="form-group">
                <label>"Engineer"</label>
                <EngineerCombobox
                    engineers=engineers
                    selected_name=Signal::derive(move || {
                        form.with(|f| f.engineer.as_ref().map(|e| e.name.clone()))
                    })
                    on_select=Callback::new(move |engineer: Engineer| {
                        form.update(|f| f.select_engineer(engineer))
                    })
                    on_clear=Callback::new(move |_: ()| form.update(|f| f.clear_engineer()))
                />
                {move || form.with(|f| f.engineer.as_ref().map(|e| e.name.clone())).map(|name| view! {
                    <div class="form-hint">"Selected: " {name}</div>
                })}
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Start date"</label>
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.start_date.clone())
                        on:input=move |ev| form.update(|f| f.set_start_date(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label>"End date (optional)"</label>
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.end_date.clone())
                        on:input=move |ev| form.update(|f| f.set_end_date(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Contact number"</label>
                <input
                    type="tel"
                    prop:value=move || form.with(|f| f.contact_number.clone())
                    on:input=move |ev| form.update(|f| f.set_contact(event_target_value(&ev)))
                />
            </div>

            <div class="form-actions">
                <span class="status-preview">
                    {move || format!("Status: {}", form.with(|f| f.status().label()))}
                </span>
                <button type="submit" class="btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Create allocation" }}
                </button>
            </div>
        </form>
    }
}

/// Edit an existing allocation in place. Clearing the end date makes it
/// current again.
#[component]
pub fn EditAllocationForm(
    record: AllocationRecord,
    #[prop(into)] engineers: Signal<Vec<Engineer>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(AllocationEditState::from_record(&record));
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = state.with_untracked(|s| {
            s.submit(|request| {
                set_saving.set(true);
                error.set(None);
                spawn_local(async move {
                    match api::update_allocation(&request).await {
                        Ok(updated) => {
                            log::info!("Allocation {} updated", updated.allocation.id);
                            on_saved.run(());
                        }
                        Err(e) => {
                            log::warn!("Allocation update failed: {}", e);
                            error.set(Some(e));
                        }
                    }
                    set_saving.set(false);
                });
            })
        });
        if let Err(message) = result {
            error.set(Some(message));
        }
    };

    view! {
        <form class="allocation-form allocation-form--edit" on:submit=on_submit>
            <h3 class="allocation-form__title">
                {move || format!("Edit allocation {}", state.with(|s| s.allocation_id().to_string()))}
            </h3>
            <ErrorBanner error=error />

            <div class="form-group">
                <label>"Engineer"</label>
                <EngineerCombobox
                    engineers=engineers
                    selected_name=Signal::derive(move || {
                        state.with(|s| s.engineer_name.clone().or_else(|| Some(s.engineer_id.clone())))
                    })
                    on_select=Callback::new(move |engineer: Engineer| {
                        state.update(|s| s.select_engineer(engineer))
                    })
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Start date"</label>
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.start_date.clone())
                        on:input=move |ev| state.update(|s| s.start_date = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"End date"</label>
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.end_date.clone())
                        on:input=move |ev| state.update(|s| s.end_date = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Contact number"</label>
                <input
                    type="tel"
                    prop:value=move || state.with(|s| s.contact_number.clone())
                    on:input=move |ev| state.update(|s| s.contact_number = event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <span class="status-preview">
                    {move || format!("Status: {}", state.with(|s| s.status().label()))}
                </span>
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </div>
        </form>
    }
}
