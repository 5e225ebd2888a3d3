use contracts::domain::a002_engineer::{filter_engineers, Engineer};
use leptos::prelude::*;

/// Searchable single-select over engineers. Matches name, contact number
/// or email; selecting hands the whole engineer to `on_select`.
#[component]
pub fn EngineerCombobox(
    #[prop(into)] engineers: Signal<Vec<Engineer>>,
    /// Name shown while the list is closed.
    #[prop(into)]
    selected_name: Signal<Option<String>>,
    on_select: Callback<Engineer>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);

    let matches = Memo::new(move |_| engineers.with(|all| filter_engineers(all, &query.get())));

    let choose = move |engineer: Engineer| {
        set_query.set(String::new());
        set_open.set(false);
        on_select.run(engineer);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => set_open.set(false),
        "Enter" => {
            ev.prevent_default();
            if let Some(first) = matches.with_untracked(|m| m.first().cloned()) {
                choose(first);
            }
        }
        _ => {}
    };

    view! {
        <div class="combobox">
            <div class="combobox__control">
                <input
                    type="text"
                    class="combobox__input"
                    placeholder=move || {
                        selected_name.get().unwrap_or_else(|| "Search engineers...".to_string())
                    }
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                        set_open.set(true);
                    }
                    on:focus=move |_| set_open.set(true)
                    on:blur=move |_| set_open.set(false)
                    on:keydown=on_keydown
                />
                {move || {
                    on_clear
                        .filter(|_| selected_name.get().is_some())
                        .map(|clear| view! {
                            <button
                                type="button"
                                class="combobox__clear"
                                title="Clear"
                                on:click=move |_| clear.run(())
                            >
                                "×"
                            </button>
                        })
                }}
            </div>
            <Show when=move || open.get()>
                <ul class="combobox__list" role="listbox">
                    <Show
                        when=move || !matches.get().is_empty()
                        fallback=|| view! { <li class="combobox__empty">"No engineers found"</li> }
                    >
                        <For
                            each=move || matches.get()
                            key=|e| e.id.clone()
                            children=move |engineer| {
                                let detail = engineer
                                    .contact_number
                                    .clone()
                                    .or_else(|| engineer.email.clone())
                                    .unwrap_or_default();
                                let name = engineer.name.clone();
                                view! {
                                    <li
                                        class="combobox__option"
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            choose(engineer.clone());
                                        }
                                    >
                                        <span class="combobox__name">{name}</span>
                                        <span class="combobox__detail">{detail}</span>
                                    </li>
                                }
                            }
                        />
                    </Show>
                </ul>
            </Show>
        </div>
    }
}
