use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Good => "stat-card stat-card--success",
            CardTone::Bad => "stat-card stat-card--error",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Already formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)] tone: CardTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Makes the card clickable
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div
            class=tone.class()
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
