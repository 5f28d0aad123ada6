use dioxus::prelude::*;

use crate::core::DashboardStat;

#[component]
pub fn StatCard(stat: DashboardStat) -> Element {
    rsx! {
        article { class: "stat-card card",
            span { class: "stat-card__icon", style: "background-color: {stat.color};", "{stat.icon}" }
            div { class: "stat-card__text",
                span { class: "stat-card__title", "{stat.title}" }
                span { class: "stat-card__value", "{stat.value}" }
            }
        }
    }
}
