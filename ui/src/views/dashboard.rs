use dioxus::prelude::*;

use crate::components::{ScreenHeader, ScreenLayout, StatCard};
use crate::core::DashboardStat;
use crate::navigation::ScreenId;

#[component]
pub fn DashboardScreen(stats: Vec<DashboardStat>) -> Element {
    rsx! {
        ScreenLayout {
            screen: ScreenId::Dashboard {},
            header: rsx! { ScreenHeader { title: "Dashboard" } },
            div { class: "stat-list",
                for (idx, stat) in stats.into_iter().enumerate() {
                    StatCard { key: "{idx}", stat }
                }
            }
        }
    }
}
