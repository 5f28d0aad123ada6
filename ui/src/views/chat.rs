use dioxus::prelude::*;

use crate::components::{ChatRow, ScreenHeader, ScreenLayout};
use crate::core::ChatMessage;
use crate::navigation::ScreenId;

#[component]
pub fn ChatScreen(messages: Vec<ChatMessage>) -> Element {
    rsx! {
        ScreenLayout {
            screen: ScreenId::Chat {},
            header: rsx! { ScreenHeader { title: "Messages" } },
            div { class: "chat-list",
                for (idx, message) in messages.into_iter().enumerate() {
                    ChatRow { key: "{idx}", message }
                }
            }
        }
    }
}
