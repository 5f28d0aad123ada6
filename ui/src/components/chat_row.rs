use dioxus::prelude::*;

use crate::core::ChatMessage;

use super::RemoteImage;

/// Conversation preview. The unread badge only appears for a non-zero count.
#[component]
pub fn ChatRow(message: ChatMessage) -> Element {
    rsx! {
        article { class: "chat-row",
            RemoteImage { url: message.avatar_url.clone(), alt: "Avatar", class: "avatar avatar--large" }
            div { class: "chat-row__body",
                div { class: "chat-row__top",
                    span { class: "chat-row__sender", "{message.sender}" }
                    span { class: "chat-row__timestamp", "{message.timestamp}" }
                }
                p { class: "chat-row__preview", "{message.preview}" }
            }
            if message.unread_count > 0 {
                span { class: "chat-row__badge", "{message.unread_count}" }
            }
        }
    }
}
