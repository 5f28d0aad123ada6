use dioxus::prelude::*;

use crate::components::{FeedHeader, PostItem, ScreenLayout};
use crate::core::Post;
use crate::navigation::ScreenId;

#[component]
pub fn SocialFeedScreen(posts: Vec<Post>) -> Element {
    rsx! {
        ScreenLayout {
            screen: ScreenId::SocialFeed {},
            header: rsx! { FeedHeader {} },
            div { class: "feed",
                for (idx, post) in posts.into_iter().enumerate() {
                    PostItem { key: "{idx}", post }
                }
            }
        }
    }
}
