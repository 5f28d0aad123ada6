use dioxus::prelude::*;

use crate::core::format::{format_comments, format_likes};
use crate::core::Post;
use crate::navigation::Interaction;

use super::{IconButton, RemoteImage};

/// "Following / For you / Favorites" selector above the feed.
#[component]
pub fn FeedHeader() -> Element {
    rsx! {
        header { class: "feed-header",
            div { class: "feed-header__tabs",
                span { class: "feed-header__tab", "Following" }
                span { class: "feed-header__tab feed-header__tab--active", "For you" }
                span { class: "feed-header__tab", "Favorites" }
            }
            span { class: "feed-header__indicator", aria_hidden: "true" }
        }
    }
}

#[component]
pub fn PostItem(post: Post) -> Element {
    let likes = format_likes(post.likes);
    let comments = format_comments(post.comments);

    rsx! {
        article { class: "post-item",
            div { class: "post-item__header",
                div { class: "post-item__author",
                    RemoteImage { url: post.avatar_url.clone(), alt: "Avatar", class: "avatar avatar--small" }
                    div { class: "post-item__meta",
                        p { class: "post-item__byline",
                            span { class: "post-item__username", "{post.username}" }
                            span { class: "post-item__group", "in {post.group}" }
                        }
                        span { class: "post-item__timestamp", "{post.timestamp}" }
                    }
                }
                IconButton { glyph: "⋯", label: "More options", interaction: Interaction::PLACEHOLDER }
            }

            RemoteImage { url: post.image_url.clone(), alt: "Post image", class: "post-item__image" }

            div { class: "post-item__actions",
                span { class: "post-item__stat",
                    IconButton { glyph: "♥", label: "Like", interaction: Interaction::PLACEHOLDER }
                    span { class: "post-item__likes", "{likes}" }
                }
                span { class: "post-item__stat",
                    IconButton { glyph: "💬", label: "Comment", interaction: Interaction::PLACEHOLDER }
                    span { class: "post-item__comments", "{comments}" }
                }
            }

            p { class: "post-item__description", "{post.description}" }
        }
    }
}
