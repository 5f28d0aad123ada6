use dioxus::prelude::*;

/// Image slot backed by the platform's image loader.
///
/// The webview fetches, decodes and caches `url`. An empty URL or a failed
/// load collapses to a blank placeholder of the same size; nothing else in the
/// tree observes the failure. The failure is remembered per URL, so a reused
/// slot that receives a new `url` tries again.
#[component]
pub fn RemoteImage(
    #[props(into)] url: String,
    #[props(into)] alt: String,
    #[props(into, default)] class: String,
) -> Element {
    let mut failed_url = use_signal(|| None::<String>);

    if shows_placeholder(&url, failed_url.read().as_deref()) {
        return rsx! {
            div {
                class: "remote-image remote-image--placeholder {class}",
                role: "img",
                aria_label: "{alt}",
            }
        };
    }

    let source = url.clone();
    rsx! {
        img {
            class: "remote-image {class}",
            src: "{url}",
            alt: "{alt}",
            "loading": "lazy",
            onerror: move |_| {
                tracing::debug!(url = %source, "image failed to load; showing placeholder");
                failed_url.set(Some(source.clone()));
            },
        }
    }
}

fn shows_placeholder(url: &str, failed_url: Option<&str>) -> bool {
    url.trim().is_empty() || failed_url == Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_urls_use_placeholder() {
        assert!(shows_placeholder("", None));
        assert!(shows_placeholder("   ", None));
    }

    #[test]
    fn failure_only_sticks_to_the_failed_url() {
        let broken = "https://picsum.photos/200?random=1";
        assert!(shows_placeholder(broken, Some(broken)));
        assert!(!shows_placeholder("https://picsum.photos/200?random=2", Some(broken)));
        assert!(!shows_placeholder(broken, None));
    }
}
