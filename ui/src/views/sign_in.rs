use dioxus::prelude::*;

use crate::components::{ActionButton, ScreenLayout, SocialButton, TextField};
use crate::navigation::{Interaction, ScreenId};

/// Sign-in form. Nothing is submitted or validated.
#[component]
pub fn SignInScreen() -> Element {
    rsx! {
        ScreenLayout {
            screen: ScreenId::SignIn {},
            header: rsx! {},
            div { class: "sign-in",
                h1 { class: "sign-in__title", "Welcome" }
                p { class: "sign-in__subtitle", "Sign in to continue" }

                div { class: "sign-in__fields",
                    TextField { label: "Email", placeholder: "" }
                    TextField { label: "Password", placeholder: "", secret: true }
                }

                ActionButton {
                    label: "Sign In",
                    interaction: Interaction::PLACEHOLDER,
                    class: "button--primary button--block button--large",
                }

                p { class: "sign-in__divider", "Or continue with" }
                div { class: "sign-in__social",
                    SocialButton { icon: "🍎", label: "Apple" }
                    SocialButton { icon: "🇬", label: "Google" }
                    SocialButton { icon: "🇫", label: "Facebook" }
                }

                ActionButton {
                    label: "Don't have an account? Sign up",
                    interaction: Interaction::PLACEHOLDER,
                    class: "button--link",
                }
            }
        }
    }
}
