//! Shared UI crate for figmademo. Records, navigation, components and screens live here;
//! the platform crates only launch [`AppShell`].

use dioxus::prelude::{asset, manganis, Asset};

pub mod core;
pub mod navigation;
pub mod views;

pub mod components {
    // Chrome
    mod layout;
    mod screen_switcher;
    mod status_bar;
    mod tab_bar;
    pub use layout::{ScreenHeader, ScreenLayout};
    pub use screen_switcher::ScreenSwitcher;
    pub use status_bar::StatusBar;
    pub use tab_bar::{TabBar, TabItem};

    // Controls and the image slot
    mod controls;
    mod remote_image;
    pub use controls::{ActionButton, FilterChip, IconButton, SocialButton, TextField};
    pub use remote_image::RemoteImage;

    // Record cards
    mod booking_card;
    mod chat_row;
    mod checkout;
    mod post_item;
    mod shop;
    mod stat_card;
    pub use booking_card::BookingCard;
    pub use chat_row::ChatRow;
    pub use checkout::{
        AddressCard, OrderLineRow, OrderSummaryCard, OrderTotalRow, PaymentMethodCard, SectionCard,
    };
    pub use post_item::{FeedHeader, PostItem};
    pub use shop::{CategoriesRow, CategoryItem, FilterSortBar, ProductCard, PromoBanner};
    pub use stat_card::StatCard;
}

mod app;
pub use app::{AppShell, AppShellProps};

/// Shared stylesheet as a bundled asset, linked by the web and mobile launchers.
pub const THEME_STYLESHEET: Asset = asset!("/assets/theme/main.css");

/// The same stylesheet inlined, for builds that ship without an asset directory.
/// Colours come from `Theme::css_variables`.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Logical window size of the desktop preview: a phone viewport, narrow enough
/// for the `max-width: 720px` rules to drop the device frame.
pub const PHONE_VIEWPORT: (f64, f64) = (390.0, 844.0);
