use dioxus::prelude::*;

use crate::components::{
    CategoriesRow, FilterSortBar, ProductCard, PromoBanner, ScreenLayout, TextField,
};
use crate::core::format::format_results;
use crate::core::{Category, Product};
use crate::navigation::ScreenId;

/// Product listing. Results render in sequence order; Filter and Sort are inert.
#[component]
pub fn EcommerceScreen(
    categories: Vec<Category>,
    products: Vec<Product>,
    more_products: Vec<Product>,
) -> Element {
    let results = format_results(products.len() + more_products.len());

    rsx! {
        ScreenLayout {
            screen: ScreenId::Ecommerce {},
            header: rsx! {
                div { class: "listing-header",
                    TextField { placeholder: "Search", leading: "🔍" }
                    span { class: "listing-header__count", "{results}" }
                    FilterSortBar {}
                }
            },
            CategoriesRow { categories }
            div { class: "product-list",
                for (idx, product) in products.into_iter().enumerate() {
                    ProductCard { key: "a{idx}", product }
                }
            }
            PromoBanner {}
            div { class: "product-list",
                for (idx, product) in more_products.into_iter().enumerate() {
                    ProductCard { key: "b{idx}", product }
                }
            }
        }
    }
}
