use dioxus::prelude::*;

use crate::component::element::ErrorMessage;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        ErrorMessage { message: "Page not found: /{path}" }
    }
}
