use dioxus::prelude::*;
use strum::Display;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

#[component]
pub fn Block(children: Element) -> Element {
    rsx! {
        div { class: "block", {children} }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn NoData(text: String) -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light my-6",
            "{text}"
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    color: Option<Color>,
    title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if let Some(color) = color { "has-text-{color}" },
            class: if onclick.is_some() { "is-clickable" },
            title: if let Some(title) = title { title },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn Tag(text: String, color: Color, is_light: Option<bool>) -> Element {
    rsx! {
        span {
            class: "tag is-{color} ml-2",
            class: if is_light.unwrap_or_default() { "is-light" },
            "{text}"
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        h1 { class: "title is-5", "{title}" }
    }
}

#[component]
pub fn SearchBox(
    search_term: String,
    placeholder: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "control has-icons-left",
            span {
                class: "icon is-left",
                i { class: "fas fa-search" }
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: if let Some(placeholder) = placeholder { placeholder },
                value: search_term,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
