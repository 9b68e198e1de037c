use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: String,
    help: Option<String>,
    value: String,
    has_changed: bool,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if has_changed { "is-info" },
                    disabled: if let Some(is_disabled) = is_disabled { is_disabled },
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(ref help) = help {
                p { class: "help", "{help}" }
            }
        }
    }
}

/// Multi-line input whose lines are passed on joined by newlines.
#[component]
pub fn TextAreaField(
    label: String,
    lines: Vec<String>,
    has_changed: bool,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let value = lines.join("\n");
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                textarea {
                    class: "textarea",
                    class: if has_changed { "is-info" },
                    disabled: if let Some(is_disabled) = is_disabled { is_disabled },
                    rows: "6",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}
