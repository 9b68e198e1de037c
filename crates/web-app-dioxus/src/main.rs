#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::{LevelFilter, error};

use exercise_editor_domain as domain;
use exercise_editor_storage as storage;
use exercise_editor_web_app as web_app;

use component::element::{Color, Dialog};
use page::{exercises::Exercises, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/?:search")]
    Exercises { search: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

type Store = domain::RecordStore<storage::local_storage::LocalStorage, web_app::SystemClock>;

static STORE: GlobalSignal<Store> = Signal::global(|| {
    let mut store = domain::RecordStore::new(
        storage::local_storage::LocalStorage,
        web_app::SystemClock,
        domain::catalog::seed(),
    );
    store.load();
    store
});
static EDITOR: GlobalSignal<domain::Editor> = Signal::global(domain::Editor::new);
static NOTIFICATIONS: GlobalSignal<Vec<Message>> = Signal::global(Vec::new);

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Success(String),
    Error(String),
}

impl Message {
    fn color(&self) -> Color {
        match self {
            Message::Success(_) => Color::Success,
            Message::Error(_) => Color::Danger,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Message::Success(_) => "Success",
            Message::Error(_) => "Error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Message::Success(text) | Message::Error(text) => text,
        }
    }
}

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(
        Arc::new(Mutex::new(storage::local_storage::LocalStorage)),
        LevelFilter::Debug,
    );
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        The editor stopped due to an unexpected error. Saved changes are kept in the browser.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-fluid py-4",
            Router::<Route> {},
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let Some(message) = NOTIFICATIONS.read().last().cloned() else {
        return rsx! {};
    };
    let color = message.color();
    let title = message.title();
    let text = message.text();

    rsx! {
        Dialog {
            color,
            title: rsx! { "{title}" },
            close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
            div {
                class: "block",
                "{text}"
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-{color}",
                        onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                        "Close"
                    }
                }
            }
        }
    }
}
