use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use log::error;

use exercise_editor_domain::{self as domain, Field, Media, Submission};
use exercise_editor_web_app as web_app;

use crate::{
    EDITOR, Message, NOTIFICATIONS, Route, STORE,
    component::{
        element::{Block, Color, Icon, NoData, SearchBox, Tag, Title},
        form::{InputField, TextAreaField},
    },
};

type Copied = web_app::CopiedIndicator<Timeout>;

#[component]
pub fn Exercises(search: String) -> Element {
    let copied = use_signal(Copied::new);

    let store = STORE.read();
    let exercise_filter = domain::ExerciseFilter::new(&search);
    let filtered_exercises = exercise_filter.exercises(store.exercises());
    let selected_id = EDITOR.read().selected_id().cloned();
    let is_editing = EDITOR.read().is_editing();

    rsx! {
        div {
            class: "columns",
            div {
                class: "column is-one-third",
                Title { title: "Exercises" }
                Block { {view_search_box(&search)} }
                if filtered_exercises.is_empty() {
                    NoData { text: no_results_text(&exercise_filter) }
                } else {
                    {view_list(&filtered_exercises, selected_id.as_ref(), copied)}
                }
            }
            div {
                class: "column",
                Title { title: "Update Exercise" }
                {view_form()}
            }
            if is_editing {
                div {
                    class: "column exercise-preview",
                    Title { title: "Updated Exercise Details" }
                    {view_preview()}
                }
            }
        }
    }
}

fn view_search_box(search: &str) -> Element {
    rsx! {
        SearchBox {
            search_term: search,
            placeholder: "Search exercises by name",
            oninput: move |event: FormEvent| {
                navigator().replace(Route::Exercises { search: event.value() });
            }
        }
    }
}

fn no_results_text(exercise_filter: &domain::ExerciseFilter) -> String {
    if exercise_filter.is_empty() {
        "No exercises found".to_string()
    } else {
        format!("No exercises match \"{}\"", exercise_filter.name)
    }
}

fn view_list(
    exercises: &[&domain::Exercise],
    selected_id: Option<&domain::ExerciseID>,
    copied: Signal<Copied>,
) -> Element {
    let items = exercises
        .iter()
        .map(|e| {
            let is_selected = selected_id == Some(&e.id);
            let is_copied = copied.read().is_copied(&e.id);
            let updated_at = e.updated_at.map(web_app::format_updated_at);
            let exercise = (*e).clone();
            let id = e.id.clone();
            let name = e.name.clone();
            rsx! {
                li {
                    key: "{e.id}",
                    class: "is-clickable px-3 py-2",
                    class: if is_selected { "has-background-warning-light" },
                    onclick: move |_| EDITOR.write().select(&exercise),
                    div {
                        class: "is-flex is-align-items-center",
                        if e.updated {
                            Icon { name: "check", color: Color::Success, title: "Updated" }
                        }
                        span { class: "is-flex-grow-1", "{e.name}" }
                        Icon {
                            name: "copy",
                            color: Color::Link,
                            title: "Copy exercise name",
                            onclick: move |event: MouseEvent| {
                                event.stop_propagation();
                                spawn(copy_name(copied, id.clone(), name.clone()));
                            },
                        }
                        if is_copied {
                            Tag { text: "Copied!", color: Color::Success }
                        }
                    }
                    if let Some(updated_at) = updated_at {
                        Tag { text: "Last updated: {updated_at}", color: Color::Info, is_light: true }
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        ul {
            class: "exercise-list",
            for item in items {
                {item}
            }
        }
    }
}

async fn copy_name(mut copied: Signal<Copied>, id: domain::ExerciseID, name: String) {
    if let Err(err) = web_app::clipboard::write_text(&name).await {
        error!("failed to copy exercise name: {err}");
        NOTIFICATIONS
            .write()
            .push(Message::Error(format!("Failed to copy: {err}")));
        return;
    }

    let generation = copied.write().next_generation();
    let timeout = Timeout::new(web_app::COPIED_TIMEOUT_MS, {
        let id = id.clone();
        move || {
            if let Ok(mut copied) = copied.try_write() {
                copied.expire(&id, generation);
            }
        }
    });
    copied.write().mark(id, generation, timeout);
}

fn change(field: Field) -> impl FnMut(FormEvent) + 'static {
    move |event: FormEvent| EDITOR.write().change_field(field, &event.value())
}

fn submit() {
    let result = EDITOR.write().submit(&mut *STORE.write());
    match result {
        Ok(Submission::Saved) => NOTIFICATIONS.write().push(Message::Success(
            "Exercise updated successfully!".to_string(),
        )),
        Ok(Submission::NothingSelected) => {}
        Err(err) => NOTIFICATIONS.write().push(Message::Error(format!(
            "Failed to update exercise: {err}"
        ))),
    }
}

fn view_form() -> Element {
    let editor = EDITOR.read();
    let Some(scratch) = editor.scratch() else {
        return rsx! { NoData { text: "Select an exercise to edit it" } };
    };
    let store = STORE.read();
    let stored = store.exercise(&scratch.id);
    let gif_url_changed = stored.is_some_and(|e| e.gif_url != scratch.gif_url);
    let has_changes = editor.has_changes(&*store);

    rsx! {
        form {
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                submit();
            },
            InputField {
                label: "Exercise Name",
                value: scratch.name.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::Name),
            }
            TextAreaField {
                label: "Instructions",
                lines: scratch.instructions.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::Instructions),
            }
            InputField {
                label: "Body Part",
                value: scratch.body_part.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::BodyPart),
            }
            InputField {
                label: "Equipment",
                value: scratch.equipment.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::Equipment),
            }
            InputField {
                label: "GIF URL",
                help: "Links to YouTube videos are embedded in the preview.",
                value: scratch.gif_url.clone(),
                has_changed: gif_url_changed,
                oninput: change(Field::GifUrl),
            }
            InputField {
                label: "Target",
                value: scratch.target.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::Target),
            }
            InputField {
                label: "Secondary Muscles (comma separated)",
                value: scratch.secondary_muscles.clone(),
                has_changed: false,
                is_disabled: true,
                oninput: change(Field::SecondaryMuscles),
            }
            div {
                class: "field",
                div {
                    class: "control",
                    button {
                        class: "button is-link",
                        r#type: "submit",
                        "Update Exercise"
                    }
                }
                if has_changes {
                    p { class: "help is-info", "Unsaved changes are discarded when another exercise is selected." }
                }
            }
        }
    }
}

fn view_preview() -> Element {
    let editor = EDITOR.read();
    let Some(scratch) = editor.scratch() else {
        return rsx! {};
    };

    let media = match Media::from_url(&scratch.gif_url) {
        media @ Media::Video { .. } => rsx! {
            iframe {
                src: media.embed_url().unwrap_or_default(),
                title: "{scratch.name}",
                allow: "fullscreen",
            }
        },
        Media::Image { src } => rsx! {
            img { src, alt: "{scratch.name}" }
        },
    };

    rsx! {
        Block { {media} }
        Block {
            p { strong { "Name: " } "{scratch.name}" }
            p { strong { "Body Part: " } "{scratch.body_part}" }
            p { strong { "Equipment: " } "{scratch.equipment}" }
            p { strong { "Target: " } "{scratch.target}" }
            p { strong { "Secondary Muscles: " } "{scratch.secondary_muscles}" }
        }
        Block {
            strong { "Instructions:" }
            ol {
                class: "ml-5",
                for instruction in scratch.instructions.iter() {
                    li { "{instruction}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "No exercises found")]
    #[case("bench", "No exercises match \"bench\"")]
    fn test_no_results_text(#[case] search: &str, #[case] expected: &str) {
        assert_eq!(
            no_results_text(&domain::ExerciseFilter::new(search)),
            expected
        );
    }
}
