use dioxus::prelude::*;
use revise_core::model::DeckDraft;

use crate::vm::{exam_board_options, subject_options, year_group_options};

#[component]
pub fn CreateDeckModal(
    draft: DeckDraft,
    error: Option<String>,
    submitting: bool,
    on_change: Callback<DeckDraft>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    let for_name = draft.clone();
    let for_subject = draft.clone();
    let for_board = draft.clone();
    let for_year = draft.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { "Create New Deck" }
                    button {
                        class: "btn modal-close",
                        r#type: "button",
                        aria_label: "Close modal",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                if let Some(message) = error {
                    p { class: "error", "{message}" }
                }
                form {
                    class: "modal-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    label { class: "field",
                        span { "Deck Name" }
                        input {
                            r#type: "text",
                            value: "{draft.name}",
                            placeholder: "e.g. Cell Structure & Transport",
                            oninput: move |evt: FormEvent| {
                                on_change.call(DeckDraft { name: evt.value(), ..for_name.clone() });
                            },
                        }
                    }
                    div { class: "field-row",
                        OptionSelect {
                            label: "Subject",
                            value: draft.subject.clone(),
                            options: subject_options(),
                            on_select: move |value: String| {
                                on_change.call(DeckDraft { subject: value, ..for_subject.clone() });
                            },
                        }
                        OptionSelect {
                            label: "Exam Board",
                            value: draft.exam_board.clone(),
                            options: exam_board_options(),
                            on_select: move |value: String| {
                                on_change.call(DeckDraft { exam_board: value, ..for_board.clone() });
                            },
                        }
                        OptionSelect {
                            label: "Year Group",
                            value: draft.year_group.clone(),
                            options: year_group_options(),
                            on_select: move |value: String| {
                                on_change.call(DeckDraft { year_group: value, ..for_year.clone() });
                            },
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting,
                            "Create Deck"
                        }
                    }
                }
                p { class: "hint", "Tip: Click outside the popup or press ✕ to close." }
            }
        }
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    value: String,
    options: Vec<&'static str>,
    on_select: Callback<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt| on_select.call(evt.value()),
                option { value: "", "Select" }
                for option_value in options {
                    option { value: "{option_value}", selected: value == option_value, "{option_value}" }
                }
            }
        }
    }
}
