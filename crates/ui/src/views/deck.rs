use dioxus::prelude::*;
use dioxus_router::Link;
use revise_core::model::{Card, CardDraft, DeckId};
use services::FALLBACK_DECK_NAME;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_card_rows;

#[component]
pub fn DeckView(deck_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_id = DeckId::new(deck_id);
    let card_service = ctx.card_service();
    let deck_service = ctx.deck_service();

    let cards = use_signal(Vec::<Card>::new);
    let deck_name = use_signal(|| FALLBACK_DECK_NAME.to_owned());
    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let card_service_for_resource = card_service.clone();
    let resource = use_resource(move || {
        let card_service = card_service_for_resource.clone();
        let deck_service = deck_service.clone();
        let mut cards = cards;
        let mut deck_name = deck_name;
        async move {
            deck_name.set(deck_service.deck_name(deck_id).await);
            let loaded = card_service
                .list_cards(deck_id)
                .await
                .map_err(|err| ViewError::Message(err.user_message()))?;
            cards.set(loaded);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let on_add = use_callback(move |()| {
        if submitting() {
            return;
        }
        let card_service = card_service.clone();
        let draft = CardDraft {
            question: question(),
            answer: answer(),
        };
        let mut cards = cards;
        let mut submitting = submitting;
        let mut form_error = form_error;
        let mut question = question;
        let mut answer = answer;
        form_error.set(None);
        submitting.set(true);
        spawn(async move {
            let result = card_service.create_card(deck_id, draft).await;
            submitting.set(false);
            match result {
                Ok(card) => {
                    cards.write().push(card);
                    question.set(String::new());
                    answer.set(String::new());
                }
                Err(err) => form_error.set(Some(err.user_message())),
            }
        });
    });

    let rows = map_card_rows(&cards.read());
    let title = deck_name();
    let question_value = question();
    let answer_value = answer();

    rsx! {
        div { class: "page deck",
            Link { class: "back-link", to: Route::Home {}, "← Back to decks" }
            h1 { "{title}" }

            if let ViewState::Error(err) = &state {
                p { class: "error", "{err.message()}" }
            }
            if let Some(message) = form_error() {
                p { class: "error", "{message}" }
            }

            form {
                class: "card-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_add.call(());
                },
                input {
                    r#type: "text",
                    value: "{question_value}",
                    placeholder: "Question",
                    oninput: move |evt| question.set(evt.value()),
                }
                input {
                    r#type: "text",
                    value: "{answer_value}",
                    placeholder: "Answer",
                    oninput: move |evt| answer.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "Add Card"
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading cards..." }
                },
                ViewState::Ready(()) | ViewState::Error(_) => rsx! {
                    div { class: "card-list",
                        if rows.is_empty() {
                            p { class: "muted", "No cards in this deck yet. Add some above." }
                        }
                        for row in rows {
                            div { key: "{row.id}", class: "card-row",
                                p { class: "card-question", "{row.question}" }
                                p { class: "card-answer", "{row.answer}" }
                            }
                        }
                    }
                },
            }
        }
    }
}
