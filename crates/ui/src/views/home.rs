use dioxus::prelude::*;
use dioxus_router::use_navigator;
use revise_core::model::{Deck, DeckDraft, DeckFilter, DeckId};

use crate::context::{AppContext, AuthContext};
use crate::routes::Route;
use crate::views::components::{AuthHeader, CreateDeckModal, DeckFilterBar, DeckTile};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_deck_tiles;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let deck_service = ctx.deck_service();

    let decks = use_signal(Vec::<Deck>::new);
    let mut filter = use_signal(DeckFilter::default);
    let mut modal_open = use_signal(|| false);
    let mut draft = use_signal(DeckDraft::default);
    let mut form_error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let deck_service_for_resource = deck_service.clone();
    let resource = use_resource(move || {
        let deck_service = deck_service_for_resource.clone();
        let mut decks = decks;
        async move {
            let loaded = deck_service
                .list_decks()
                .await
                .map_err(|err| ViewError::Message(err.user_message()))?;
            decks.set(loaded);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let close_modal = use_callback(move |()| {
        modal_open.set(false);
        form_error.set(None);
        draft.set(DeckDraft::default());
    });

    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let deck_service = deck_service.clone();
        let form = draft();
        let mut decks = decks;
        let mut submitting = submitting;
        let mut form_error = form_error;
        form_error.set(None);
        submitting.set(true);
        spawn(async move {
            let result = deck_service.create_deck(form).await;
            submitting.set(false);
            match result {
                Ok(deck) => {
                    decks.write().push(deck);
                    close_modal.call(());
                }
                Err(err) => form_error.set(Some(err.user_message())),
            }
        });
    });

    let go_if_logged_in = move |route: Route| {
        let target = if auth.is_logged_in() {
            route
        } else {
            Route::Login {}
        };
        let _ = navigator.push(target);
    };
    let on_study = use_callback(move |deck_id: DeckId| {
        go_if_logged_in(Route::Study {
            deck_id: deck_id.value(),
        });
    });
    let on_edit = use_callback(move |deck_id: DeckId| {
        go_if_logged_in(Route::Deck {
            deck_id: deck_id.value(),
        });
    });

    let tiles = map_deck_tiles(&decks.read(), &filter.read());
    let has_decks = !decks.read().is_empty();

    rsx! {
        div { class: "page home",
            AuthHeader {}

            if let ViewState::Error(err) = &state {
                p { class: "error", "{err.message()}" }
            }

            div { class: "toolbar",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        form_error.set(None);
                        modal_open.set(true);
                    },
                    "+ Create New Deck"
                }
                DeckFilterBar {
                    filter: filter(),
                    on_change: move |next: DeckFilter| filter.set(next),
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading decks..." }
                },
                ViewState::Ready(()) | ViewState::Error(_) => rsx! {
                    div { class: "deck-grid",
                        if !has_decks {
                            p { class: "muted", "No decks yet. Create one to start." }
                        } else if tiles.is_empty() {
                            p { class: "muted", "No decks match these filters." }
                        }
                        for tile in tiles {
                            DeckTile {
                                key: "{tile.id}",
                                tile: tile.clone(),
                                on_study,
                                on_edit,
                            }
                        }
                    }
                },
            }

            if modal_open() {
                CreateDeckModal {
                    draft: draft(),
                    error: form_error(),
                    submitting: submitting(),
                    on_change: move |next: DeckDraft| draft.set(next),
                    on_submit,
                    on_close: close_modal,
                }
            }
        }
    }
}
