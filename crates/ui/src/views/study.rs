use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use revise_core::model::{DeckId, Judgment};

use crate::context::{AppContext, AuthContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StudyIntent, StudyPhase, StudyVm, load_study};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn StudyView(deck_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let route_deck_id = deck_id;
    let deck_id = DeckId::new(deck_id);
    let study_loop = ctx.study_loop();

    let vm = use_signal(|| None::<StudyVm>);
    let action_error = use_signal(|| None::<String>);

    use_effect(move || {
        if !auth.is_logged_in() {
            let _ = navigator.replace(Route::Login {});
        }
    });

    let resource = use_resource(move || {
        let study_loop = study_loop.clone();
        let session = auth.session();
        let mut vm = vm;
        async move {
            let loaded = load_study(&study_loop, deck_id, session.as_ref()).await?;
            vm.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    // Input stays live while a progress write is out: the write settles into
    // the current vm, so intents handled meanwhile are kept.
    let dispatch_intent = use_callback(move |intent: StudyIntent| {
        let mut vm = vm;
        let mut action_error = action_error;
        match intent {
            StudyIntent::Reveal => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.reveal();
                }
            }
            StudyIntent::Skip => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.skip();
                }
            }
            StudyIntent::Judge(judgment) => {
                let begun = vm.read().as_ref().map(|vm| vm.begin_judge(judgment));
                let pending = match begun {
                    Some(Ok(pending)) => pending,
                    Some(Err(err)) => {
                        action_error.set(Some(err.message().to_owned()));
                        return;
                    }
                    None => return,
                };
                spawn(async move {
                    let sent = pending.send().await;
                    let result = match vm.write().as_mut() {
                        Some(vm) => vm.finish_judge(sent),
                        None => Ok(()),
                    };
                    match result {
                        Ok(()) => action_error.set(None),
                        Err(err) => action_error.set(Some(err.message().to_owned())),
                    }
                });
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let current = vm.read().clone();

    rsx! {
        div { class: "page study",
            div { class: "page-links",
                Link { class: "back-link", to: Route::Home {}, "← Back to decks" }
                Link { class: "back-link", to: Route::Deck { deck_id: route_deck_id }, "Edit deck" }
            }
            match (state, current) {
                (ViewState::Error(ViewError::NotAuthenticated), _) => rsx! {
                    p { class: "muted", "Redirecting to login..." }
                },
                (ViewState::Error(err), _) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                (ViewState::Ready(()), Some(study)) => rsx! {
                    StudyBody {
                        study,
                        route_deck_id,
                        action_error: action_error(),
                        on_intent: dispatch_intent,
                    }
                },
                _ => rsx! {
                    p { class: "muted", "Loading deck..." }
                },
            }
        }
    }
}

#[derive(Props, Clone)]
struct StudyBodyProps {
    study: StudyVm,
    route_deck_id: u64,
    action_error: Option<String>,
    on_intent: Callback<StudyIntent>,
}

// Re-render whenever the parent does; the session has no cheap equality.
impl PartialEq for StudyBodyProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

#[component]
fn StudyBody(props: StudyBodyProps) -> Element {
    let StudyBodyProps {
        study,
        route_deck_id,
        action_error,
        on_intent,
    } = props;
    let stats = study.stats();

    rsx! {
        h1 { "{study.deck_name()}" }
        if let Some(message) = study.load_error() {
            p { class: "error", "{message}" }
        }
        if let Some(message) = action_error {
            p { class: "error", "{message}" }
        }
        div { class: "study-stats",
            span { "Cards: " strong { "{stats.cards}" } }
            span { "Answered: " strong { "{stats.answered}" } }
            span { class: "correct", "Correct: " strong { "{stats.correct}" } }
            span { class: "incorrect", "Incorrect: " strong { "{stats.incorrect}" } }
        }
        if study.has_cards() {
            div { class: "study-card",
                if let Some(label) = study.position_label() {
                    p { class: "muted", "{label}" }
                }
                p { class: "study-question", "{study.question_text().unwrap_or_default()}" }
                if let Some(answer) = study.answer_text() {
                    div { class: "study-answer",
                        p { "{answer}" }
                    }
                } else {
                    p { class: "muted", "Click \"Show answer\" to reveal." }
                }
            }
            div { class: "study-controls",
                if study.phase() == StudyPhase::Question {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(StudyIntent::Reveal),
                        "Show answer"
                    }
                } else {
                    button {
                        class: "btn btn-correct",
                        r#type: "button",
                        onclick: move |_| on_intent.call(StudyIntent::Judge(Judgment::Correct)),
                        "I got it right"
                    }
                    button {
                        class: "btn btn-incorrect",
                        r#type: "button",
                        onclick: move |_| on_intent.call(StudyIntent::Judge(Judgment::Incorrect)),
                        "I got it wrong"
                    }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(StudyIntent::Skip),
                    "Skip / Next card"
                }
            }
        } else {
            p { class: "muted",
                "This deck has no cards yet. "
                Link { to: Route::Deck { deck_id: route_deck_id }, "Add some cards first." }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<StudyIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<StudyVm>>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<StudyIntent>, vm: Signal<Option<StudyVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<StudyIntent> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<StudyVm>> {
        (*self.vm.borrow()).expect("study vm registered")
    }
}
