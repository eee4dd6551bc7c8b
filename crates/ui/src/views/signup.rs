use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, AuthContext};
use crate::routes::Route;

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();

    let error = use_signal(|| None::<String>);
    let created_code = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let on_signup = use_callback(move |()| {
        if submitting() {
            return;
        }
        let auth_service = ctx.auth_service();
        let mut auth = auth;
        let mut error = error;
        let mut created_code = created_code;
        let mut submitting = submitting;
        error.set(None);
        submitting.set(true);
        spawn(async move {
            let result = auth_service.signup().await;
            submitting.set(false);
            match result {
                Ok(session) => {
                    created_code.set(Some(session.user_code().to_string()));
                    auth.set(Some(session));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    rsx! {
        div { class: "page auth",
            Link { class: "back-link", to: Route::Home {}, "← Back" }
            h1 { "Create account" }
            p { class: "muted", "You’ll get a unique login code. Save it somewhere safe." }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            if let Some(code) = created_code() {
                div { class: "signup-result",
                    p { "Your login code:" }
                    p { class: "mono signup-code", "{code}" }
                    p { class: "muted", "You can log in later using this code." }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "Continue to Home"
                    }
                    p { class: "muted",
                        "Want to test login? "
                        Link { to: Route::Login {}, "Go to Login" }
                    }
                }
            } else {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| on_signup.call(()),
                    "Generate my login code"
                }
            }
        }
    }
}
