use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, AuthContext};
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();

    let mut code = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let on_login = use_callback(move |()| {
        if submitting() {
            return;
        }
        let auth_service = ctx.auth_service();
        let raw_code = code();
        let mut auth = auth;
        let mut error = error;
        let mut submitting = submitting;
        error.set(None);
        submitting.set(true);
        spawn(async move {
            let result = auth_service.login(&raw_code).await;
            submitting.set(false);
            match result {
                Ok(session) => {
                    auth.set(Some(session));
                    let _ = navigator.push(Route::Home {});
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    let code_value = code();

    rsx! {
        div { class: "page auth",
            Link { class: "back-link", to: Route::Home {}, "← Back" }
            h1 { "Log in" }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            form {
                class: "auth-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_login.call(());
                },
                label { class: "field",
                    span { "User code" }
                    input {
                        value: "{code_value}",
                        placeholder: "e.g. 483291",
                        oninput: move |evt| code.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "Log in"
                }
                p { class: "muted",
                    "No account? "
                    Link { to: Route::Signup {}, "Create one" }
                }
            }
        }
    }
}
