use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::{AppContext, AuthContext};
use crate::routes::Route;

#[component]
pub fn AuthHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthContext>();
    let mut logout_error = use_signal(|| None::<String>);

    let on_logout = use_callback(move |()| {
        let auth_service = ctx.auth_service();
        let mut auth = auth;
        spawn(async move {
            match auth_service.logout().await {
                Ok(()) => {
                    logout_error.set(None);
                    auth.set(None);
                }
                Err(err) => {
                    warn!(error = %err, "logout failed");
                    logout_error.set(Some(err.user_message()));
                }
            }
        });
    });

    rsx! {
        header { class: "page-header",
            h1 { "Flashcard Revision App" }
            if let Some(code) = auth.user_code() {
                div { class: "auth-status",
                    span { "Logged in as " span { class: "mono", "{code}" } }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_logout.call(()),
                        "Log out"
                    }
                }
            } else {
                div { class: "auth-links",
                    Link { class: "btn", to: Route::Login {}, "Log in" }
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Sign up" }
                }
            }
            if let Some(message) = logout_error() {
                p { class: "error", "{message}" }
            }
        }
    }
}
