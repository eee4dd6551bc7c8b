use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{DeckView, HomeView, LoginView, SignupView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/deck/:deck_id", DeckView)] Deck { deck_id: u64 },
        #[route("/study/:deck_id", StudyView)] Study { deck_id: u64 },
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
