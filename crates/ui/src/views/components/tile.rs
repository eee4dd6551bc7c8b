use dioxus::prelude::*;
use revise_core::model::DeckId;

use crate::context::AppContext;
use crate::vm::DeckTileVm;

#[component]
pub fn DeckTile(tile: DeckTileVm, on_study: Callback<DeckId>, on_edit: Callback<DeckId>) -> Element {
    let ctx = use_context::<AppContext>();
    let title = tile.title.clone();
    let thumbnail = use_resource(move || {
        let tile_images = ctx.tile_images();
        let title = title.clone();
        async move {
            tile_images
                .thumbnail_for(&title)
                .await
                .map(|url| url.as_str().to_owned())
        }
    });
    let thumbnail_url = thumbnail.value().read().clone().flatten();
    let deck_id = tile.id;

    rsx! {
        article { class: "deck-tile",
            div { class: "deck-tile-image",
                if let Some(url) = thumbnail_url {
                    img { src: "{url}", alt: "{tile.title}" }
                } else {
                    div { class: "deck-tile-placeholder", "Loading image..." }
                }
            }
            div { class: "deck-tile-body",
                h2 { class: "deck-tile-title", "{tile.title}" }
                div { class: "deck-tile-tags",
                    for tag in tile.tags.iter() {
                        span { class: "chip", "{tag}" }
                    }
                }
                div { class: "deck-tile-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_study.call(deck_id),
                        "Study Deck"
                    }
                    button {
                        class: "btn",
                        r#type: "button",
                        title: "Edit deck",
                        onclick: move |_| on_edit.call(deck_id),
                        "✏"
                    }
                }
            }
        }
    }
}
