use dioxus::prelude::*;
use revise_core::model::DeckFilter;

use crate::vm::FilterField;

#[component]
pub fn DeckFilterBar(filter: DeckFilter, on_change: Callback<DeckFilter>) -> Element {
    rsx! {
        div { class: "deck-filter",
            for field in [FilterField::Subject, FilterField::ExamBoard, FilterField::YearGroup] {
                FilterSelect {
                    key: "{field.label()}",
                    field,
                    filter: filter.clone(),
                    on_change,
                }
            }
        }
    }
}

#[component]
fn FilterSelect(field: FilterField, filter: DeckFilter, on_change: Callback<DeckFilter>) -> Element {
    let selected = field.selected(&filter).unwrap_or_default().to_owned();
    let filter_for_change = filter.clone();

    rsx! {
        label { class: "deck-filter-field",
            span { class: "deck-filter-label", "{field.label()}" }
            select {
                class: "deck-filter-select",
                value: "{selected}",
                onchange: move |evt| {
                    on_change.call(field.update(&filter_for_change, &evt.value()));
                },
                option { value: "", "All" }
                for value in field.options() {
                    option { value: "{value}", selected: selected == value, "{value}" }
                }
            }
        }
    }
}
