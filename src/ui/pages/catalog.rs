use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::persist_user_state,
    domain::{select_variant, sort_shoes, AppState, ShoeSort},
    ui::{components::shoe_card::ShoeCard, theme},
    util::format::pluralize,
};

#[component]
pub fn CatalogPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let prefs = state.with(|st| st.prefs.clone());
    let mut shoes = state.with(|st| st.shoes.clone());
    sort_shoes(&mut shoes, prefs.sort);

    let now = OffsetDateTime::now_utc();
    let window = prefs.new_release_window();
    let count_caption = pluralize("Style", shoes.len() as u32);

    let on_sort_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Some(sort) = ShoeSort::from_key(&evt.value()) {
                state.with_mut(|st| st.prefs.sort = sort);
                persist_user_state(&state);
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-end justify-between gap-4",
                div {
                    h2 { class: "text-lg font-semibold text-slate-100", "All Shoes" }
                    p { class: "text-xs text-slate-500", "{count_caption}" }
                }
                div { class: "w-48",
                    label { class: "{theme::label_class()}", "Sort" }
                    select {
                        class: "{theme::input_class()}",
                        value: prefs.sort.key(),
                        onchange: on_sort_change,
                        for sort in ShoeSort::ALL {
                            option {
                                value: sort.key(),
                                selected: sort == prefs.sort,
                                "{sort.display_name()}"
                            }
                        }
                    }
                }
            }

            if shoes.is_empty() {
                section { class: "{theme::panel_border()} p-10 text-center text-sm text-slate-400",
                    "The catalog is empty. Restart the app or check the logs if this persists."
                }
            } else {
                section { class: "flex flex-wrap gap-8",
                    for shoe in shoes {
                        ShoeCard {
                            variant: select_variant(shoe.sale_price, shoe.release_date, now, window),
                            shoe,
                        }
                    }
                }
            }
        }
    }
}
