use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::{select_variant, AppState},
    ui::theme,
    util::format::{format_price, format_release_date, pluralize},
};

/// Navigation target a card's slug resolves to.
#[component]
pub fn ShoeDetailPage(slug: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let shoe = state.with(|st| st.shoe_by_slug(&slug).cloned());
    let Some(shoe) = shoe else {
        return rsx! {
            section { class: "{theme::panel_border()} p-10 text-center",
                h2 { class: "text-lg font-semibold text-slate-100", "Shoe not found" }
                p { class: "mt-2 text-sm text-slate-400", "No catalog entry matches \"{slug}\"." }
                button {
                    class: "{theme::btn_primary()} mt-6",
                    onclick: move |_| { nav.push(Route::Catalog {}); },
                    "Back to Catalog"
                }
            }
        };
    };

    let prefs = state.with(|st| st.prefs.clone());
    let variant = select_variant(
        shoe.sale_price,
        shoe.release_date,
        OffsetDateTime::now_utc(),
        prefs.new_release_window(),
    );

    let badge_text = variant.badge_text();
    let badge_class = theme::badge_class(variant);
    let price_class = theme::price_class(variant);
    let price_display = format_price(shoe.price);
    let sale_display = shoe.sale_price.map(format_price);
    let color_info = pluralize("Color", shoe.num_of_colors);
    let released_label = format_release_date(shoe.release_date);

    rsx! {
        div { class: "space-y-6",
            button {
                class: "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
                onclick: move |_| { nav.push(Route::Catalog {}); },
                "← Back to Catalog"
            }
            section { class: "grid gap-8 lg:grid-cols-[3fr_2fr]",
                div { class: "relative",
                    if let Some(text) = badge_text {
                        span { class: "{badge_class}", "{text}" }
                    }
                    img {
                        class: "block w-full rounded-2xl",
                        alt: "{shoe.name}",
                        src: "{shoe.image_src}",
                    }
                }
                div { class: "space-y-4",
                    h2 { class: "text-2xl font-semibold tracking-tight text-slate-100", "{shoe.name}" }
                    div { class: "flex items-baseline gap-3",
                        span { class: "{price_class} text-lg", "{price_display}" }
                        if let Some(sale) = sale_display {
                            span { class: "{theme::sale_price_class()} text-lg", "{sale}" }
                        }
                    }
                    p { class: "text-sm text-slate-400", "{color_info}" }
                    p { class: "text-xs text-slate-500", "Released {released_label}" }
                }
            }
        }
    }
}
