use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{Shoe, Variant};
use crate::ui::theme;
use crate::util::format::{format_price, pluralize};

/// Product card for a single catalog entry.
///
/// The variant is resolved by the caller (it depends on the user's
/// new-release window), keeping the card itself a pure mapping from data
/// to markup: badge, linked image, name/price row, colors/sale-price row.
#[component]
pub fn ShoeCard(shoe: Shoe, variant: Variant) -> Element {
    let badge_text = variant.badge_text();
    let badge_class = theme::badge_class(variant);
    let price_class = theme::price_class(variant);
    let price_display = format_price(shoe.price);
    let sale_display = shoe.sale_price.map(format_price);
    let color_info = pluralize("Color", shoe.num_of_colors);

    rsx! {
        Link {
            to: Route::ShoeDetail { slug: shoe.slug.clone() },
            article { class: "shoe-card w-[280px] flex-1 basis-[280px]",
                div { class: "relative",
                    if let Some(text) = badge_text {
                        span { class: "{badge_class}", "{text}" }
                    }
                    img {
                        class: "block w-full rounded-t-2xl rounded-b",
                        alt: "",
                        src: "{shoe.image_src}",
                    }
                }
                div { class: "mt-3 flex items-baseline justify-between gap-2",
                    h3 { class: "font-medium text-slate-100", "{shoe.name}" }
                    span { class: "{price_class}", "{price_display}" }
                }
                div { class: "flex items-baseline justify-between gap-2",
                    p { class: "text-sm text-slate-400", "{color_info}" }
                    if let Some(sale) = sale_display {
                        span { class: "{theme::sale_price_class()}", "{sale}" }
                    }
                }
            }
        }
    }
}
