use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let catalog_active = matches!(
        current_route,
        Route::Catalog {} | Route::ShoeDetail { .. }
    );

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "👟" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "Shoe Shelf" }
                            p { class: "text-xs italic text-slate-500", "fresh pairs, fair prices" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: catalog_active,
                            onclick: move |_| { nav.push(Route::Catalog {}); },
                            label: "Catalog",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "Settings",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        theme::nav_active()
    } else {
        theme::nav_inactive()
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
