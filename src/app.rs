use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::store,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CatalogPage, SettingsPage, ShoeDetailPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
    #[route("/shoe/:slug")]
    ShoeDetail { slug: String },
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
            match store::load_catalog() {
                Ok(shoes) => state.with_mut(|st| st.shoes = shoes),
                Err(err) => {
                    println!("[store] Failed to load catalog: {err}");
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to load catalog: {err}"),
                    );
                }
            }
        }
    });
    use_context_provider(|| state.clone());
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user preferences: {err}");
    }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}

#[component]
pub fn ShoeDetail(slug: String) -> Element {
    rsx! { Shell { ShoeDetailPage { slug } } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
