use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, CatalogPrefs},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_prefs = state.with(|st| st.prefs.clone());
    let mut window_input = use_signal(|| initial_prefs.new_release_window_days.to_string());

    // Update check runs on demand; bumping the counter re-triggers the resource.
    let check_requested = use_signal(|| 0_u32);
    let update_check = use_resource({
        let toasts = toasts.clone();
        let check_requested = check_requested.clone();
        move || async move {
            if check_requested() == 0 {
                return None;
            }
            match version::check_for_update().await {
                Ok(info) => Some(info.to_string()),
                Err(err) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Update check failed: {err}"),
                    );
                    None
                }
            }
        }
    });
    let update_status = update_check.read().clone().flatten();
    let version_display = version::version_label();

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match parse_window_days(window_input()) {
            Ok(days) => {
                state.with_mut(|st| st.prefs.new_release_window_days = days);
                persist_user_state(&state);
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Shoes now count as new for {days} days after release."),
                );
            }
            Err(message) => {
                push_toast(toasts.clone(), ToastKind::Error, message);
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = CatalogPrefs::default();
            window_input.set(defaults.new_release_window_days.to_string());
            state.with_mut(|st| st.prefs.new_release_window_days = defaults.new_release_window_days);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the default new-release window.",
            );
        }
    };

    let on_check_updates = {
        let mut check_requested = check_requested.clone();
        move |_| {
            check_requested.with_mut(|count| *count += 1);
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "{theme::section_heading()}", "Catalog Display" }
                p { class: "mt-2 text-sm text-slate-400",
                    "A shoe wears the new-release badge for this many days after its release date. Shoes on sale always show the sale badge instead."
                }
                div { class: "mt-4 w-56",
                    label { class: "{theme::label_class()}", "New-release window (days)" }
                    input {
                        class: "{theme::input_class()}",
                        inputmode: "numeric",
                        value: window_input(),
                        oninput: move |evt| window_input.set(evt.value()),
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset Default" }
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "{theme::section_heading()}", "About" }
                p { class: "mt-2 text-sm text-slate-400", "Shoe Shelf {version_display}" }
                div { class: "mt-3 flex items-center gap-4",
                    button { class: "{theme::btn_secondary()}", onclick: on_check_updates, "Check for Updates" }
                    if let Some(status) = update_status {
                        p { class: "text-sm text-slate-300", "{status}" }
                    }
                }
            }
        }
    }
}

fn parse_window_days(input: String) -> Result<u16, String> {
    let days: u16 = input
        .trim()
        .parse()
        .map_err(|_| "The window must be a whole number of days".to_string())?;
    if !(1..=365).contains(&days) {
        return Err("The window must be between 1 and 365 days".to_string());
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::parse_window_days;

    #[test]
    fn accepts_days_within_range() {
        assert_eq!(parse_window_days("30".to_string()), Ok(30));
        assert_eq!(parse_window_days(" 7 ".to_string()), Ok(7));
        assert_eq!(parse_window_days("365".to_string()), Ok(365));
    }

    #[test]
    fn rejects_zero_negative_and_junk() {
        assert!(parse_window_days("0".to_string()).is_err());
        assert!(parse_window_days("-3".to_string()).is_err());
        assert!(parse_window_days("400".to_string()).is_err());
        assert!(parse_window_days("soon".to_string()).is_err());
    }
}
