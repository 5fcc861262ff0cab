//! Styling helpers. Card styles are data keyed by the display variant;
//! the rest is the shared chrome used across pages.

use crate::domain::Variant;

// ============================================
// VARIANT-KEYED CARD STYLES
// ============================================

/// Badge chip floated over the card image. `Default` resolves to a hidden
/// class so the markup stays uniform across variants.
pub fn badge_class(variant: Variant) -> &'static str {
    match variant {
        Variant::OnSale => "absolute right-[-4px] top-3 rounded bg-rose-600 px-2 py-1 text-xs font-semibold tracking-wide text-white",
        Variant::NewRelease => "absolute right-[-4px] top-3 rounded bg-indigo-500 px-2 py-1 text-xs font-semibold tracking-wide text-white",
        Variant::Default => "hidden",
    }
}

/// List-price styling: struck through while the sale price is shown beside it.
pub fn price_class(variant: Variant) -> &'static str {
    match variant {
        Variant::OnSale => "text-sm text-slate-500 line-through",
        Variant::NewRelease | Variant::Default => "text-sm text-slate-300",
    }
}

pub fn sale_price_class() -> &'static str {
    "text-sm font-medium text-rose-400"
}

// ============================================
// CHROME
// ============================================

pub fn panel_border() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

pub fn nav_active() -> &'static str {
    "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
}

pub fn nav_inactive() -> &'static str {
    "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
}

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn section_heading() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_badge_is_hidden() {
        assert_eq!(badge_class(Variant::Default), "hidden");
        assert!(badge_class(Variant::OnSale).contains("absolute"));
        assert!(badge_class(Variant::NewRelease).contains("absolute"));
    }

    #[test]
    fn only_on_sale_strikes_the_list_price() {
        assert!(price_class(Variant::OnSale).contains("line-through"));
        assert!(!price_class(Variant::NewRelease).contains("line-through"));
        assert!(!price_class(Variant::Default).contains("line-through"));
    }
}
