//! Call-to-action button, rendered as a link when given an `href`

use leptos::ev::MouseEvent;
use leptos::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center px-6 py-3 text-sm font-medium transition-all duration-300 rounded-sm focus:outline-none focus:ring-2 focus:ring-offset-2";

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Gold,
}

impl ButtonVariant {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-navy-800 text-white hover:bg-navy-900 shadow-lg shadow-navy-800/20 focus:ring-navy-800",
            Self::Secondary => "bg-white text-navy-800 border border-slate-200 hover:bg-slate-50 hover:border-slate-300 shadow-sm focus:ring-slate-200",
            Self::Outline => "bg-transparent border border-white/30 text-white hover:bg-white/10 focus:ring-white",
            Self::Gold => "bg-gold-500 text-white hover:bg-gold-600 shadow-lg shadow-gold-500/20 focus:ring-gold-500",
        }
    }
}

/// Full class list: base, variant, then caller extras
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("{BASE_CLASSES} {}", variant.classes())
    } else {
        format!("{BASE_CLASSES} {} {extra}", variant.classes())
    }
}

/// Styled button. With `href` it renders an `<a>`; otherwise a `<button>`
/// whose type is `submit` when `submit` is set.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, optional)] classes: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] submit: bool,
    children: Children,
) -> impl IntoView {
    let class = button_classes(variant, &classes);
    let button_type = if submit { "submit" } else { "button" };
    let handle_click = move |ev: MouseEvent| {
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    match href {
        Some(href) => view! {
            <a href=href class=class on:click=handle_click>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type=button_type
                class=class
                on:click=handle_click
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}
