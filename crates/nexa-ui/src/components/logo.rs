//! Nexa "N" logo mark

use leptos::prelude::*;

/// Navy rounded square with a stylised N
#[component]
pub fn NexaLogo(#[prop(into, default = "w-10 h-10".to_string())] classes: String) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 100 100"
            class=classes
            xmlns="http://www.w3.org/2000/svg"
            aria-label="Nexa Advisory Logo"
        >
            <rect width="100" height="100" rx="22" fill="#1E3A8A" />
            // Left stem and diagonal
            <path
                d="M32 72V28L68 72"
                stroke="#F1F5F9"
                stroke-width="11"
                stroke-linecap="round"
                stroke-linejoin="round"
                fill="none"
            />
            // Right stem
            <path
                d="M68 72V28"
                stroke="#64748B"
                stroke-width="11"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
