//! Inline SVG icons (24x24 stroke set)

use leptos::prelude::*;

/// Icons used across the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Menu,
    Close,
    ArrowRight,
    CheckCircle,
    BarChart,
    Settings,
    Users,
    FileCheck,
    ChevronRight,
    ChevronDown,
    ShieldCheck,
    Star,
    Quote,
}

impl Icon {
    /// Path data, drawn with `stroke="currentColor"`
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "M6 6l12 12"],
            Self::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
            Self::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Self::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 1 1 6 0",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 1 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::FileCheck => &[
                "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
                "M14 2v6h6",
                "m9 15 2 2 4-4",
            ],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::ShieldCheck => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"],
            Self::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Self::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
        }
    }
}

/// Renders an [`Icon`]; `filled` paints the interior with the text colour
#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(into, optional)] classes: String,
    #[prop(optional)] filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };

    view! {
        <svg
            class=classes
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
