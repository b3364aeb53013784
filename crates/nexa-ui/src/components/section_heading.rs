//! Section title with optional subtitle and gold underline

use leptos::prelude::*;

/// `center` aligns everything centrally; `light` is for dark backgrounds
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] center: bool,
    #[prop(optional)] light: bool,
) -> impl IntoView {
    let align = if center { "text-center" } else { "text-left" };
    let auto_margin = if center { "mx-auto" } else { "" };
    let title_color = if light { "text-white" } else { "text-navy-900" };
    let subtitle_color = if light { "text-slate-300" } else { "text-slate-600" };

    view! {
        <div class=format!("mb-12 {align}")>
            <h2 class=format!("text-3xl md:text-4xl font-serif font-bold mb-4 {title_color}")>
                {title}
            </h2>
            {subtitle.map(|text| view! {
                <p class=format!("text-lg md:text-xl max-w-2xl {auto_margin} {subtitle_color}")>
                    {text}
                </p>
            })}
            <div class=format!("h-1 w-20 bg-gold-500 mt-6 {auto_margin}") />
        </div>
    }
}
