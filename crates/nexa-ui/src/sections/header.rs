//! Fixed page header with desktop nav and mobile menu

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconSvg, NexaLogo};
use crate::config::use_site_config;
use crate::logging;
use crate::models::HeaderState;
use crate::models::content::{ASSESSMENT_ANCHOR, NAVIGATION};
use crate::scroll::on_anchor_click;

/// Classes for the `<header>` element in each scroll state
pub fn header_classes(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-white/90 backdrop-blur-md shadow-sm py-3"
    } else {
        "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-5"
    }
}

/// Desktop nav link colour in each scroll state
pub fn nav_link_classes(scrolled: bool) -> &'static str {
    if scrolled {
        "text-sm font-medium hover:text-gold-500 transition-colors text-slate-600"
    } else {
        "text-sm font-medium hover:text-gold-500 transition-colors text-slate-600 md:text-slate-200"
    }
}

fn current_scroll_y() -> f64 {
    match web_sys::window().map(|w| w.scroll_y()) {
        Some(Ok(y)) => y,
        Some(Err(e)) => {
            logging::warn(&format!("scrollY unavailable: {e:?}"));
            0.0
        }
        None => 0.0,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let threshold = config.scroll_threshold_px();
    let offset = config.header_offset_px();
    let company = config.company_name().to_string();

    let state = RwSignal::new(HeaderState::default());

    // Recomputed on every scroll event, no throttling
    let listener = window_event_listener(ev::scroll, move |_| {
        let y = current_scroll_y();
        state.update(|s| s.on_scroll(y, threshold));
    });
    on_cleanup(move || listener.remove());

    // Close the menu, then scroll
    let nav_click = move |href: &'static str| {
        let scroll = on_anchor_click(href, offset);
        move |ev: MouseEvent| {
            state.update(HeaderState::on_navigate);
            scroll(ev);
        }
    };

    let scrolled = move || state.with(HeaderState::is_scrolled);
    let menu_open = move || state.with(HeaderState::is_menu_open);

    view! {
        <header class=move || header_classes(scrolled())>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href="#"
                    on:click=nav_click("#")
                    class="text-2xl font-serif font-bold text-navy-800 flex items-center gap-3"
                >
                    <NexaLogo classes="w-10 h-10 shadow-sm" />
                    <span class=move || {
                        if scrolled() {
                            "text-navy-900 transition-colors"
                        } else {
                            "text-navy-900 md:text-white transition-colors"
                        }
                    }>{company}</span>
                </a>

                // Desktop nav
                <nav class="hidden md:flex items-center gap-8">
                    {NAVIGATION
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    on:click=nav_click(item.href)
                                    class=move || nav_link_classes(scrolled())
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Button
                        variant=ButtonVariant::Gold
                        href=ASSESSMENT_ANCHOR
                        classes="px-5 py-2 text-xs uppercase tracking-wider"
                        on_click=Callback::new(nav_click(ASSESSMENT_ANCHOR))
                    >
                        "Get Scorecard"
                    </Button>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden text-navy-800"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| state.update(HeaderState::toggle_menu)
                >
                    {move || {
                        let icon = if menu_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconSvg icon=icon classes="w-6 h-6" /> }
                    }}
                </button>
            </div>

            // Mobile nav overlay
            <Show when=menu_open>
                <div class="absolute top-full left-0 w-full bg-white shadow-lg py-6 px-6 md:hidden border-t border-slate-100 animate-slide-down">
                    <div class="flex flex-col gap-4">
                        {NAVIGATION
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="text-lg font-medium text-slate-700 hover:text-navy-800"
                                        on:click=nav_click(item.href)
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <Button
                            variant=ButtonVariant::Primary
                            href=ASSESSMENT_ANCHOR
                            classes="w-full justify-center"
                            on_click=Callback::new(nav_click(ASSESSMENT_ANCHOR))
                        >
                            "Free Operations Assessment"
                        </Button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
