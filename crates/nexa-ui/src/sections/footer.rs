//! Footer and the sticky mobile call-to-action bar

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, NexaLogo};
use crate::config::use_site_config;
use crate::models::content::{ASSESSMENT_ANCHOR, FOOTER_SERVICES, OFFICE_LOCATION};
use crate::scroll::{anchor_callback, on_anchor_click};

/// Current calendar year from the browser clock
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Copyright line for the footer
pub fn copyright_line(year: u32, company: &str) -> String {
    format!("© {year} {company}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let offset = config.header_offset_px();
    let mailto = config.mailto();
    let company = config.company_name().to_string();
    let contact_email = config.contact_email().to_string();
    let copyright = copyright_line(current_year(), &company);

    view! {
        <footer class="bg-navy-900 text-white border-t border-slate-800 pt-16 pb-8">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-12 mb-12">
                    <div class="col-span-1 md:col-span-2">
                        <a href="#" class="flex items-center gap-3 mb-6" on:click=on_anchor_click("#", offset)>
                            <NexaLogo classes="w-10 h-10 shadow-sm" />
                            <span class="text-2xl font-serif font-bold text-white">{company}</span>
                        </a>
                        <p class="text-slate-400 max-w-sm mb-6">
                            "Transforming chaotic property operations into streamlined, scalable enterprises through data-driven automation."
                        </p>
                        <div class="flex gap-4">
                            {(0..3)
                                .map(|_| {
                                    view! {
                                        <div class="w-10 h-10 rounded-full bg-slate-800 hover:bg-gold-500 transition-colors cursor-pointer" />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="font-bold mb-4">"Services"</h4>
                        <ul class="space-y-2 text-slate-400 text-sm">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|name| {
                                    view! {
                                        <li>
                                            <a href="#services" class="hover:text-gold-500" on:click=on_anchor_click("#services", offset)>
                                                {*name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-bold mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-slate-400 text-sm">
                            <li>{contact_email}</li>
                            <li>{OFFICE_LOCATION}</li>
                            <li class="pt-4">
                                <Button variant=ButtonVariant::Outline href=mailto classes="py-2 px-4 text-xs">
                                    "Contact Support"
                                </Button>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-sm text-slate-500">
                    <p>{copyright}</p>
                    <div class="flex gap-6 mt-4 md:mt-0">
                        <a href="#" class="hover:text-white" on:click=on_anchor_click("#", offset)>"Privacy Policy"</a>
                        <a href="#" class="hover:text-white" on:click=on_anchor_click("#", offset)>"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Fixed bottom bar shown below the `md` breakpoint
#[component]
pub fn MobileCta() -> impl IntoView {
    let offset = use_site_config().header_offset_px();

    view! {
        <div class="fixed bottom-0 left-0 w-full p-4 bg-white border-t border-slate-200 md:hidden z-40">
            <Button
                variant=ButtonVariant::Primary
                href=ASSESSMENT_ANCHOR
                classes="w-full shadow-lg"
                on_click=anchor_callback(ASSESSMENT_ANCHOR, offset)
            >
                "Get Free Assessment"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Nexa Advisory"),
            "© 2026 Nexa Advisory. All rights reserved."
        );
    }

    #[test]
    fn test_footer_components_exist() {
        let _footer = Footer;
        let _cta = MobileCta;
    }
}
