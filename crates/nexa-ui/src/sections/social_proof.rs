//! Trust bar and client testimonials

use leptos::prelude::*;

use crate::components::{Icon, IconSvg, SectionHeading};
use crate::models::content::{TESTIMONIALS, TRUST_STATS, TRUSTED_BY, TrustStat};

fn trust_stat(stat: &'static TrustStat) -> impl IntoView {
    // The satisfaction stat is drawn as a row of five filled stars
    let badge = if stat.icon == Icon::Star {
        view! {
            <div class="flex text-gold-500 mb-2">
                {(0..5)
                    .map(|_| view! { <IconSvg icon=Icon::Star classes="w-6 h-6" filled=true /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    } else {
        view! { <IconSvg icon=stat.icon classes="w-8 h-8 text-navy-800 mb-2" /> }.into_any()
    };

    view! {
        <div class="flex flex-col items-center">
            {badge}
            <p class="font-bold text-navy-900">{stat.label}</p>
        </div>
    }
}

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section class="py-16 border-b border-slate-200 bg-white">
            <div class="container mx-auto px-6 text-center">
                <p class="text-sm font-bold text-slate-400 uppercase tracking-widest mb-8">
                    "Trusted By Industry Leaders"
                </p>
                <div class="flex flex-wrap justify-center gap-8 md:gap-16 opacity-60 grayscale hover:grayscale-0 transition-all duration-500">
                    {TRUSTED_BY
                        .iter()
                        .map(|name| {
                            view! {
                                <div class="text-xl font-serif font-bold text-slate-800 flex items-center gap-2">
                                    <div class="w-6 h-6 bg-slate-300 rounded-sm"></div>
                                    {*name}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-3 gap-8 mt-16 max-w-4xl mx-auto">
                    {TRUST_STATS.iter().map(trust_stat).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-24 bg-slate-50">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="What Our Clients Say"
                    subtitle="Hear from the property leaders who have scaled with us."
                    center=true
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="bg-white p-8 rounded-xl shadow-sm border border-slate-100 relative transition-transform duration-300 hover:-translate-y-1">
                                    <div class="absolute top-6 right-6 text-slate-200">
                                        <IconSvg icon=Icon::Quote classes="w-10 h-10 opacity-50" />
                                    </div>
                                    <div class="text-gold-500 mb-4 flex">
                                        {(0..5)
                                            .map(|_| view! { <IconSvg icon=Icon::Star classes="w-4 h-4" filled=true /> })
                                            .collect_view()}
                                    </div>
                                    <p class="text-slate-600 mb-6 italic relative z-10 leading-relaxed">
                                        {format!("\"{}\"", item.quote)}
                                    </p>
                                    <div class="flex items-center gap-4 mt-auto pt-4 border-t border-slate-50">
                                        <div class="w-10 h-10 bg-navy-800 rounded-full flex items-center justify-center text-white font-bold shrink-0">
                                            {item.initial().to_string()}
                                        </div>
                                        <div>
                                            <h4 class="font-bold text-navy-900 text-sm">{item.author}</h4>
                                            <p class="text-xs text-slate-500">
                                                {format!("{}, {}", item.role, item.company)}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
