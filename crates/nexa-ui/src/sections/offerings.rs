//! Methodology cards, services and case studies

use leptos::prelude::*;

use crate::components::{Icon, IconSvg, SectionHeading};
use crate::models::content::{
    AUDIT_SAMPLE, AUDIT_SAVINGS, CASE_STUDIES, SERVICES, ServiceOffering, VALUE_CARDS,
};

#[component]
pub fn ValueProp() -> impl IntoView {
    view! {
        <section id="methodology" class="py-24 bg-white relative">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="From Daily Firefighting to Strategic Growth"
                    subtitle="We identify the chaos, build the system, and verify the profit."
                    center=true
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {VALUE_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="p-8 bg-slate-50 rounded-xl border border-slate-100 hover:border-gold-500/30 hover:shadow-xl hover:-translate-y-1 transition-all duration-300 group">
                                    <div class="mb-6 p-4 bg-white rounded-lg inline-block shadow-sm group-hover:scale-110 transition-transform">
                                        <IconSvg icon=card.icon classes="w-8 h-8 text-gold-500" />
                                    </div>
                                    <h3 class="text-xl font-bold text-navy-900 mb-3">{card.title}</h3>
                                    <p class="text-slate-600 leading-relaxed">{card.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Numbered title, pitch and check-list for one offering
fn service_copy(service: &'static ServiceOffering) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold mb-4 flex items-center gap-3">
            <span class="bg-gold-500 text-navy-900 text-lg font-bold w-8 h-8 rounded-full flex items-center justify-center">
                {service.number}
            </span>
            {service.title}
        </h3>
        <p class="text-slate-300 mb-6 text-lg">{service.description}</p>
        <ul class="space-y-3 mb-8">
            {service
                .bullets
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-3">
                            <IconSvg icon=Icon::CheckCircle classes="w-5 h-5 text-gold-500 shrink-0 mt-1" />
                            <span class="text-slate-200">{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn audit_sample() -> impl IntoView {
    view! {
        <div class="bg-slate-800 p-2 rounded-xl shadow-2xl transform -rotate-1">
            <div class="bg-slate-900 p-6 rounded-lg border border-slate-700">
                <h4 class="text-gold-500 font-mono text-xs uppercase tracking-widest mb-4">
                    "Audit Output Example"
                </h4>
                <div class="space-y-4">
                    {AUDIT_SAMPLE
                        .iter()
                        .map(|row| {
                            view! {
                                <div class="flex justify-between items-center border-b border-slate-800 pb-2">
                                    <span class="text-sm text-slate-400">{row.process}</span>
                                    <span class="text-sm text-red-400">{row.cost}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="mt-4 bg-green-900/20 border border-green-900/50 p-3 rounded">
                        <p class="text-green-400 text-sm font-semibold">{AUDIT_SAVINGS}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn automation_visual() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-600 to-navy-800 p-1 rounded-xl shadow-2xl transform rotate-1">
            <div class="bg-slate-900 p-6 rounded-lg relative overflow-hidden h-64 flex items-center justify-center">
                <div class="absolute inset-0 bg-cubes opacity-10"></div>
                <div class="text-center z-10">
                    <div class="inline-block p-4 bg-blue-500/20 rounded-full mb-4 animate-pulse">
                        <IconSvg icon=Icon::Settings classes="w-12 h-12 text-blue-400" />
                    </div>
                    <p class="text-white font-mono">"Automating Workflows..."</p>
                    <p class="text-xs text-blue-300 mt-2">"Connecting CRM ↔ Accounting ↔ Maintenance"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    // The audit shows its sample output on the left, the execution offering
    // its visual on the right
    let rows = SERVICES.iter().enumerate().map(|(idx, service)| {
        if idx % 2 == 0 {
            view! {
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="order-2 md:order-1">{audit_sample()}</div>
                    <div class="order-1 md:order-2">{service_copy(service)}</div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>{service_copy(service)}</div>
                    <div>{automation_visual()}</div>
                </div>
            }
            .into_any()
        }
    });

    view! {
        <section id="services" class="py-24 bg-navy-900 text-white overflow-hidden">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="Elite Operational Consulting"
                    subtitle="Designed for portfolios ready to scale beyond manual limitations."
                    light=true
                />
                <div class="space-y-20">{rows.collect_view()}</div>
            </div>
        </section>
    }
}

#[component]
pub fn CaseStudies() -> impl IntoView {
    view! {
        <section id="case-studies" class="py-24 bg-slate-50">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="Transforming Operations, Delivering Results"
                    subtitle="Real results from portfolios just like yours."
                    center=true
                />
                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {CASE_STUDIES
                        .iter()
                        .map(|study| {
                            view! {
                                <div class="bg-white rounded-xl shadow-lg overflow-hidden border-t-4 border-gold-500">
                                    <div class="p-8">
                                        <div class="text-sm font-bold text-slate-400 uppercase tracking-wider mb-2">
                                            {study.title}
                                        </div>
                                        <h3 class="text-2xl font-serif font-bold text-navy-900 mb-6">
                                            {study.headline}
                                        </h3>
                                        <div class="grid grid-cols-3 gap-4 border-t border-slate-100 pt-6">
                                            {study
                                                .results
                                                .iter()
                                                .map(|metric| {
                                                    view! {
                                                        <div class="text-center">
                                                            <div class="text-lg md:text-xl font-bold text-navy-800">
                                                                {metric.value}
                                                            </div>
                                                            <div class="text-xs text-slate-500 mt-1">{metric.label}</div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                    <div class="bg-slate-50 px-8 py-4 border-t border-slate-100 flex justify-between items-center">
                                        <span class="text-sm font-medium text-slate-600">"Read full case study"</span>
                                        <IconSvg icon=Icon::ChevronRight classes="w-4 h-4 text-gold-500" />
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
