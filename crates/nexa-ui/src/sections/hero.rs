//! Above-the-fold hero with the "automation core" illustration

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconSvg};
use crate::config::use_site_config;
use crate::models::content::{ASSESSMENT_ANCHOR, CASE_STUDIES_ANCHOR};
use crate::scroll::anchor_callback;

#[component]
pub fn Hero() -> impl IntoView {
    let offset = use_site_config().header_offset_px();

    view! {
        <section class="relative min-h-screen flex items-center pt-20 overflow-hidden bg-gradient-to-br from-slate-50 via-white to-blue-50/30">
            <div class="absolute top-0 right-0 w-1/2 h-full bg-gradient-to-l from-blue-100/20 to-transparent pointer-events-none" />
            <div class="absolute -top-24 -right-24 w-96 h-96 bg-gold-400/10 rounded-full blur-3xl" />

            <div class="container mx-auto px-6 relative z-10 grid md:grid-cols-2 gap-12 items-center">
                <div class="animate-fade-in-left">
                    <div class="inline-flex items-center gap-2 px-3 py-1 bg-navy-800/5 border border-navy-800/10 rounded-full text-navy-800 text-sm font-medium mb-6">
                        <span class="w-2 h-2 rounded-full bg-gold-500 animate-pulse" />
                        "Accepting New Portfolios (50-300 Units)"
                    </div>

                    <h1 class="text-4xl md:text-6xl font-serif font-bold text-navy-900 leading-tight mb-6">
                        "Stop Operational Chaos. "
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-navy-800 to-blue-600">
                            "Start Scaling Efficiently."
                        </span>
                    </h1>

                    <p class="text-lg md:text-xl text-slate-600 mb-8 leading-relaxed max-w-lg">
                        "We transform overwhelmed multifamily operators into streamlined, automated enterprises, without adding headcount."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <Button
                            variant=ButtonVariant::Primary
                            href=ASSESSMENT_ANCHOR
                            classes="shadow-xl shadow-navy-900/10"
                            on_click=anchor_callback(ASSESSMENT_ANCHOR, offset)
                        >
                            "Get Your Free Assessment"
                            <IconSvg icon=Icon::ArrowRight classes="ml-2 w-4 h-4" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            href=CASE_STUDIES_ANCHOR
                            on_click=anchor_callback(CASE_STUDIES_ANCHOR, offset)
                        >
                            "View Case Studies"
                        </Button>
                    </div>

                    <div class="mt-10 flex items-center gap-4 text-sm text-slate-500">
                        <div class="flex -space-x-2">
                            {(0..4)
                                .map(|_| {
                                    view! {
                                        <div class="w-8 h-8 rounded-full bg-slate-200 border-2 border-white flex items-center justify-center text-xs font-bold text-slate-500">
                                            <IconSvg icon=Icon::Users classes="w-4 h-4" />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p>
                            <span class="font-bold text-navy-800">"100+"</span>
                            " Portfolios Analyzed"
                        </p>
                    </div>
                </div>

                <div class="relative hidden md:block h-[600px]">
                    <div class="relative w-full h-full animate-scale-in">
                        // Central "system" card
                        <div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 w-80 bg-white rounded-xl shadow-2xl border border-slate-100 p-6 z-20">
                            <div class="flex items-center justify-between mb-4 border-b border-slate-100 pb-2">
                                <span class="font-serif font-bold text-navy-900">"Automation Core"</span>
                                <span class="text-xs text-green-600 bg-green-50 px-2 py-1 rounded-full">"Active"</span>
                            </div>
                            <div class="space-y-3">
                                <div class="flex items-center justify-between text-sm">
                                    <span class="text-slate-500 flex items-center gap-2">
                                        <IconSvg icon=Icon::FileCheck classes="w-4 h-4" />
                                        "Leases"
                                    </span>
                                    <span class="font-mono text-navy-800">"Auto-Sign"</span>
                                </div>
                                <div class="flex items-center justify-between text-sm">
                                    <span class="text-slate-500 flex items-center gap-2">
                                        <IconSvg icon=Icon::Settings classes="w-4 h-4" />
                                        "Maintenance"
                                    </span>
                                    <span class="font-mono text-navy-800">"Dispatched"</span>
                                </div>
                                <div class="mt-4 h-2 bg-slate-100 rounded-full overflow-hidden">
                                    <div class="h-full bg-gold-500 animate-grow-85" />
                                </div>
                                <p class="text-xs text-right text-slate-400 mt-1">"Efficiency: 85%"</p>
                            </div>
                        </div>

                        // Floating metrics
                        <div class="absolute top-20 right-10 bg-navy-800 text-white p-4 rounded-lg shadow-xl z-30 max-w-[160px] animate-float">
                            <p class="text-xs text-slate-300 uppercase tracking-wider">"Hours Saved"</p>
                            <p class="text-3xl font-bold text-gold-400">"18 hrs"</p>
                            <p class="text-xs text-slate-300">"per week/manager"</p>
                        </div>

                        <div class="absolute bottom-20 left-0 bg-white p-4 rounded-lg shadow-xl border-l-4 border-green-500 z-30 animate-float-slow">
                            <div class="flex items-center gap-3">
                                <div class="p-2 bg-green-100 rounded-full text-green-600">
                                    <IconSvg icon=Icon::BarChart classes="w-5 h-5" />
                                </div>
                                <div>
                                    <p class="text-sm font-bold text-slate-800">"Vacancy Cost"</p>
                                    <p class="text-xs text-slate-500">"Reduced by 42%"</p>
                                </div>
                            </div>
                        </div>

                        <svg class="absolute inset-0 w-full h-full z-0 opacity-30" viewBox="0 0 400 400">
                            <path d="M50,350 Q200,200 350,50" stroke="#1E3A8A" stroke-width="2" fill="none" stroke-dasharray="10,10" />
                            <path d="M50,50 Q200,200 350,350" stroke="#D4AF37" stroke-width="2" fill="none" />
                        </svg>
                    </div>
                </div>
            </div>
        </section>
    }
}
