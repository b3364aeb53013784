//! Efficiency scorecard request form
//!
//! The only stateful section. Submission is simulated: after a fixed delay
//! the form flips to its confirmation view and the draft is logged. Nothing
//! leaves the browser.
//!
//! The delay runs on a [`Timeout`] kept in local storage. It is cancelled
//! when the section unmounts, so a late completion never touches disposed
//! state.

use gloo_timers::callback::Timeout;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconSvg};
use crate::config::use_site_config;
use crate::logging;
use crate::models::content::{FORM_TRUST_MARKS, SCORECARD_BENEFITS};
use crate::models::{Challenge, FormPhase, LeadField, LeadForm, PortfolioSize};

const INPUT_CLASSES: &str = "w-full border border-slate-300 rounded-md p-4 text-base focus:border-navy-800 focus:ring-1 focus:ring-navy-800 outline-none transition-shadow appearance-none";
const SELECT_CLASSES: &str = "w-full border border-slate-300 rounded-md p-4 text-base focus:border-navy-800 focus:ring-1 focus:ring-navy-800 outline-none bg-white appearance-none text-slate-700 pr-10 cursor-pointer";
const LABEL_CLASSES: &str = "text-xs font-bold text-slate-700 uppercase tracking-wide";

/// Applies one input change to the form, logging rejected edits
fn apply_field(form: RwSignal<LeadForm>, field: LeadField, value: String) {
    let result = form.try_update(|f| f.update_field(field, value));
    if let Some(Err(e)) = result {
        logging::warn(&format!("Ignored edit to {field}: {e}"));
    }
}

/// Whether a `<select>` option matches the draft.
///
/// Selection is driven per option: a `<select>` value set before its
/// options are mounted is discarded, which happens when the form remounts
/// after a reset.
fn option_selected(form: RwSignal<LeadForm>, field: LeadField, value: &str) -> bool {
    form.with(|f| f.draft().get(field) == value)
}

/// Logs the simulated submission as JSON
fn log_submission(form: RwSignal<LeadForm>, contact_email: &str) {
    let submission = match form.try_with_untracked(|f| f.draft().submission()) {
        Some(Ok(submission)) => submission,
        Some(Err(e)) => {
            logging::error(&format!("Submitted draft is incomplete: {e}"));
            return;
        }
        None => return,
    };
    match serde_json::to_string(&submission) {
        Ok(json) => logging::info(&format!("Form submitted to: {contact_email} {json}")),
        Err(e) => logging::error(&format!("Could not serialize submission: {e}")),
    }
}

#[component]
pub fn LeadMagnet() -> impl IntoView {
    let config = use_site_config();
    let delay_ms = config.submit_delay_ms();
    let contact_email = config.contact_email().to_string();

    let form = RwSignal::new(LeadForm::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        pending.try_update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
    });

    let submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();

        match form.try_update(LeadForm::submit) {
            Some(Ok(())) => {
                let contact_email = contact_email.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    match form.try_update(LeadForm::complete) {
                        Some(Ok(())) => log_submission(form, &contact_email),
                        Some(Err(e)) => logging::warn(&format!("Submission not completed: {e}")),
                        None => {}
                    }
                });
                // Replacing drops (and cancels) any earlier timer
                pending.set_value(Some(timeout));
            }
            Some(Err(e)) => logging::warn(&format!("Submission blocked: {e}")),
            None => {}
        }
    });

    let reset = Callback::new(move |_: MouseEvent| {
        if let Some(Err(e)) = form.try_update(LeadForm::reset) {
            logging::warn(&format!("Reset ignored: {e}"));
        }
    });

    let submitted = move || form.with(LeadForm::is_submitted);
    let submitting = move || form.with(|f| f.phase() == FormPhase::Submitting);
    let value_of = move |field: LeadField| form.with(|f| f.draft().get(field).to_string());

    view! {
        <section id="assessment" class="py-24 bg-navy-900 relative overflow-hidden">
            <div class="absolute inset-0 bg-carbon opacity-20"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl mx-auto bg-white rounded-2xl shadow-2xl overflow-hidden flex flex-col md:flex-row">

                    // Scorecard pitch
                    <div class="md:w-5/12 bg-gold-500 p-8 md:p-12 text-navy-900 flex flex-col justify-center relative overflow-hidden">
                        <div class="absolute top-0 left-0 w-full h-full bg-white opacity-10 rotate-12 transform scale-150"></div>
                        <div class="relative z-10">
                            <h3 class="text-3xl font-serif font-bold mb-4">"Efficiency Scorecard"</h3>
                            <p class="text-navy-900/80 mb-6 font-medium">
                                "Benchmark your performance against top 10% of operators."
                            </p>
                            <ul class="space-y-3">
                                {SCORECARD_BENEFITS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-center gap-2 text-sm font-bold">
                                                <div class="bg-navy-900 text-gold-500 rounded-full p-1">
                                                    <IconSvg icon=Icon::CheckCircle classes="w-3 h-3" />
                                                </div>
                                                {*item}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>

                    <div class="md:w-7/12 p-8 md:p-12 bg-white">
                        <Show
                            when=submitted
                            fallback=move || {
                                view! {
                                    <form on:submit=move |ev| submit.run(ev) class="space-y-6">
                                        <div>
                                            <h4 class="text-2xl font-bold text-navy-900 mb-1">
                                                "Where does your operation stand?"
                                            </h4>
                                            <p class="text-slate-500 text-sm mb-6">
                                                "Get your free analysis. No generic advice."
                                            </p>
                                        </div>

                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                                            <div class="space-y-2">
                                                <label for="name" class=LABEL_CLASSES>"Name"</label>
                                                <input
                                                    id="name"
                                                    name="name"
                                                    required
                                                    autocomplete="name"
                                                    class=INPUT_CLASSES
                                                    placeholder="John Doe"
                                                    prop:value=move || value_of(LeadField::Name)
                                                    on:input=move |ev| {
                                                        apply_field(form, LeadField::Name, event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                            <div class="space-y-2">
                                                <label for="email" class=LABEL_CLASSES>"Email"</label>
                                                <input
                                                    id="email"
                                                    name="email"
                                                    type="email"
                                                    required
                                                    autocomplete="email"
                                                    class=INPUT_CLASSES
                                                    placeholder="john@company.com"
                                                    prop:value=move || value_of(LeadField::Email)
                                                    on:input=move |ev| {
                                                        apply_field(form, LeadField::Email, event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                        </div>

                                        <div class="space-y-2">
                                            <label for="units" class=LABEL_CLASSES>"Portfolio Size"</label>
                                            <div class="relative">
                                                <select
                                                    id="units"
                                                    name="units"
                                                    required
                                                    class=SELECT_CLASSES
                                                    on:change=move |ev| {
                                                        apply_field(form, LeadField::Units, event_target_value(&ev))
                                                    }
                                                >
                                                    <option value="" selected=move || option_selected(form, LeadField::Units, "")>
                                                        "Select Units..."
                                                    </option>
                                                    {PortfolioSize::ALL
                                                        .into_iter()
                                                        .map(|size| {
                                                            view! {
                                                                <option
                                                                    value=size.value()
                                                                    selected=move || option_selected(form, LeadField::Units, size.value())
                                                                >
                                                                    {size.label()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <div class="absolute inset-y-0 right-0 flex items-center px-4 pointer-events-none text-slate-500">
                                                    <IconSvg icon=Icon::ChevronDown classes="w-5 h-5" />
                                                </div>
                                            </div>
                                        </div>

                                        <div class="space-y-2">
                                            <label for="challenge" class=LABEL_CLASSES>"Biggest Challenge"</label>
                                            <div class="relative">
                                                <select
                                                    id="challenge"
                                                    name="challenge"
                                                    required
                                                    class=SELECT_CLASSES
                                                    on:change=move |ev| {
                                                        apply_field(form, LeadField::Challenge, event_target_value(&ev))
                                                    }
                                                >
                                                    <option value="" selected=move || option_selected(form, LeadField::Challenge, "")>
                                                        "Select Challenge..."
                                                    </option>
                                                    {Challenge::ALL
                                                        .into_iter()
                                                        .map(|challenge| {
                                                            view! {
                                                                <option
                                                                    value=challenge.value()
                                                                    selected=move || {
                                                                        option_selected(form, LeadField::Challenge, challenge.value())
                                                                    }
                                                                >
                                                                    {challenge.label()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <div class="absolute inset-y-0 right-0 flex items-center px-4 pointer-events-none text-slate-500">
                                                    <IconSvg icon=Icon::ChevronDown classes="w-5 h-5" />
                                                </div>
                                            </div>
                                        </div>

                                        <Button
                                            variant=ButtonVariant::Primary
                                            classes="w-full py-4 text-lg shadow-xl shadow-navy-900/10 active:scale-[0.99] transition-transform"
                                            submit=true
                                        >
                                            {move || {
                                                if submitting() { "Sending..." } else { "Get My Efficiency Score" }
                                            }}
                                        </Button>
                                        <p class="text-xs text-center text-slate-400 mt-4">
                                            "We value your privacy. No spam."
                                        </p>

                                        <div class="mt-6 pt-6 border-t border-slate-100 text-center">
                                            <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-3">
                                                "Trusted by teams at"
                                            </p>
                                            <div class="flex justify-center items-center gap-4 opacity-60 grayscale">
                                                {FORM_TRUST_MARKS
                                                    .iter()
                                                    .map(|name| {
                                                        view! {
                                                            <span class="font-serif font-bold text-xs text-slate-600 flex items-center gap-1">
                                                                <div class="w-2 h-2 bg-slate-400 rounded-full"></div>
                                                                {*name}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </form>
                                }
                            }
                        >
                            <div class="text-center h-full flex flex-col justify-center items-center py-12">
                                <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center text-green-600 mb-6 animate-bounce">
                                    <IconSvg icon=Icon::CheckCircle classes="w-8 h-8" />
                                </div>
                                <h4 class="text-2xl font-bold text-navy-900 mb-2">"Assessment Sent!"</h4>
                                <p class="text-slate-600 mb-6">
                                    "Check your inbox at "
                                    <span class="font-bold">{move || value_of(LeadField::Email)}</span>
                                    ". We've sent your preliminary scorecard and next steps."
                                </p>
                                <Button variant=ButtonVariant::Secondary on_click=reset>
                                    "Start New Assessment"
                                </Button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_lead_magnet_component_exists() {
        let _component = LeadMagnet;
    }

    #[test]
    fn test_apply_field_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(LeadForm::new());
            apply_field(form, LeadField::Email, "ops@example.com".to_string());
            assert_eq!(form.with_untracked(|f| f.draft().email.clone()), "ops@example.com");
            assert_eq!(form.with_untracked(|f| f.draft().name.clone()), "");
        });
    }

    #[test]
    fn test_option_selection_survives_reset() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(LeadForm::new());
            assert!(option_selected(form, LeadField::Units, ""));

            for (field, value) in [
                (LeadField::Name, "Jane"),
                (LeadField::Email, "jane@example.com"),
                (LeadField::Units, "50-150"),
                (LeadField::Challenge, "Vacancy"),
            ] {
                apply_field(form, field, value.to_string());
            }
            let cycled = form
                .try_update(|f| f.submit().and_then(|()| f.complete()).and_then(|()| f.reset()))
                .and_then(Result::ok);
            assert_eq!(cycled, Some(()));

            assert!(option_selected(form, LeadField::Units, "50-150"));
            assert!(!option_selected(form, LeadField::Units, ""));
            assert!(option_selected(form, LeadField::Challenge, "Vacancy"));
            assert!(!option_selected(form, LeadField::Challenge, "Staffing"));
        });
    }

    #[test]
    fn test_apply_field_ignored_after_submission() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(LeadForm::new());
            for (field, value) in [
                (LeadField::Name, "Jane"),
                (LeadField::Email, "jane@example.com"),
                (LeadField::Units, "300+"),
                (LeadField::Challenge, "Vacancy"),
            ] {
                apply_field(form, field, value.to_string());
            }
            let submitted = form
                .try_update(|f| f.submit().and_then(|()| f.complete()))
                .and_then(Result::ok);
            assert_eq!(submitted, Some(()));

            apply_field(form, LeadField::Name, "Someone Else".to_string());
            assert_eq!(form.with_untracked(|f| f.draft().name.clone()), "Jane");
        });
    }
}
