//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use nexa_ui::App;
use nexa_ui::config::SiteConfig;
use nexa_ui::error::UiError;
use nexa_ui::scroll::{ScrollOutcome, smooth_scroll_to};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Result<web_sys::Document, UiError> {
    web_sys::window()
        .ok_or(UiError::WindowUnavailable)?
        .document()
        .ok_or(UiError::DocumentUnavailable)
}

fn fresh_container() -> Result<HtmlElement, UiError> {
    let doc = document()?;
    let div = doc
        .create_element("div")
        .map_err(|e| UiError::Browser(format!("{e:?}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Browser("not an HtmlElement".to_string()))?;
    let body = doc.body().ok_or(UiError::DocumentUnavailable)?;
    body.append_child(&div)
        .map_err(|e| UiError::Browser(format!("{e:?}")))?;
    Ok(div)
}

fn query<T: JsCast>(root: &HtmlElement, selector: &str) -> Result<T, UiError> {
    root.query_selector(selector)
        .map_err(|e| UiError::Browser(format!("{e:?}")))?
        .ok_or_else(|| UiError::Browser(format!("missing {selector}")))?
        .dyn_into::<T>()
        .map_err(|_| UiError::Browser(format!("wrong element type for {selector}")))
}

fn fire(target: &web_sys::EventTarget, kind: &str) -> Result<(), UiError> {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init)
        .map_err(|e| UiError::Browser(format!("{e:?}")))?;
    target
        .dispatch_event(&event)
        .map_err(|e| UiError::Browser(format!("{e:?}")))?;
    Ok(())
}

#[wasm_bindgen_test]
fn scroll_to_missing_anchor_is_a_no_op() -> Result<(), UiError> {
    let outcome = smooth_scroll_to("#does-not-exist", 85.0)?;
    assert_eq!(outcome, ScrollOutcome::Missing("does-not-exist".to_string()));
    Ok(())
}

#[wasm_bindgen_test]
fn scroll_to_empty_anchor_goes_to_top() -> Result<(), UiError> {
    assert_eq!(smooth_scroll_to("#", 85.0)?, ScrollOutcome::Top);
    Ok(())
}

/// Fills all four fields the way a visitor would, then submits
fn fill_and_submit(container: &HtmlElement) -> Result<(), UiError> {
    let name = query::<HtmlInputElement>(container, "#name")?;
    name.set_value("Jane Doe");
    fire(&name, "input")?;

    let email = query::<HtmlInputElement>(container, "#email")?;
    email.set_value("jane@company.com");
    fire(&email, "input")?;

    let units = query::<HtmlSelectElement>(container, "#units")?;
    units.set_value("50-150");
    fire(&units, "change")?;

    let challenge = query::<HtmlSelectElement>(container, "#challenge")?;
    challenge.set_value("Vacancy");
    fire(&challenge, "change")?;

    query::<HtmlFormElement>(container, "#assessment form")?
        .request_submit()
        .map_err(|e| UiError::Browser(format!("{e:?}")))
}

#[wasm_bindgen_test]
async fn submitting_form_shows_confirmation_with_email() -> Result<(), UiError> {
    let container = fresh_container()?;
    let config = SiteConfig::new(85.0, 20.0, 10, "test@example.com", "Nexa Advisory")?;
    let _handle = mount_to(container.clone(), move || view! { <App config=config.clone() /> });

    for section in ["methodology", "services", "case-studies", "assessment"] {
        query::<HtmlElement>(&container, &format!("#{section}"))?;
    }

    fill_and_submit(&container)?;
    TimeoutFuture::new(50).await;

    let text = container.inner_text();
    assert!(text.contains("Assessment Sent!"), "confirmation not shown");
    assert!(text.contains("jane@company.com"), "email not shown verbatim");

    // The confirmation view has a single button: "Start New Assessment"
    query::<HtmlElement>(&container, "#assessment button")?.click();
    TimeoutFuture::new(10).await;

    let name = query::<HtmlInputElement>(&container, "#name")?;
    assert_eq!(name.value(), "Jane Doe");
    let email = query::<HtmlInputElement>(&container, "#email")?;
    assert_eq!(email.value(), "jane@company.com");
    let units = query::<HtmlSelectElement>(&container, "#units")?;
    assert_eq!(units.value(), "50-150");
    let challenge = query::<HtmlSelectElement>(&container, "#challenge")?;
    assert_eq!(challenge.value(), "Vacancy");
    Ok(())
}

#[wasm_bindgen_test]
async fn unmounting_during_submission_cancels_completion() -> Result<(), UiError> {
    let container = fresh_container()?;
    let config = SiteConfig::new(85.0, 20.0, 200, "test@example.com", "Nexa Advisory")?;
    let handle = mount_to(container.clone(), move || view! { <App config=config.clone() /> });

    fill_and_submit(&container)?;
    TimeoutFuture::new(10).await;
    assert!(container.inner_text().contains("Sending..."), "timer not pending");

    drop(handle);
    TimeoutFuture::new(400).await;

    assert!(
        !container.inner_text().contains("Assessment Sent!"),
        "completion ran after unmount"
    );
    Ok(())
}
