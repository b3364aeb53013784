//! Smooth in-page scrolling to anchor fragments
//!
//! Navigation on the page is done with anchor fragments (`#services`,
//! `#assessment`, ...) resolved here instead of by a router. The target
//! position leaves room for the fixed header:
//!
//! ```text
//! top = element.getBoundingClientRect().top + window.pageYOffset - header_offset
//! ```
//!
//! An empty fragment (`#`) scrolls to the top of the document. A fragment
//! naming no element is a no-op.
//!
//! # Example
//! ```
//! use nexa_ui::scroll::{ScrollTarget, target_offset};
//!
//! assert_eq!(ScrollTarget::parse("#services"), ScrollTarget::Anchor("services".to_string()));
//! assert_eq!(ScrollTarget::parse("#"), ScrollTarget::Top);
//! assert_eq!(target_offset(400.0, 1200.0, 85.0), 1515.0);
//! ```

use leptos::ev::MouseEvent;
use leptos::prelude::Callback;
use web_sys::{ScrollBehavior, ScrollToOptions, window};

use crate::error::{Result, UiError};
use crate::logging;

/// Where a scroll request should land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Top of the document
    Top,
    /// Element with the given id
    Anchor(String),
}

impl ScrollTarget {
    /// Parses an href such as `#case-studies` into a scroll target.
    ///
    /// Leading `#` characters are stripped; an empty remainder means the top
    /// of the page.
    pub fn parse(href: &str) -> Self {
        let id = href.trim().trim_start_matches('#');
        if id.is_empty() {
            Self::Top
        } else {
            Self::Anchor(id.to_string())
        }
    }
}

/// What a scroll request actually did
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    /// Scrolled to document top
    Top,
    /// Scrolled to the given vertical position
    Target(f64),
    /// No element with the given id, nothing happened
    Missing(String),
}

/// Document-space scroll position for an element, leaving room for the header.
///
/// `element_top` is the viewport-relative top from `getBoundingClientRect`,
/// `page_y_offset` the current vertical scroll.
pub fn target_offset(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

/// Smoothly scrolls the window to `href`.
///
/// # Errors
///
/// Returns an error if:
/// - No window object is available
/// - The window has no document
/// - The current scroll offset cannot be read
pub fn smooth_scroll_to(href: &str, header_offset: f64) -> Result<ScrollOutcome> {
    let window = window().ok_or(UiError::WindowUnavailable)?;

    let id = match ScrollTarget::parse(href) {
        ScrollTarget::Top => {
            scroll_window(&window, 0.0);
            return Ok(ScrollOutcome::Top);
        }
        ScrollTarget::Anchor(id) => id,
    };

    let document = window.document().ok_or(UiError::DocumentUnavailable)?;
    let Some(element) = document.get_element_by_id(&id) else {
        return Ok(ScrollOutcome::Missing(id));
    };

    let element_top = element.get_bounding_client_rect().top();
    let page_y_offset = window
        .page_y_offset()
        .map_err(|e| UiError::Browser(format!("pageYOffset: {e:?}")))?;

    let top = target_offset(element_top, page_y_offset, header_offset);
    scroll_window(&window, top);
    Ok(ScrollOutcome::Target(top))
}

fn scroll_window(window: &web_sys::Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Click handler for anchor links: suppresses the default jump and scrolls
/// smoothly instead. Failures are logged, never surfaced.
pub fn on_anchor_click(
    href: &'static str,
    header_offset: f64,
) -> impl Fn(MouseEvent) + Clone + Send + Sync + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        match smooth_scroll_to(href, header_offset) {
            Ok(ScrollOutcome::Missing(id)) => {
                logging::warn(&format!("Scroll target not found: #{id}"));
            }
            Ok(_) => {}
            Err(e) => logging::error(&format!("Scroll failed: {e}")),
        }
    }
}

/// [`on_anchor_click`] as a [`Callback`] for [`crate::components::Button`]
pub fn anchor_callback(href: &'static str, header_offset: f64) -> Callback<MouseEvent> {
    Callback::new(on_anchor_click(href, header_offset))
}
